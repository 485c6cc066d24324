//! Key combos typed on the command line, e.g. `C-S-B` or `alt-F1`.

use hotkeys_core::{Key, Modifiers};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Accepted spellings for each modifier, matched without regard to case.
const MODIFIER_NAMES: &[(&str, Modifiers)] = &[
    ("c", Modifiers::CONTROL),
    ("ctrl", Modifiers::CONTROL),
    ("control", Modifiers::CONTROL),
    ("s", Modifiers::SHIFT),
    ("shift", Modifiers::SHIFT),
    ("m", Modifiers::ALT),
    ("alt", Modifiers::ALT),
    ("meta", Modifiers::ALT),
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ComboError {
    #[error("empty key")]
    EmptyKey,

    #[error("unknown key '{0}'")]
    UnknownKey(String),

    #[error("'None' cannot be used as a hotkey")]
    NoneKey,

    #[error("empty modifier segment")]
    EmptyModifier,

    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),

    #[error("duplicate modifier '{0}'")]
    DuplicateModifier(String),

    #[error("missing modifier before '-'")]
    MissingModifier,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}-{}", self.modifiers, self.key)
        }
    }
}

impl FromStr for KeyCombo {
    type Err = ComboError;

    fn from_str(input: &str) -> Result<Self, ComboError> {
        let (prefix, key_token) = split_key(input.trim())?;
        let mut modifiers = Modifiers::empty();
        for name in prefix.into_iter().flat_map(|p| p.split('-')) {
            let flag = modifier_flag(name)?;
            if modifiers.contains(flag) {
                return Err(ComboError::DuplicateModifier(name.trim().to_string()));
            }
            modifiers.insert(flag);
        }
        Ok(KeyCombo {
            key: key_from_token(key_token)?,
            modifiers,
        })
    }
}

/// `C-S-B` -> (`Some("C-S")`, `"B"`). A `-` after the last separator is the
/// minus key: `C--` binds Ctrl+Minus.
fn split_key(input: &str) -> Result<(Option<&str>, &str), ComboError> {
    if input == "-" {
        return Ok((None, input));
    }
    if let Some(prefix) = input.strip_suffix("--") {
        if prefix.is_empty() {
            return Err(ComboError::MissingModifier);
        }
        return Ok((Some(prefix), "-"));
    }
    Ok(match input.rsplit_once('-') {
        Some((prefix, key)) => (Some(prefix), key),
        None => (None, input),
    })
}

fn modifier_flag(name: &str) -> Result<Modifiers, ComboError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ComboError::EmptyModifier);
    }
    MODIFIER_NAMES
        .iter()
        .find(|(spelling, _)| spelling.eq_ignore_ascii_case(name))
        .map(|(_, flag)| *flag)
        .ok_or_else(|| ComboError::UnknownModifier(name.to_string()))
}

/// A single character is the key that types it; anything longer is a
/// canonical key name.
fn key_from_token(token: &str) -> Result<Key, ComboError> {
    let token = token.trim();
    let mut chars = token.chars();
    let key = match (chars.next(), chars.next()) {
        (None, _) => return Err(ComboError::EmptyKey),
        (Some(ch), None) => Key::from_char(ch),
        _ => Key::from_name(token),
    };
    match key {
        Some(Key::None) => Err(ComboError::NoneKey),
        Some(key) => Ok(key),
        None => Err(ComboError::UnknownKey(token.to_string())),
    }
}
