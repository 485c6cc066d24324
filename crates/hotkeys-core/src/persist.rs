//! Encoding of hotkeys as options entries.
//!
//! Key: `hotkey-<KeyName>&<modifier byte>`, value: `<True|False>&<text>`.
//! The format is shared with existing option files and must not change.

use crate::error::{HotkeyError, Result};
use crate::options::OptionsStore;
use hotkeys_input::{Key, Modifiers};

pub const HOTKEY_PREFIX: &str = "hotkey-";

/// A hotkey decoded from a single options entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistedHotkey {
    pub trigger: Key,
    pub modifiers: Modifiers,
    pub text: String,
    pub stays_open: bool,
}

pub fn config_key(trigger: Key, modifiers: Modifiers) -> String {
    format!("{}{}&{}", HOTKEY_PREFIX, trigger.name(), modifiers.bits())
}

pub fn config_value(stays_open: bool, text: &str) -> String {
    format!("{}&{}", format_bool(stays_open), text)
}

fn format_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

fn parse_bool(input: &str) -> Option<bool> {
    if input.eq_ignore_ascii_case("true") {
        Some(true)
    } else if input.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Strip the `hotkey-` prefix, ignoring case.
fn strip_hotkey_prefix(key: &str) -> Option<&str> {
    let head = key.get(..HOTKEY_PREFIX.len())?;
    head.eq_ignore_ascii_case(HOTKEY_PREFIX)
        .then(|| &key[HOTKEY_PREFIX.len()..])
}

/// Split on the first `&`; both halves trimmed and non-empty.
fn split_pair(input: &str) -> Option<(&str, &str)> {
    let (left, right) = input.split_once('&')?;
    let (left, right) = (left.trim(), right.trim());
    (!left.is_empty() && !right.is_empty()).then_some((left, right))
}

/// Decode one options entry.
pub fn parse_entry(key: &str, value: &str) -> Result<PersistedHotkey> {
    let malformed = |reason: &str| HotkeyError::MalformedEntry {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    let suffix = strip_hotkey_prefix(key).ok_or_else(|| malformed("missing 'hotkey-' prefix"))?;
    let (key_name, mods_str) =
        split_pair(suffix).ok_or_else(|| malformed("expected '<key>&<modifiers>'"))?;
    let (more_str, text) =
        split_pair(value).ok_or_else(|| malformed("expected '<stays open>&<text>'"))?;

    let trigger = match Key::from_name(key_name) {
        Some(Key::None) | None => return Err(HotkeyError::UnknownKeyName(key_name.to_string())),
        Some(key) => key,
    };
    let modifiers = mods_str
        .parse::<u8>()
        .map(Modifiers::from_byte)
        .map_err(|err| malformed(&format!("invalid modifiers '{}': {}", mods_str, err)))?;
    let stays_open =
        parse_bool(more_str).ok_or_else(|| malformed(&format!("invalid boolean '{}'", more_str)))?;

    Ok(PersistedHotkey {
        trigger,
        modifiers,
        text: text.to_string(),
        stays_open,
    })
}

/// Every well-formed hotkey entry in `store`, in stored order. Malformed
/// or stale entries are skipped.
pub fn load_hotkeys<S: OptionsStore + ?Sized>(store: &S) -> Vec<PersistedHotkey> {
    let mut hotkeys: Vec<PersistedHotkey> = Vec::new();
    for (key, value) in store.pairs() {
        if strip_hotkey_prefix(key).is_none() {
            continue;
        }
        match parse_entry(key, value) {
            Ok(hotkey) => hotkeys.push(hotkey),
            Err(err) => log::debug!("skipping options entry '{}': {}", key, err),
        }
    }
    hotkeys
}

pub fn save_hotkey<S: OptionsStore + ?Sized>(
    store: &mut S,
    trigger: Key,
    modifiers: Modifiers,
    text: &str,
    stays_open: bool,
) -> Result<()> {
    let key = config_key(trigger, modifiers);
    let value = config_value(stays_open, text);
    store.set(&key, Some(&value))
}

pub fn delete_hotkey<S: OptionsStore + ?Sized>(
    store: &mut S,
    trigger: Key,
    modifiers: Modifiers,
) -> Result<()> {
    store.set(&config_key(trigger, modifiers), None)
}
