//! Key codes and the canonical key-name table.
//!
//! The names are what gets written into the options file, so the table is
//! append-only: renaming or reordering a key breaks saved hotkeys.

use std::fmt;
use std::str::FromStr;

macro_rules! keys {
    ($($variant:ident),+ $(,)?) => {
        /// A physical key (or extra mouse button) that can act as a hotkey trigger.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Key {
            $($variant),+
        }

        impl Key {
            /// Every key, in canonical table order.
            pub const ALL: &'static [Key] = &[$(Key::$variant),+];

            /// Canonical name used when persisting bindings.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Key::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

keys! {
    None,
    ShiftLeft, ShiftRight, ControlLeft, ControlRight,
    AltLeft, AltRight, WinLeft, WinRight, Menu,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10,
    F11, F12, F13, F14, F15, F16, F17, F18, F19, F20,
    F21, F22, F23, F24, F25, F26, F27, F28, F29, F30,
    F31, F32, F33, F34, F35,
    Up, Down, Left, Right,
    Enter, Escape, Space, Tab, BackSpace, Insert,
    Delete, PageUp, PageDown, Home, End, CapsLock,
    ScrollLock, PrintScreen, Pause, NumLock,
    Keypad0, Keypad1, Keypad2, Keypad3, Keypad4,
    Keypad5, Keypad6, Keypad7, Keypad8, Keypad9,
    KeypadDivide, KeypadMultiply, KeypadSubtract,
    KeypadAdd, KeypadDecimal, KeypadEnter,
    A, B, C, D, E, F, G, H, I, J,
    K, L, M, N, O, P, Q, R, S, T,
    U, V, W, X, Y, Z,
    Number0, Number1, Number2, Number3, Number4,
    Number5, Number6, Number7, Number8, Number9,
    Tilde, Minus, Plus, BracketLeft, BracketRight,
    Semicolon, Quote, Comma, Period, Slash, BackSlash,
    XButton1, XButton2,
}

impl Key {
    /// Number of entries in the key-name table.
    pub const COUNT: usize = Key::ALL.len();

    /// Look up a key by its canonical name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Key> {
        Key::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(name))
    }

    /// Position of this key in the table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Key that types `ch` on a US layout, shifted or not: `'b'` and `'B'` are
    /// both `B`, `'1'` and `'!'` are both `Number1`.
    pub fn from_char(ch: char) -> Option<Key> {
        let ch = ch.to_ascii_uppercase();
        match ch {
            'A'..='Z' => Some(Key::ALL[Key::A.index() + (ch as usize - 'A' as usize)]),
            '0'..='9' => Some(Key::ALL[Key::Number0.index() + (ch as usize - '0' as usize)]),
            ')' => Some(Key::Number0),
            '!' => Some(Key::Number1),
            '@' => Some(Key::Number2),
            '#' => Some(Key::Number3),
            '$' => Some(Key::Number4),
            '%' => Some(Key::Number5),
            '^' => Some(Key::Number6),
            '&' => Some(Key::Number7),
            '*' => Some(Key::Number8),
            '(' => Some(Key::Number9),
            '`' | '~' => Some(Key::Tilde),
            '-' | '_' => Some(Key::Minus),
            '=' | '+' => Some(Key::Plus),
            '[' | '{' => Some(Key::BracketLeft),
            ']' | '}' => Some(Key::BracketRight),
            ';' | ':' => Some(Key::Semicolon),
            '\'' | '"' => Some(Key::Quote),
            ',' | '<' => Some(Key::Comma),
            '.' | '>' => Some(Key::Period),
            '/' | '?' => Some(Key::Slash),
            '\\' | '|' => Some(Key::BackSlash),
            ' ' => Some(Key::Space),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}'", self.0)
    }
}

impl std::error::Error for UnknownKey {}

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::from_name(s.trim()).ok_or_else(|| UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_every_key_once() {
        assert_eq!(Key::COUNT, 130);
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn names_round_trip() {
        for key in Key::ALL {
            assert_eq!(Key::from_name(key.name()), Some(*key));
        }
    }

    #[test]
    fn from_name_ignores_case() {
        assert_eq!(Key::from_name("pageup"), Some(Key::PageUp));
        assert_eq!(Key::from_name("KEYPADENTER"), Some(Key::KeypadEnter));
        assert_eq!(Key::from_name("b"), Some(Key::B));
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert_eq!(Key::from_name("NotAKey"), None);
        assert_eq!(Key::from_name(""), None);
        assert!("Return".parse::<Key>().is_err());
    }

    #[test]
    fn from_char_letters_and_digits() {
        assert_eq!(Key::from_char('b'), Some(Key::B));
        assert_eq!(Key::from_char('Z'), Some(Key::Z));
        assert_eq!(Key::from_char('0'), Some(Key::Number0));
        assert_eq!(Key::from_char('9'), Some(Key::Number9));
        assert_eq!(Key::from_char('/'), Some(Key::Slash));
        assert_eq!(Key::from_char('é'), None);
    }

    #[test]
    fn from_char_shifted_symbols_map_to_their_key() {
        let shifted = [
            (')', Key::Number0),
            ('!', Key::Number1),
            ('@', Key::Number2),
            ('#', Key::Number3),
            ('$', Key::Number4),
            ('%', Key::Number5),
            ('^', Key::Number6),
            ('&', Key::Number7),
            ('*', Key::Number8),
            ('(', Key::Number9),
            ('~', Key::Tilde),
            ('_', Key::Minus),
            ('+', Key::Plus),
            ('?', Key::Slash),
            ('|', Key::BackSlash),
        ];
        for (ch, key) in shifted {
            assert_eq!(Key::from_char(ch), Some(key), "{:?}", ch);
        }
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(Key::BackSpace.to_string(), "BackSpace");
        assert_eq!(Key::F12.to_string(), "F12");
    }
}
