//! Modifier bitmask for hotkeys.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Set of modifier keys a hotkey requires (or that are currently held).
    ///
    /// The numeric value is persisted, and a larger value means a more
    /// specific binding when ordering the hotkey table.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Modifiers: u8 {
        const CONTROL = 1 << 0;
        const SHIFT = 1 << 1;
        const ALT = 1 << 2;
    }
}

impl Modifiers {
    /// Keep every bit, including ones without a named flag, so a stored
    /// mask reads back with the same value it was written with.
    pub const fn from_byte(byte: u8) -> Self {
        Self::from_bits_retain(byte)
    }

    /// `true` when every modifier in `self` is also in `held`.
    pub const fn is_subset_of(self, held: Modifiers) -> bool {
        self.bits() & held.bits() == self.bits()
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = Vec::new();
        if self.contains(Modifiers::CONTROL) {
            parts.push("C");
        }
        if self.contains(Modifiers::ALT) {
            parts.push("M");
        }
        if self.contains(Modifiers::SHIFT) {
            parts.push("S");
        }
        f.write_str(&parts.join("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_values_match_persisted_bytes() {
        assert_eq!(Modifiers::CONTROL.bits(), 1);
        assert_eq!(Modifiers::SHIFT.bits(), 2);
        assert_eq!(Modifiers::ALT.bits(), 4);
        assert_eq!((Modifiers::CONTROL | Modifiers::SHIFT).bits(), 3);
    }

    #[test]
    fn subset_semantics() {
        let ctrl = Modifiers::CONTROL;
        let ctrl_shift = Modifiers::CONTROL | Modifiers::SHIFT;
        assert!(Modifiers::empty().is_subset_of(Modifiers::empty()));
        assert!(Modifiers::empty().is_subset_of(ctrl_shift));
        assert!(ctrl.is_subset_of(ctrl_shift));
        assert!(!ctrl_shift.is_subset_of(ctrl));
        assert!(!Modifiers::ALT.is_subset_of(ctrl_shift));
    }

    #[test]
    fn from_byte_retains_unnamed_bits() {
        let mods = Modifiers::from_byte(0b1000_0001);
        assert_eq!(mods.bits(), 0b1000_0001);
        assert!(mods.contains(Modifiers::CONTROL));
    }

    #[test]
    fn display_lists_modifiers() {
        assert_eq!(Modifiers::empty().to_string(), "");
        assert_eq!((Modifiers::CONTROL | Modifiers::SHIFT).to_string(), "C-S");
        assert_eq!(Modifiers::all().to_string(), "C-M-S");
    }
}
