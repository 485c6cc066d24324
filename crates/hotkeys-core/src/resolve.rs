//! Match resolution against live modifier state.

use crate::table::HotkeyTable;
use hotkeys_input::{Key, ModifierProbe, Modifiers};

/// The macro a key press resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub text: &'a str,
    pub stays_open: bool,
}

impl HotkeyTable {
    /// First binding for `trigger` whose required modifiers are all in
    /// `held`. Table order puts the most specific binding first.
    pub fn resolve(&self, trigger: Key, held: Modifiers) -> Option<Resolved<'_>> {
        self.entries()
            .iter()
            .find(|entry| entry.trigger == trigger && entry.modifiers.is_subset_of(held))
            .map(|entry| Resolved {
                text: self.text(entry),
                stays_open: entry.stays_open,
            })
    }

    /// [`resolve`](Self::resolve) with the modifiers read from `probe`.
    pub fn resolve_with<P: ModifierProbe + ?Sized>(
        &self,
        trigger: Key,
        probe: &P,
    ) -> Option<Resolved<'_>> {
        self.resolve(trigger, probe.held())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotkeys_input::KeyState;

    fn ctrl_shift() -> Modifiers {
        Modifiers::CONTROL | Modifiers::SHIFT
    }

    #[test]
    fn resolves_simple_binding() {
        let mut table = HotkeyTable::new();
        table
            .add_or_replace(Key::B, Modifiers::CONTROL, "hello", false)
            .expect("add");
        assert_eq!(
            table.resolve(Key::B, Modifiers::CONTROL),
            Some(Resolved {
                text: "hello",
                stays_open: false
            })
        );
        assert!(table.remove(Key::B, Modifiers::CONTROL));
        assert_eq!(table.resolve(Key::B, Modifiers::CONTROL), None);
    }

    #[test]
    fn most_specific_binding_wins() {
        let mut table = HotkeyTable::new();
        // Added general-first so ordering has to come from the sort.
        table
            .add_or_replace(Key::B, Modifiers::CONTROL, "ctrl", false)
            .expect("add");
        table
            .add_or_replace(Key::B, ctrl_shift(), "ctrl-shift", true)
            .expect("add");

        let hit = table.resolve(Key::B, ctrl_shift()).expect("hit");
        assert_eq!(hit.text, "ctrl-shift");
        assert!(hit.stays_open);

        let hit = table.resolve(Key::B, Modifiers::CONTROL).expect("hit");
        assert_eq!(hit.text, "ctrl");
    }

    #[test]
    fn extra_held_modifiers_still_match() {
        let mut table = HotkeyTable::new();
        table
            .add_or_replace(Key::F5, Modifiers::empty(), "plain", false)
            .expect("add");
        assert_eq!(table.resolve(Key::F5, Modifiers::all()).map(|r| r.text), Some("plain"));
    }

    #[test]
    fn missing_required_modifier_does_not_match() {
        let mut table = HotkeyTable::new();
        table
            .add_or_replace(Key::B, ctrl_shift(), "x", false)
            .expect("add");
        assert_eq!(table.resolve(Key::B, Modifiers::CONTROL), None);
        assert_eq!(table.resolve(Key::B, Modifiers::empty()), None);
        assert_eq!(table.resolve(Key::C, ctrl_shift()), None);
    }

    #[test]
    fn resolve_with_key_state_probe() {
        let mut table = HotkeyTable::new();
        table
            .add_or_replace(Key::Enter, Modifiers::ALT, "/afk", true)
            .expect("add");

        let mut state = KeyState::new();
        assert_eq!(table.resolve_with(Key::Enter, &state), None);
        state.set_pressed(Key::AltRight, true);
        let hit = table.resolve_with(Key::Enter, &state).expect("hit");
        assert_eq!(hit.text, "/afk");
        assert!(hit.stays_open);
    }

    #[test]
    fn empty_table_never_matches() {
        let table = HotkeyTable::new();
        assert_eq!(table.resolve(Key::A, Modifiers::all()), None);
    }
}
