//! Held-key tracking and the modifier probe consulted at match time.

use crate::key::Key;
use crate::modifiers::Modifiers;

/// Answers "is this modifier held right now".
pub trait ModifierProbe {
    fn control_held(&self) -> bool;
    fn shift_held(&self) -> bool;
    fn alt_held(&self) -> bool;

    /// Snapshot of the held modifiers as a mask.
    fn held(&self) -> Modifiers {
        let mut mods = Modifiers::empty();
        if self.control_held() {
            mods |= Modifiers::CONTROL;
        }
        if self.shift_held() {
            mods |= Modifiers::SHIFT;
        }
        if self.alt_held() {
            mods |= Modifiers::ALT;
        }
        mods
    }
}

/// A fixed mask works as a probe, e.g. when resolving from a typed combo.
impl ModifierProbe for Modifiers {
    fn control_held(&self) -> bool {
        self.contains(Modifiers::CONTROL)
    }

    fn shift_held(&self) -> bool {
        self.contains(Modifiers::SHIFT)
    }

    fn alt_held(&self) -> bool {
        self.contains(Modifiers::ALT)
    }
}

/// Edge-triggered change notification produced by [`KeyState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

/// Press/release state for every key in the table.
#[derive(Clone, Debug)]
pub struct KeyState {
    pressed: [bool; Key::COUNT],
    /// Report repeated presses of an already-held key as fresh `Down` events.
    pub key_repeat: bool,
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyState {
    pub fn new() -> Self {
        Self {
            pressed: [false; Key::COUNT],
            key_repeat: false,
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    /// Record a press or release. Returns the event to raise, if any.
    pub fn set_pressed(&mut self, key: Key, pressed: bool) -> Option<KeyEvent> {
        let slot = &mut self.pressed[key.index()];
        if *slot == pressed && !self.key_repeat {
            return None;
        }
        *slot = pressed;
        Some(if pressed {
            KeyEvent::Down(key)
        } else {
            KeyEvent::Up(key)
        })
    }

    /// Release every held key, e.g. when the window loses focus.
    pub fn clear(&mut self) -> Vec<KeyEvent> {
        let held: Vec<Key> = Key::ALL
            .iter()
            .copied()
            .filter(|key| self.is_pressed(*key))
            .collect();
        held.into_iter()
            .filter_map(|key| self.set_pressed(key, false))
            .collect()
    }
}

impl ModifierProbe for KeyState {
    fn control_held(&self) -> bool {
        self.is_pressed(Key::ControlLeft) || self.is_pressed(Key::ControlRight)
    }

    fn shift_held(&self) -> bool {
        self.is_pressed(Key::ShiftLeft) || self.is_pressed(Key::ShiftRight)
    }

    fn alt_held(&self) -> bool {
        self.is_pressed(Key::AltLeft) || self.is_pressed(Key::AltRight)
    }
}
