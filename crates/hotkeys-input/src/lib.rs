//! hotkeys_input - Key codes, canonical key names and modifier state.

pub mod key;
pub mod modifiers;
pub mod state;

pub use key::Key;
pub use modifiers::Modifiers;
pub use state::{KeyEvent, KeyState, ModifierProbe};
