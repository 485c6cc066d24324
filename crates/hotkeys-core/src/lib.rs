//! hotkeys-core - hotkey table, match resolution and persistence.

pub mod error;
pub mod hotkeys;
pub mod options;
pub mod persist;
pub mod resolve;
pub mod table;
pub mod text_store;

pub use error::{HotkeyError, Result};
pub use hotkeys::{Hotkeys, MessageSink};
pub use options::{Options, OptionsStore};
pub use resolve::Resolved;
pub use table::{AddOutcome, Hotkey, HotkeyEntry, HotkeyTable, MAX_HOTKEYS};
pub use text_store::TextStore;

pub use hotkeys_input::{Key, KeyState, ModifierProbe, Modifiers};
