//! The hotkey table bound to its options store.
//!
//! One [`Hotkeys`] value is created at startup and handed to whatever
//! processes input. Every user edit is written to the store immediately,
//! so there is nothing to flush on exit.

use crate::error::{HotkeyError, Result};
use crate::options::OptionsStore;
use crate::persist;
use crate::resolve::Resolved;
use crate::table::{AddOutcome, HotkeyTable};
use hotkeys_input::{Key, ModifierProbe, Modifiers};

/// Single-line, user-visible message channel (chat line, status bar, stderr).
pub trait MessageSink {
    fn add_message(&mut self, message: &str);
}

impl MessageSink for Vec<String> {
    fn add_message(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

#[derive(Debug)]
pub struct Hotkeys<S: OptionsStore> {
    table: HotkeyTable,
    store: S,
}

impl<S: OptionsStore> Hotkeys<S> {
    /// Build the table from every hotkey entry in `store`.
    ///
    /// Unparseable entries are skipped silently; entries beyond
    /// `max_hotkeys` are reported through `sink`.
    pub fn init(store: S, max_hotkeys: usize, sink: &mut dyn MessageSink) -> Self {
        let mut table = HotkeyTable::with_max(max_hotkeys);
        for hotkey in persist::load_hotkeys(&store) {
            if let Err(err) = table.add_or_replace(
                hotkey.trigger,
                hotkey.modifiers,
                &hotkey.text,
                hotkey.stays_open,
            ) {
                report(sink, &err);
            }
        }
        log::info!("loaded {} hotkeys", table.len());
        Self { table, store }
    }

    pub fn table(&self) -> &HotkeyTable {
        &self.table
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Bind or rebind a hotkey and persist it.
    ///
    /// Returns `Ok(false)` when the table is full; the reason goes to `sink`.
    /// Surrounding whitespace is dropped from `text`, since the stored form
    /// could not keep it.
    pub fn user_added(
        &mut self,
        trigger: Key,
        modifiers: Modifiers,
        text: &str,
        stays_open: bool,
        sink: &mut dyn MessageSink,
    ) -> Result<bool> {
        let text = text.trim();
        if text.is_empty() || text.contains(['\n', '\r']) {
            return Err(HotkeyError::MalformedEntry {
                key: persist::config_key(trigger, modifiers),
                reason: "macro text must be a single non-empty line".to_string(),
            });
        }

        let previous = self.binding(trigger, modifiers);
        match self.table.add_or_replace(trigger, modifiers, text, stays_open) {
            Ok(outcome) => {
                if outcome == AddOutcome::Replaced {
                    log::debug!("replaced hotkey {}", persist::config_key(trigger, modifiers));
                }
                if let Err(err) =
                    persist::save_hotkey(&mut self.store, trigger, modifiers, text, stays_open)
                {
                    self.restore(trigger, modifiers, previous);
                    return Err(err);
                }
                Ok(true)
            }
            Err(err @ HotkeyError::CapacityExceeded { .. }) => {
                report(sink, &err);
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Unbind a hotkey and delete its stored entry. `Ok(false)` when no such
    /// binding exists.
    pub fn user_removed(&mut self, trigger: Key, modifiers: Modifiers) -> Result<bool> {
        let Some(previous) = self.binding(trigger, modifiers) else {
            return Ok(false);
        };
        self.table.remove(trigger, modifiers);
        if let Err(err) = persist::delete_hotkey(&mut self.store, trigger, modifiers) {
            self.restore(trigger, modifiers, Some(previous));
            return Err(err);
        }
        Ok(true)
    }

    /// Macro for a key-down of `trigger` given the modifiers `probe` reports.
    pub fn is_hotkey<P: ModifierProbe + ?Sized>(
        &self,
        trigger: Key,
        probe: &P,
    ) -> Option<Resolved<'_>> {
        self.table.resolve_with(trigger, probe)
    }

    fn binding(&self, trigger: Key, modifiers: Modifiers) -> Option<(String, bool)> {
        self.table
            .get(trigger, modifiers)
            .map(|hotkey| (hotkey.text.to_string(), hotkey.stays_open))
    }

    /// Undo a table change whose store write failed.
    fn restore(&mut self, trigger: Key, modifiers: Modifiers, previous: Option<(String, bool)>) {
        let key = persist::config_key(trigger, modifiers);
        match previous {
            Some((text, stays_open)) => {
                // The slot is free or already ours, so this cannot hit the cap.
                if let Err(err) = self.table.add_or_replace(trigger, modifiers, &text, stays_open) {
                    log::error!("could not restore hotkey {}: {}", key, err);
                }
            }
            None => {
                self.table.remove(trigger, modifiers);
            }
        }
        log::warn!("store write failed; hotkey {} left unchanged", key);
    }
}

fn report(sink: &mut dyn MessageSink, err: &HotkeyError) {
    log::warn!("{}", err);
    sink.add_message(&err.to_string());
}
