//! The hotkey table: trigger + modifier bindings ordered by specificity.
//!
//! Entries are kept sorted by descending modifier mask so that the first
//! entry whose required modifiers are held is also the most specific one
//! (see [`HotkeyTable::resolve`](crate::table::HotkeyTable::resolve)).

use crate::error::{HotkeyError, Result};
use crate::text_store::TextStore;
use hotkeys_input::{Key, Modifiers};

/// Default upper bound on the number of hotkeys.
pub const MAX_HOTKEYS: usize = 256;

/// One binding. `text_index` points into the table's [`TextStore`] and is
/// owned by this entry alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HotkeyEntry {
    pub trigger: Key,
    pub modifiers: Modifiers,
    pub text_index: usize,
    /// Keep the text-entry context open after inserting the macro.
    pub stays_open: bool,
}

/// Read-only view of a binding with its text resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hotkey<'a> {
    pub trigger: Key,
    pub modifiers: Modifiers,
    pub text: &'a str,
    pub stays_open: bool,
}

/// What [`HotkeyTable::add_or_replace`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Replaced,
}

#[derive(Clone, Debug)]
pub struct HotkeyTable {
    entries: Vec<HotkeyEntry>,
    texts: TextStore,
    max_hotkeys: usize,
}

impl Default for HotkeyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HotkeyTable {
    pub fn new() -> Self {
        Self::with_max(MAX_HOTKEYS)
    }

    /// Table holding at most `max_hotkeys` bindings.
    ///
    /// Only up to [`MAX_HOTKEYS`] slots are reserved up front; larger tables
    /// grow on demand.
    pub fn with_max(max_hotkeys: usize) -> Self {
        let reserve = max_hotkeys.min(MAX_HOTKEYS);
        Self {
            entries: Vec::with_capacity(reserve),
            texts: TextStore::with_capacity(reserve),
            max_hotkeys,
        }
    }

    pub fn max_hotkeys(&self) -> usize {
        self.max_hotkeys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in priority order.
    pub fn entries(&self) -> &[HotkeyEntry] {
        &self.entries
    }

    pub fn texts(&self) -> &TextStore {
        &self.texts
    }

    pub fn text(&self, entry: &HotkeyEntry) -> &str {
        self.texts.get(entry.text_index)
    }

    /// Bindings in priority order, with their texts.
    pub fn iter(&self) -> impl Iterator<Item = Hotkey<'_>> {
        self.entries.iter().map(|entry| self.view(entry))
    }

    /// The binding for exactly this trigger and modifier mask.
    pub fn get(&self, trigger: Key, modifiers: Modifiers) -> Option<Hotkey<'_>> {
        self.position(trigger, modifiers)
            .map(|i| self.view(&self.entries[i]))
    }

    /// Bind `text` to `trigger` + `modifiers`, replacing an existing binding
    /// for the same pair in place.
    ///
    /// A new pair is rejected with [`HotkeyError::CapacityExceeded`] when the
    /// table is full; nothing is modified in that case.
    pub fn add_or_replace(
        &mut self,
        trigger: Key,
        modifiers: Modifiers,
        text: &str,
        stays_open: bool,
    ) -> Result<AddOutcome> {
        if trigger == Key::None {
            return Err(HotkeyError::InvalidTrigger);
        }

        if let Some(i) = self.position(trigger, modifiers) {
            self.remove_text(self.entries[i].text_index);
            let text_index = self.texts.append(text);
            let entry = &mut self.entries[i];
            entry.text_index = text_index;
            entry.stays_open = stays_open;
            return Ok(AddOutcome::Replaced);
        }

        if self.entries.len() >= self.max_hotkeys {
            return Err(HotkeyError::CapacityExceeded {
                max: self.max_hotkeys,
            });
        }

        let text_index = self.texts.append(text);
        self.entries.push(HotkeyEntry {
            trigger,
            modifiers,
            text_index,
            stays_open,
        });
        // Most specific (largest mask) first.
        self.entries
            .sort_unstable_by(|a, b| b.modifiers.bits().cmp(&a.modifiers.bits()));
        Ok(AddOutcome::Added)
    }

    /// Remove the binding for `trigger` + `modifiers`. Returns `false` when
    /// there was none.
    pub fn remove(&mut self, trigger: Key, modifiers: Modifiers) -> bool {
        let Some(i) = self.position(trigger, modifiers) else {
            return false;
        };
        self.remove_text(self.entries[i].text_index);
        self.entries.remove(i);
        true
    }

    fn position(&self, trigger: Key, modifiers: Modifiers) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.trigger == trigger && entry.modifiers == modifiers)
    }

    fn view<'a>(&'a self, entry: &HotkeyEntry) -> Hotkey<'a> {
        Hotkey {
            trigger: entry.trigger,
            modifiers: entry.modifiers,
            text: self.texts.get(entry.text_index),
            stays_open: entry.stays_open,
        }
    }

    /// Free a text slot and renumber every entry that pointed past it. The
    /// entry that owned `index` is left dangling and must be rewritten or
    /// dropped by the caller.
    fn remove_text(&mut self, index: usize) {
        for entry in &mut self.entries {
            if entry.text_index > index {
                entry.text_index -= 1;
            }
        }
        self.texts.remove_at(index);
    }
}
