//! Dense, index-addressed storage for macro texts.

/// Insertion-ordered macro texts with no gaps.
///
/// Removing a slot shifts every later slot down by one; whoever holds
/// indices into the store must renumber them (see [`HotkeyTable`]).
///
/// [`HotkeyTable`]: crate::table::HotkeyTable
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextStore {
    texts: Vec<String>,
}

impl TextStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            texts: Vec::with_capacity(capacity),
        }
    }

    /// Store `text` in the next free slot and return that slot.
    pub fn append(&mut self, text: &str) -> usize {
        self.texts.push(text.to_string());
        self.texts.len() - 1
    }

    /// Text at `index`.
    ///
    /// # Panics
    /// If `index >= self.len()`; callers keep their indices valid.
    pub fn get(&self, index: usize) -> &str {
        &self.texts[index]
    }

    /// Drop the text at `index` and close the gap.
    ///
    /// # Panics
    /// If `index >= self.len()`.
    pub fn remove_at(&mut self, index: usize) {
        self.texts.remove(index);
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.texts.iter().map(String::as_str)
    }
}
