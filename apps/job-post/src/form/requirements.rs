//! Requirements tag input: a free-text buffer with an autocomplete dropdown
//! over the fixed suggestion pool.

use crate::models::job::{Requirements, REQUIREMENT_SUGGESTIONS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementsEditor {
    buffer: String,
    dropdown_open: bool,
}

impl RequirementsEditor {
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Replaces the buffer. The dropdown opens iff the trimmed text is non-empty.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.dropdown_open = !text.trim().is_empty();
    }

    /// Re-opens the dropdown on focus, but only when there is something to show.
    pub fn focus(&mut self, confirmed: &Requirements) {
        if !self.suggestions(confirmed).is_empty() {
            self.dropdown_open = true;
        }
    }

    /// Adds `tag` to `confirmed`. On success the buffer is cleared and the dropdown closed;
    /// blank or duplicate tags leave everything untouched.
    pub fn add(&mut self, confirmed: &mut Requirements, tag: &str) -> bool {
        if !confirmed.insert(tag) {
            return false;
        }
        self.buffer.clear();
        self.dropdown_open = false;
        true
    }

    /// Confirms the trimmed buffer as a tag.
    pub fn commit(&mut self, confirmed: &mut Requirements) -> bool {
        let tag = self.buffer.trim().to_string();
        self.add(confirmed, &tag)
    }

    /// Pool entries containing the buffer (case-insensitive) that are not yet confirmed.
    pub fn suggestions(&self, confirmed: &Requirements) -> Vec<&'static str> {
        if self.buffer.trim().is_empty() {
            return Vec::new();
        }
        let needle = self.buffer.to_lowercase();
        REQUIREMENT_SUGGESTIONS
            .iter()
            .copied()
            .filter(|s| s.to_lowercase().contains(&needle) && !confirmed.contains(s))
            .collect()
    }

    /// The dropdown is only drawn when it is open and has entries.
    pub fn suggestions_visible(&self, confirmed: &Requirements) -> bool {
        self.dropdown_open && !self.suggestions(confirmed).is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
