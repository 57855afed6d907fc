//! Editable text field state (pure).
//!
//! Cursor positions are counted in chars, not bytes. Every editing method
//! reports whether the value changed so callers can emit change events.

use crate::state::validators::{ValidationResult, Validator};

/// State of a single text field in a form.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars, `0..=value.chars().count()`.
    cursor: usize,
    placeholder: String,
    /// Treat an empty value as valid without consulting the validator.
    valid_empty: bool,
    /// Whether Enter inserts a newline instead of submitting.
    multiline: bool,
    validator: Option<&'static dyn Validator>,
}

impl TextInput {
    /// Single-line field with the cursor at the end of `value`.
    pub fn new(value: impl Into<String>, placeholder: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self {
            value,
            cursor,
            placeholder: placeholder.into(),
            valid_empty: false,
            multiline: false,
            validator: None,
        }
    }

    /// Multi-line text area with the cursor at the end of `value`.
    pub fn multiline(value: impl Into<String>) -> Self {
        Self {
            multiline: true,
            ..Self::new(value, "")
        }
    }

    /// Attach a validator consulted by [`Self::validate`].
    pub fn with_validator(mut self, validator: &'static dyn Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Accept an empty value regardless of the validator.
    pub fn with_valid_empty(mut self, valid_empty: bool) -> Self {
        self.valid_empty = valid_empty;
        self
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value. The cursor is clamped but otherwise left alone.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.cursor.min(self.len_chars());
    }

    /// Hint shown while the value is empty.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Replace the placeholder.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamping to the value length.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.len_chars());
    }

    /// True for text areas.
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// True when the value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Validate the current value.
    ///
    /// Empty values short-circuit to valid when `valid_empty` is set; fields
    /// without a validator are always valid.
    pub fn validate(&self) -> ValidationResult {
        if self.valid_empty && self.value.is_empty() {
            return ValidationResult::Valid;
        }
        match self.validator {
            Some(validator) => validator.validate(&self.value),
            None => ValidationResult::Valid,
        }
    }

    /// Shorthand for `validate().is_valid()`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// Insert a character at the cursor and advance.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch == '\n' && !self.multiline {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
        true
    }

    /// Insert a newline. No-op for single-line fields.
    pub fn insert_newline(&mut self) -> bool {
        self.insert_char('\n')
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len_chars() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        true
    }

    /// Move the cursor one char left.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one char right.
    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len_chars());
    }

    /// Move the cursor to the start.
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor past the last char.
    pub fn cursor_end(&mut self) {
        self.cursor = self.len_chars();
    }

    /// Text before and after the cursor, for rendering.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.byte_offset(self.cursor))
    }

    fn len_chars(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "text_input_tests.rs"]
mod tests;
