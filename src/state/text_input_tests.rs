//! Tests for text field editing.

use super::*;
use crate::state::validators::{DirectoryValidator, FileNameValidator};

// ===== Editing =====

#[test]
fn new_places_cursor_at_end() {
    let input = TextInput::new("hello", "");
    assert_eq!(input.cursor(), 5);
}

#[test]
fn insert_char_at_cursor() {
    let mut input = TextInput::new("hllo", "");
    input.set_cursor(1);
    assert!(input.insert_char('e'));
    assert_eq!(input.value(), "hello");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn insert_handles_multibyte_chars() {
    let mut input = TextInput::new("caf", "");
    input.insert_char('é');
    input.insert_char('!');
    assert_eq!(input.value(), "café!");
    assert_eq!(input.cursor(), 5);

    input.cursor_left();
    assert!(input.backspace());
    assert_eq!(input.value(), "caf!");
}

#[test]
fn backspace_at_start_is_noop() {
    let mut input = TextInput::new("abc", "");
    input.cursor_home();
    assert!(!input.backspace());
    assert_eq!(input.value(), "abc");
}

#[test]
fn delete_removes_char_under_cursor() {
    let mut input = TextInput::new("abc", "");
    input.cursor_home();
    assert!(input.delete());
    assert_eq!(input.value(), "bc");
    assert_eq!(input.cursor(), 0);

    input.cursor_end();
    assert!(!input.delete(), "Delete at end should do nothing");
}

#[test]
fn cursor_movement_saturates() {
    let mut input = TextInput::new("ab", "");
    input.cursor_right();
    assert_eq!(input.cursor(), 2);
    input.cursor_home();
    input.cursor_left();
    assert_eq!(input.cursor(), 0);
}

#[test]
fn set_cursor_clamps_to_length() {
    let mut input = TextInput::new("ab", "");
    input.set_cursor(99);
    assert_eq!(input.cursor(), 2);
}

#[test]
fn set_value_clamps_cursor() {
    let mut input = TextInput::new("abcdef", "");
    input.set_value("ab");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn single_line_rejects_newline() {
    let mut input = TextInput::new("a", "");
    assert!(!input.insert_newline());
    assert_eq!(input.value(), "a");
}

#[test]
fn multiline_accepts_newline() {
    let mut area = TextInput::multiline("line one");
    assert!(area.is_multiline());
    assert!(area.insert_newline());
    area.insert_char('x');
    assert_eq!(area.value(), "line one\nx");
}

#[test]
fn split_at_cursor_for_rendering() {
    let mut input = TextInput::new("abcd", "");
    input.set_cursor(1);
    assert_eq!(input.split_at_cursor(), ("a", "bcd"));
}

// ===== Validation =====

#[test]
fn field_without_validator_is_valid() {
    assert!(TextInput::new("", "").is_valid());
}

#[test]
fn valid_empty_skips_validator() {
    let input = TextInput::new("", "").with_validator(&FileNameValidator);
    assert!(!input.is_valid(), "Empty should fail the bare validator");

    let input = input.with_valid_empty(true);
    assert!(input.is_valid(), "valid_empty should accept blank input");
}

#[test]
fn valid_empty_still_validates_whitespace() {
    let input = TextInput::new("   ", "")
        .with_validator(&FileNameValidator)
        .with_valid_empty(true);
    assert!(!input.is_valid());
}

#[test]
fn directory_field_uses_validator() {
    let mut input = TextInput::new("api", "").with_validator(&DirectoryValidator);
    assert!(input.is_valid());
    input.set_value("../api");
    assert_eq!(input.validate().reason(), Some("Invalid directory"));
}
