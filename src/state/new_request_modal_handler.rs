//! Keyboard handler for the new-request dialog.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::KeyBindings;
use crate::model::{KeyAction, Notification};
use crate::state::new_request_modal::{ModalAction, ModalEvent, ModalFocus, NewRequestModal};

/// Handle keyboard input while the dialog is open.
///
/// Translates the key into [`ModalEvent`]s and dispatches them. A rejected
/// create comes back as an error notification; the dialog stays open.
///
/// # Key Bindings
/// - Cancel binding (Esc): close without result
/// - Create binding (Ctrl+k, Alt+Enter): run the create flow
/// - Tab / Shift+Tab: move focus between fields and the button
/// - Enter: submit from a single-line field, press the focused button, or
///   insert a newline in the description
/// - Space: press the focused button
/// - Printable chars, Backspace, Delete, ←/→, Home/End: edit the focused field
pub fn handle_new_request_modal_key(
    modal: &mut NewRequestModal,
    key: KeyEvent,
    bindings: &KeyBindings,
) -> Option<Notification> {
    let event = match bindings.get(key) {
        Some(KeyAction::Cancel) => Some(ModalEvent::Action(ModalAction::Cancel)),
        Some(KeyAction::CreateRequest) => Some(ModalEvent::Action(ModalAction::Create)),
        _ => key_to_event(modal, key),
    };

    let event = event?;
    modal
        .dispatch(event)
        .err()
        .map(|rejection| Notification::error(rejection.to_string()))
}

/// Apply editing keys to the focused field and describe what happened.
fn key_to_event(modal: &mut NewRequestModal, key: KeyEvent) -> Option<ModalEvent> {
    match key.code {
        KeyCode::Tab => return Some(ModalEvent::Action(ModalAction::FocusNext)),
        KeyCode::BackTab => return Some(ModalEvent::Action(ModalAction::FocusPrevious)),
        _ => {}
    }

    let field = match modal.focus() {
        ModalFocus::Button(button) => {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(ModalEvent::Pressed(button)),
                _ => None,
            };
        }
        ModalFocus::Field(field) => field,
    };

    let input = modal.field_mut(field);
    let changed = match key.code {
        KeyCode::Enter if input.is_multiline() => input.insert_newline(),
        KeyCode::Enter => return Some(ModalEvent::Submitted(field)),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            input.insert_char(c)
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => {
            input.cursor_left();
            false
        }
        KeyCode::Right => {
            input.cursor_right();
            false
        }
        KeyCode::Home => {
            input.cursor_home();
            false
        }
        KeyCode::End => {
            input.cursor_end();
            false
        }
        _ => false,
    };

    changed.then_some(ModalEvent::Changed(field))
}
