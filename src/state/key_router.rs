//! Keyboard routing for the application shell.
//!
//! An open dialog captures every key. Otherwise the key is looked up in the
//! bindings and the resulting action is applied to [`AppState`].

use crossterm::event::KeyEvent;
use tracing::debug;

use crate::config::KeyBindings;
use crate::model::{KeyAction, NewRequestData};
use crate::state::new_request_modal::NewRequestModal;
use crate::state::new_request_modal_handler::handle_new_request_modal_key;
use crate::state::tab_handler::handle_tab_action;
use crate::state::AppState;

/// What the event loop should do after a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
    /// The dialog closed with data; the caller persists it.
    RequestConfirmed(NewRequestData),
}

/// Route one key press.
pub fn route_key(state: &mut AppState, key: KeyEvent, bindings: &KeyBindings) -> KeyOutcome {
    if let Some(modal) = state.modal.as_mut() {
        let notification = handle_new_request_modal_key(modal, key, bindings);
        let still_open = modal.is_open();
        if let Some(notification) = notification {
            state.notify(notification);
        }
        if still_open {
            return KeyOutcome::Continue;
        }
        return match state
            .modal
            .take()
            .and_then(NewRequestModal::into_result)
            .flatten()
        {
            Some(data) => KeyOutcome::RequestConfirmed(data),
            None => {
                debug!("New request dialog cancelled");
                KeyOutcome::Continue
            }
        };
    }

    let Some(action) = bindings.get(key) else {
        return KeyOutcome::Continue;
    };
    apply_action(state, action)
}

fn apply_action(state: &mut AppState, action: KeyAction) -> KeyOutcome {
    match action {
        KeyAction::Quit => return KeyOutcome::Quit,
        KeyAction::NewRequest => state.open_new_request_modal(),
        KeyAction::NextTab | KeyAction::PreviousTab => {
            handle_tab_action(state, action);
        }
        KeyAction::FocusNext => state.focus_next(),
        KeyAction::FocusPrevious => state.focus_previous(),
        // Inside the tabbed pane the arrow keys walk focus too.
        KeyAction::PaneFocusNext | KeyAction::MoveDown if state.focus.is_request_pane() => {
            state.focus_next()
        }
        KeyAction::PaneFocusPrevious | KeyAction::MoveUp if state.focus.is_request_pane() => {
            state.focus_previous()
        }
        KeyAction::PaneFocusNext | KeyAction::PaneFocusPrevious => {}
        KeyAction::MoveUp => state.select_previous_row(),
        KeyAction::MoveDown => state.select_next_row(),
        KeyAction::CreateRequest | KeyAction::Cancel => {}
    }
    KeyOutcome::Continue
}

#[cfg(test)]
#[path = "key_router_tests.rs"]
mod tests;
