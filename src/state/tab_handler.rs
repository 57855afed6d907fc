//! Tab navigation keyboard action handler.
//!
//! Tab shortcuts reuse plain letter keys that mean other things elsewhere,
//! so they only switch tabs while the tab strip itself holds focus.

use tracing::trace;

use crate::model::KeyAction;
use crate::state::{AppState, FocusPane};

/// Handle a tab navigation keyboard action.
///
/// `NextTab` / `PreviousTab` move exactly one tab (wrapping at the ends)
/// when `state.focus` is [`FocusPane::TabStrip`]; otherwise nothing happens.
/// Any other action is ignored.
///
/// Returns `true` if the selected tab changed.
pub fn handle_tab_action(state: &mut AppState, action: KeyAction) -> bool {
    if state.focus != FocusPane::TabStrip {
        return false;
    }

    let before = state.selected_tab;
    state.selected_tab = match action {
        KeyAction::NextTab => before.next(),
        KeyAction::PreviousTab => before.previous(),
        _ => return false,
    };
    trace!(from = ?before, to = ?state.selected_tab, "Tab switched");
    state.selected_tab != before
}

// ===== Tests =====

#[cfg(test)]
#[path = "tab_handler_tests.rs"]
mod tests;
