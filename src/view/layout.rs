//! Screen layout.
//!
//! Collection pane (left), request pane (right) and a one-line footer. The
//! dialog and notifications are drawn over the top.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::config::KeyBindings;
use crate::state::{AppState, FocusPane};
use crate::view::collection_pane::render_collection_pane;
use crate::view::footer::{render_footer, HintContext};
use crate::view::new_request_modal::render_new_request_modal;
use crate::view::notification::render_notifications;
use crate::view::request_pane::render_request_pane;
use crate::view::styles::Styles;

/// Render the whole application frame.
pub fn render_layout(frame: &mut Frame, state: &AppState, bindings: &KeyBindings, styles: Styles) {
    let (content_area, footer_area) = split_footer(frame.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(content_area);

    render_collection_pane(
        frame,
        panes[0],
        state.collection(),
        state.selected_row(),
        state.focus == FocusPane::Collection && state.modal.is_none(),
        styles,
    );
    render_request_pane(
        frame,
        panes[1],
        state.selected_node(),
        state.selected_tab,
        state.focus,
        styles,
    );

    let context = match &state.modal {
        Some(modal) => {
            render_new_request_modal(frame, modal, styles);
            HintContext::Modal
        }
        None => HintContext::App,
    };

    render_notifications(frame, &state.notifications, styles);
    render_footer(frame, footer_area, bindings, context, styles);
}

/// Split off the bottom line for the footer.
pub fn split_footer(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}
