//! Key hint footer.
//!
//! Hints are derived from the active key bindings so user overrides show up.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::view::styles::Styles;

/// Which set of hints to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintContext {
    /// Main screen.
    App,
    /// New-request dialog is open.
    Modal,
}

const APP_HINTS: [KeyAction; 6] = [
    KeyAction::NewRequest,
    KeyAction::FocusNext,
    KeyAction::FocusPrevious,
    KeyAction::NextTab,
    KeyAction::PreviousTab,
    KeyAction::Quit,
];

const MODAL_HINTS: [KeyAction; 2] = [KeyAction::CreateRequest, KeyAction::Cancel];

/// `(key, description)` pairs for the context. Unbound actions are skipped.
pub fn footer_hints(bindings: &KeyBindings, context: HintContext) -> Vec<(String, &'static str)> {
    let actions: &[KeyAction] = match context {
        HintContext::App => &APP_HINTS,
        HintContext::Modal => &MODAL_HINTS,
    };
    let mut hints: Vec<(String, &'static str)> = actions
        .iter()
        .filter_map(|action| {
            bindings
                .key_for(*action)
                .map(|key| (key, action.description()))
        })
        .collect();
    if context == HintContext::Modal {
        hints.push(("tab".to_string(), "Next field"));
    }
    hints
}

/// Plain-text form of the footer, as rendered.
pub fn footer_text(bindings: &KeyBindings, context: HintContext) -> String {
    footer_hints(bindings, context)
        .iter()
        .map(|(key, description)| format!("{key} {description}"))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Render the hint line for `context` into `area`.
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    bindings: &KeyBindings,
    context: HintContext,
    styles: Styles,
) {
    let mut spans = Vec::new();
    for (i, (key, description)) in footer_hints(bindings, context).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key, styles.hint_key()));
        spans.push(Span::styled(format!(" {description}"), styles.hint()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
