//! New-request dialog rendering.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::collection::FILE_SUFFIX;
use crate::state::{ButtonId, FieldId, ModalFocus, NewRequestModal};
use crate::view::styles::Styles;
use crate::view::text_input::render_text_input;

const MODAL_WIDTH: u16 = 64;
/// Title, file name, description (5), directory, button row and borders.
const MODAL_HEIGHT: u16 = 3 + 3 + 5 + 3 + 1 + 2;

/// Render the dialog centered over the current frame.
///
/// # Layout
/// - Title input
/// - File name input with the fixed file suffix shown to its right
/// - Multi-line description input
/// - Directory input
/// - Create button
pub fn render_new_request_modal(frame: &mut Frame, modal: &NewRequestModal, styles: Styles) {
    let area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Line::from(" New request ").alignment(Alignment::Center))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let focused = |field: FieldId| modal.focus() == ModalFocus::Field(field);

    render_text_input(
        frame,
        rows[0],
        modal.field(FieldId::Title),
        "Title",
        focused(FieldId::Title),
        styles,
    );

    let suffix_width = u16::try_from(FILE_SUFFIX.len()).unwrap_or(u16::MAX) + 1;
    let file_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(suffix_width)])
        .split(rows[1]);
    render_text_input(
        frame,
        file_row[0],
        modal.field(FieldId::FileName),
        "File name (optional)",
        focused(FieldId::FileName),
        styles,
    );
    // Vertically align with the input's text line.
    let suffix_area = Rect {
        y: file_row[1].y + 1,
        height: 1,
        ..file_row[1]
    };
    frame.render_widget(
        Paragraph::new(format!(" {FILE_SUFFIX}")).style(styles.hint()),
        suffix_area,
    );

    render_text_input(
        frame,
        rows[2],
        modal.field(FieldId::Description),
        "Description (optional)",
        focused(FieldId::Description),
        styles,
    );
    render_text_input(
        frame,
        rows[3],
        modal.field(FieldId::Directory),
        "Directory",
        focused(FieldId::Directory),
        styles,
    );

    let button_focused = modal.focus() == ModalFocus::Button(ButtonId::Create);
    frame.render_widget(
        Paragraph::new(Span::styled("[ Create ]", styles.button(button_focused)))
            .alignment(Alignment::Right),
        rows[4],
    );
}

/// Rect of at most `width` x `height` centered in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);
    Rect {
        x: area.x + (area.width - popup_width) / 2,
        y: area.y + (area.height - popup_height) / 2,
        width: popup_width,
        height: popup_height,
    }
}
