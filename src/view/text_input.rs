//! Bordered text input widget.

use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::state::TextInput;
use crate::view::styles::Styles;

/// Render `input` inside a bordered box titled `label`.
///
/// Blank inputs show their placeholder. The border turns red when the value
/// fails validation and the terminal cursor is placed only when `focused`.
pub fn render_text_input(
    frame: &mut Frame,
    area: Rect,
    input: &TextInput,
    label: &str,
    focused: bool,
    styles: Styles,
) {
    let border_style = if input.is_valid() {
        styles.border(focused)
    } else {
        styles.invalid_border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(label)
        .border_style(border_style);

    let text = if input.value().is_empty() {
        Text::from(Line::from(Span::styled(
            input.placeholder().to_string(),
            styles.placeholder(),
        )))
    } else {
        Text::from(input.value().to_string())
    };

    let inner = block.inner(area);
    let (row, col) = cursor_offset(input);
    let (scroll_y, scroll_x) = scroll_offset((row, col), inner);
    frame.render_widget(
        Paragraph::new(text).block(block).scroll((scroll_y, scroll_x)),
        area,
    );

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(Position {
            x: inner.x + col - scroll_x,
            y: inner.y + row - scroll_y,
        });
    }
}

/// Smallest `(rows, columns)` scroll that keeps the cursor inside `inner`.
///
/// The cursor sits after the last visible cell, so a full line scrolls by one.
pub fn scroll_offset(cursor: (u16, u16), inner: Rect) -> (u16, u16) {
    let (row, col) = cursor;
    (
        row.saturating_sub(inner.height.saturating_sub(1)),
        col.saturating_sub(inner.width.saturating_sub(1)),
    )
}

/// Display row and column of the cursor relative to the input's content.
///
/// Columns are measured in terminal cells so wide characters count twice.
pub fn cursor_offset(input: &TextInput) -> (u16, u16) {
    let (before, _) = input.split_at_cursor();
    let row = before.matches('\n').count();
    let line = before.rsplit('\n').next().unwrap_or("");
    (
        u16::try_from(row).unwrap_or(u16::MAX),
        u16::try_from(line.width()).unwrap_or(u16::MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn cursor_offset_counts_cells() {
        let input = TextInput::new("日本", "");
        assert_eq!(cursor_offset(&input), (0, 4));
    }

    #[test]
    fn cursor_offset_tracks_lines() {
        let mut input = TextInput::multiline("first\nab");
        input.cursor_end();
        assert_eq!(cursor_offset(&input), (1, 2));
    }

    #[test]
    fn blank_input_shows_placeholder() {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        let input = TextInput::new("", "get-users");

        terminal
            .draw(|frame| {
                render_text_input(
                    frame,
                    frame.area(),
                    &input,
                    "File name",
                    false,
                    Styles::new(ColorConfig::enabled(false)),
                );
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("File name"));
        assert!(text.contains("get-users"));
    }

    #[test]
    fn focused_input_places_cursor_after_text() {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        let input = TextInput::new("abc", "");

        terminal
            .draw(|frame| {
                render_text_input(
                    frame,
                    frame.area(),
                    &input,
                    "Title",
                    true,
                    Styles::new(ColorConfig::enabled(false)),
                );
            })
            .unwrap();

        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(4, 1));
    }

    #[test]
    fn scroll_offset_is_zero_while_cursor_fits() {
        assert_eq!(scroll_offset((0, 9), Rect::new(1, 1, 10, 1)), (0, 0));
        assert_eq!(scroll_offset((2, 0), Rect::new(1, 1, 10, 3)), (0, 0));
    }

    #[test]
    fn long_title_scrolls_to_keep_cursor_visible() {
        let mut terminal = Terminal::new(TestBackend::new(12, 3)).unwrap();
        let input = TextInput::new("abcdefghijklmno", "");

        terminal
            .draw(|frame| {
                render_text_input(
                    frame,
                    frame.area(),
                    &input,
                    "Title",
                    true,
                    Styles::new(ColorConfig::enabled(false)),
                );
            })
            .unwrap();

        let row: String = terminal.backend().buffer().content()[12..24]
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert_eq!(row, "│ghijklmno │");
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(10, 1));
    }

    #[test]
    fn tall_description_scrolls_to_cursor_line() {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        let input = TextInput::multiline("1\n2\n3\n4\n5");

        terminal
            .draw(|frame| {
                render_text_input(
                    frame,
                    frame.area(),
                    &input,
                    "Description",
                    true,
                    Styles::new(ColorConfig::enabled(false)),
                );
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(!text.contains('1'));
        assert!(!text.contains('2'));
        for visible in ['3', '4', '5'] {
            assert!(text.contains(visible), "line {visible} should be visible");
        }
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(2, 3));
    }
}
