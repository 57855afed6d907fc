//! Notification toast in the bottom-right corner.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::Notifications;
use crate::view::styles::Styles;

const MAX_TOAST_WIDTH: u16 = 50;

/// Render the most recent notification, if any, above the footer line.
pub fn render_notifications(frame: &mut Frame, notifications: &Notifications, styles: Styles) {
    let Some(latest) = notifications.latest() else {
        return;
    };

    let area = toast_area(frame.area(), latest.message());
    let style = styles.notification(latest.severity());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(latest.message())
            .style(style)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(style)),
        area,
    );
}

/// Bottom-right rect sized to `message`, leaving the footer line visible.
pub fn toast_area(frame: Rect, message: &str) -> Rect {
    let text_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
    let width = text_width
        .saturating_add(2)
        .min(MAX_TOAST_WIDTH)
        .min(frame.width);
    let inner_width = width.saturating_sub(2).max(1);
    let lines = text_width.div_ceil(inner_width).max(1);
    let height = lines.saturating_add(2).min(frame.height.saturating_sub(1));

    Rect {
        x: frame.x + frame.width - width,
        y: frame.y + frame.height.saturating_sub(height + 1),
        width,
        height,
    }
}
