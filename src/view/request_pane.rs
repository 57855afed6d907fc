//! Request pane: tab bar plus the content of the selected tab.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::collection::CollectionNode;
use crate::model::RequestFile;
use crate::state::{FocusPane, RequestTab};
use crate::view::styles::Styles;
use crate::view::tabs::render_tab_bar;

/// Render the request pane for the selected node.
///
/// Layout: tab bar (3 lines) + tab body (remainder).
pub fn render_request_pane(
    frame: &mut Frame,
    area: Rect,
    node: Option<&CollectionNode>,
    selected_tab: RequestTab,
    focus: FocusPane,
    styles: Styles,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_tab_bar(
        frame,
        chunks[0],
        selected_tab,
        focus == FocusPane::TabStrip,
        styles,
    );

    let lines = match node {
        Some(node) => match node.request() {
            Some(request) => tab_lines(request, selected_tab, styles),
            None if node.is_directory() => {
                vec![placeholder_line("Select a request to view it.", styles)]
            }
            None => vec![placeholder_line("This request file could not be read.", styles)],
        },
        None => vec![placeholder_line("No request selected.", styles)],
    };

    let body = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.border(focus == FocusPane::TabBody)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(body, chunks[1]);
}

/// Text lines shown under `tab` for `request`.
pub fn tab_lines(request: &RequestFile, tab: RequestTab, styles: Styles) -> Vec<Line<'_>> {
    match tab {
        RequestTab::Headers if request.headers.is_empty() => {
            vec![placeholder_line("No headers.", styles)]
        }
        RequestTab::Headers => request
            .headers
            .iter()
            .map(|h| key_value_line(&h.name, &h.value, h.enabled))
            .collect(),
        RequestTab::Body => match &request.body {
            Some(body) if !body.content.is_empty() => {
                body.content.lines().map(Line::from).collect()
            }
            _ => vec![placeholder_line("No body.", styles)],
        },
        RequestTab::Query if request.params.is_empty() => {
            vec![placeholder_line("No query parameters.", styles)]
        }
        RequestTab::Query => request
            .params
            .iter()
            .map(|p| key_value_line(&p.name, &p.value, p.enabled))
            .collect(),
        RequestTab::Info => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(format!("{} ", request.method), styles.method()),
                    Span::raw(request.url.as_str()),
                ]),
                Line::from(format!("Name: {}", request.name)),
            ];
            if !request.description.is_empty() {
                lines.push(Line::default());
                lines.extend(request.description.lines().map(Line::from));
            }
            lines
        }
    }
}

fn key_value_line<'a>(name: &'a str, value: &'a str, enabled: bool) -> Line<'a> {
    let marker = if enabled { "[x] " } else { "[ ] " };
    Line::from(vec![Span::raw(marker), Span::raw(name), Span::raw(": "), Span::raw(value)])
}

fn placeholder_line(text: &'static str, styles: Styles) -> Line<'static> {
    Line::from(Span::styled(text, styles.placeholder()))
}
