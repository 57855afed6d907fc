//! Collection tree pane.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::collection::{CollectionTree, TreeRow};
use crate::view::styles::Styles;

/// Render the flattened collection with the selected row highlighted.
///
/// Directories get a trailing `/`; requests show their HTTP method.
pub fn render_collection_pane(
    frame: &mut Frame,
    area: Rect,
    tree: &CollectionTree,
    selected_row: Option<usize>,
    focused: bool,
    styles: Styles,
) {
    let title = format!(" {} ", tree.root().name);
    let rows = tree.flatten();
    let items: Vec<ListItem> = if rows.is_empty() {
        vec![ListItem::new(Span::styled(
            "No requests yet",
            styles.placeholder(),
        ))]
    } else {
        rows.iter().map(|row| row_item(row, styles)).collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(styles.border(focused)),
        )
        .highlight_style(styles.selected_row());

    let mut state = ListState::default().with_selected(selected_row.filter(|_| !rows.is_empty()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn row_item<'a>(row: &TreeRow<'a>, styles: Styles) -> ListItem<'a> {
    let indent = "  ".repeat(row.depth);
    let node = row.node;
    let line = if node.is_directory() {
        Line::from(vec![
            Span::raw(indent),
            Span::styled(format!("{}/", node.name), styles.directory()),
        ])
    } else {
        let method = node
            .request()
            .map(|request| request.method.to_string())
            .unwrap_or_else(|| "???".to_string());
        Line::from(vec![
            Span::raw(indent),
            Span::styled(format!("{method:<6} "), styles.method()),
            Span::raw(node.name.as_str()),
        ])
    };
    ListItem::new(line)
}
