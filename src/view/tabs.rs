//! Request pane tab bar widget.
//!
//! Displays the request tabs using ratatui's Tabs widget.
//! Selection state is managed by AppState.selected_tab.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::state::RequestTab;
use crate::view::styles::Styles;

/// Render the request tab bar.
///
/// # Arguments
/// * `frame` - The ratatui frame to render into
/// * `area` - The area to render the tab bar within
/// * `selected` - Currently selected tab
/// * `focused` - Whether the tab strip holds keyboard focus
/// * `styles` - Palette; colors are dropped under `NO_COLOR`
pub fn render_tab_bar(
    frame: &mut Frame,
    area: Rect,
    selected: RequestTab,
    focused: bool,
    styles: Styles,
) {
    let titles: Vec<Line> = RequestTab::ALL
        .iter()
        .map(|tab| Line::from(tab.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.border(focused)),
        )
        .highlight_style(styles.tab_highlight(focused))
        .select(selected.index());

    frame.render_widget(tabs, area);
}
