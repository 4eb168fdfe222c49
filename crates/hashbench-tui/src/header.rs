//! TUI header panel: title and chart tabs.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use hashbench_charts::ChartKind;

use crate::styles::ColorTheme;

/// Render the header with one tab per chart, `selected` highlighted.
pub fn render_header(frame: &mut Frame, area: Rect, selected: usize, trials: usize) {
    let theme = ColorTheme::default();
    let titles: Vec<Line> = ChartKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| Line::from(format!("{} {}", i + 1, kind.name())))
        .collect();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style())
        .title(Line::from(vec![
            Span::styled(" hashbench ", theme.header_style()),
            Span::styled(format!("| avg of {trials} runs "), theme.muted_style()),
        ]));

    let tabs = Tabs::new(titles)
        .block(block)
        .select(selected)
        .style(theme.text_style())
        .highlight_style(theme.header_style().add_modifier(Modifier::REVERSED));
    frame.render_widget(tabs, area);
}
