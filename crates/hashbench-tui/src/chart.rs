//! Chart panel.

use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition};
use ratatui::Frame;

use hashbench_charts::{series, x_bounds, y_bounds, ChartKind};
use hashbench_core::aggregator::AggregatedSummary;

use crate::styles::ColorTheme;

fn axis_labels(lo: f64, hi: f64, precision: usize) -> Vec<Line<'static>> {
    let mid = (lo + hi) / 2.0;
    [lo, mid, hi]
        .iter()
        .map(|v| Line::from(format!("{v:.precision$}")))
        .collect()
}

/// Render `kind` for every algorithm in `summary`.
pub fn render_chart(
    frame: &mut Frame,
    area: Rect,
    summary: &AggregatedSummary,
    kind: ChartKind,
    trials: usize,
) {
    let theme = ColorTheme::default();
    let lines = series(summary, kind);
    let (x_lo, x_hi) = x_bounds(summary);
    let (y_lo, y_hi) = y_bounds(&lines);

    let datasets: Vec<Dataset> = lines
        .iter()
        .filter(|line| !line.points.is_empty())
        .map(|line| {
            Dataset::default()
                .name(line.label.clone())
                .marker(if line.reference { Marker::Dot } else { Marker::Braille })
                .graph_type(GraphType::Line)
                .style(theme.series_style(line.algorithm_index, line.reference))
                .data(&line.points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(format!(" {} ", kind.title(trials))),
        )
        .x_axis(
            Axis::default()
                .title(kind.x_desc())
                .style(theme.muted_style())
                .bounds([x_lo, x_hi])
                .labels(axis_labels(x_lo, x_hi, 0)),
        )
        .y_axis(
            Axis::default()
                .title(kind.y_desc())
                .style(theme.muted_style())
                .bounds([y_lo, y_hi])
                .labels(axis_labels(y_lo, y_hi, 2)),
        )
        .legend_position(Some(LegendPosition::TopRight));

    frame.render_widget(chart, area);
}
