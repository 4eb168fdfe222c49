//! Averages panel shown beside the chart.

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use hashbench_charts::ChartKind;
use hashbench_core::aggregator::{AggregatedSummary, LevelStats};

use crate::styles::ColorTheme;

/// Cell text for `stats` on the `kind` chart; `n/a` when there is no sample
/// and `inf` for ratios over a zero parallel time.
#[must_use]
pub fn cell_value(stats: &LevelStats, kind: ChartKind) -> String {
    if !stats.has_data() {
        return "n/a".to_string();
    }
    match kind {
        ChartKind::Time => format!("{:.4}s", stats.mean_parallel),
        _ if !stats.has_speedup() => "inf".to_string(),
        ChartKind::Speedup => format!("{:.2}", stats.speedup),
        ChartKind::Efficiency => format!("{:.2}", stats.efficiency),
    }
}

/// Render one row per algorithm and thread count for the selected chart.
pub fn render_table(frame: &mut Frame, area: Rect, summary: &AggregatedSummary, kind: ChartKind) {
    let theme = ColorTheme::default();
    let mut rows = Vec::new();
    for (index, algo) in summary.algorithms.iter().enumerate() {
        rows.push(
            Row::new(vec![
                Cell::from(algo.algorithm.to_string()),
                Cell::from("seq"),
                Cell::from(format!("{:.4}s", algo.mean_sequential)),
            ])
            .style(theme.series_style(index, false)),
        );
        for stats in &algo.levels {
            rows.push(
                Row::new(vec![
                    Cell::from(""),
                    Cell::from(format!("{}t", stats.level)),
                    Cell::from(cell_value(stats, kind)),
                ])
                .style(if stats.has_data() {
                    theme.text_style()
                } else {
                    theme.muted_style()
                }),
            );
        }
    }

    let table = Table::new(
        rows,
        [
            Constraint::Min(8),
            Constraint::Length(5),
            Constraint::Length(10),
        ],
    )
    .header(Row::new(vec!["Algorithm", "Run", kind.y_desc()]).style(theme.header_style()))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(" Averages "),
    );

    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbench_core::types::ConcurrencyLevel;

    fn stats(samples: usize) -> LevelStats {
        LevelStats {
            level: ConcurrencyLevel::new(8).unwrap(),
            mean_parallel: 0.25,
            speedup: 3.5,
            efficiency: 0.4375,
            samples,
        }
    }

    #[test]
    fn values_follow_chart_kind() {
        assert_eq!(cell_value(&stats(2), ChartKind::Time), "0.2500s");
        assert_eq!(cell_value(&stats(2), ChartKind::Speedup), "3.50");
        assert_eq!(cell_value(&stats(2), ChartKind::Efficiency), "0.44");
    }

    #[test]
    fn zero_parallel_time_shows_unbounded_ratios() {
        let mut zero = stats(1);
        zero.mean_parallel = 0.0;
        zero.speedup = 0.0;
        zero.efficiency = 0.0;
        assert_eq!(cell_value(&zero, ChartKind::Time), "0.0000s");
        assert_eq!(cell_value(&zero, ChartKind::Speedup), "inf");
        assert_eq!(cell_value(&zero, ChartKind::Efficiency), "inf");
    }

    #[test]
    fn missing_level_is_not_available() {
        let empty = LevelStats::no_data(ConcurrencyLevel::new(8).unwrap());
        assert_eq!(cell_value(&empty, ChartKind::Speedup), "n/a");
    }
}
