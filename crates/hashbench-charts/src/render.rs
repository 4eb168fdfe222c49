//! Chart files drawn with `plotters`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use plotters::coord::Shift;
use plotters::prelude::*;

use hashbench_core::aggregator::AggregatedSummary;

use crate::series::{series, x_bounds, y_bounds, ChartKind, Series};

const CHART_SIZE: (u32, u32) = (1000, 600);
/// Dashes per reference line; each is followed by a gap of equal length.
const DASH_COUNT: usize = 30;

/// Errors raised while writing chart files.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("cannot prepare chart directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to draw {path}: {message}")]
    Render { path: PathBuf, message: String },
}

/// Image format of the chart files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartFormat {
    #[default]
    Png,
    Svg,
}

impl ChartFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for ChartFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ChartFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ChartFormat::Png),
            "svg" => Ok(ChartFormat::Svg),
            other => Err(format!("unknown chart format '{other}' (expected png or svg)")),
        }
    }
}

/// Where and how charts are written.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub output_dir: PathBuf,
    pub format: ChartFormat,
    /// Number of trials averaged; shown in the captions.
    pub trials: usize,
}

impl ChartOptions {
    /// Path of the file for `kind`.
    #[must_use]
    pub fn path_for(&self, kind: ChartKind) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", kind.file_stem(), self.format.extension()))
    }
}

/// Render the time, speedup and efficiency charts; returns the written paths.
pub fn render_charts(
    summary: &AggregatedSummary,
    options: &ChartOptions,
) -> Result<Vec<PathBuf>, ChartError> {
    std::fs::create_dir_all(&options.output_dir).map_err(|source| ChartError::OutputDir {
        path: options.output_dir.clone(),
        source,
    })?;

    let mut written = Vec::with_capacity(ChartKind::ALL.len());
    for kind in ChartKind::ALL {
        let path = options.path_for(kind);
        render_one(summary, kind, options, &path)?;
        tracing::info!(chart = kind.file_stem(), path = %path.display(), "chart written");
        written.push(path);
    }
    Ok(written)
}

fn render_one(
    summary: &AggregatedSummary,
    kind: ChartKind,
    options: &ChartOptions,
    path: &Path,
) -> Result<(), ChartError> {
    let lines = series(summary, kind);
    let title = kind.title(options.trials);
    let result = match options.format {
        ChartFormat::Png => {
            let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
            draw(&root, summary, kind, &title, &lines)
        }
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
            draw(&root, summary, kind, &title, &lines)
        }
    };
    result.map_err(|message| ChartError::Render {
        path: path.to_path_buf(),
        message,
    })
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    summary: &AggregatedSummary,
    kind: ChartKind,
    title: &str,
    lines: &[Series],
) -> Result<(), String> {
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let (x_lo, x_hi) = x_bounds(summary);
    let (y_lo, y_hi) = y_bounds(lines);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc(kind.x_desc())
        .y_desc(kind.y_desc())
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| format!("{y:.2}"))
        .draw()
        .map_err(|e| e.to_string())?;

    for line in lines.iter().filter(|l| !l.points.is_empty()) {
        let color = Palette99::pick(line.algorithm_index).mix(if line.reference { 0.6 } else { 1.0 });
        let width = if line.reference { 1 } else { 2 };

        if line.reference {
            chart
                .draw_series(
                    dashes(&line.points, DASH_COUNT)
                        .into_iter()
                        .map(|segment| PathElement::new(segment, color.stroke_width(width))),
                )
                .map_err(|e| e.to_string())?
                .label(line.label.clone())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 8, y)], color.stroke_width(width))
                });
        } else {
            chart
                .draw_series(LineSeries::new(line.points.clone(), color.stroke_width(width)))
                .map_err(|e| e.to_string())?
                .label(line.label.clone())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(width))
                });

            chart
                .draw_series(
                    line.points
                        .iter()
                        .map(|&point| Circle::new(point, 4, color.filled())),
                )
                .map_err(|e| e.to_string())?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}

/// Split a polyline's first segment into `count` dashes with equal gaps.
fn dashes(points: &[(f64, f64)], count: usize) -> Vec<Vec<(f64, f64)>> {
    let (Some(&(x0, y0)), Some(&(x1, y1))) = (points.first(), points.last()) else {
        return Vec::new();
    };
    #[allow(clippy::cast_precision_loss)]
    let step = 1.0 / (count * 2) as f64;
    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let start = (i * 2) as f64 * step;
            let end = start + step;
            vec![
                (x0 + (x1 - x0) * start, y0 + (y1 - y0) * start),
                (x0 + (x1 - x0) * end, y0 + (y1 - y0) * end),
            ]
        })
        .collect()
}
