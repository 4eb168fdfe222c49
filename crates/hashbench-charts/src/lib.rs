//! # hashbench-charts
//!
//! The three per-algorithm charts (time, speedup, efficiency against thread
//! count). [`series`] extracts the plotted points and is shared with the
//! terminal viewer; [`render`] draws them to image files with `plotters`.

pub mod render;
pub mod series;

pub use render::{render_charts, ChartError, ChartFormat, ChartOptions};
pub use series::{series, x_bounds, y_bounds, ChartKind, Series};
