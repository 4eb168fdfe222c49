//! # hashbench-tui
//!
//! Interactive terminal viewer: one chart at a time next to the averaged
//! figures, switched from the keyboard.

pub mod chart;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod model;
pub mod styles;
pub mod table;

pub use keymap::KeyAction;
pub use model::ChartViewer;
