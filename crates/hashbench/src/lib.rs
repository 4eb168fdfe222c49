//! hashbench library: application logic behind the `hashbench` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
