//! Library half of the `fieldesc` command: the check pipeline, configuration,
//! logging and report rendering.

pub mod check;
pub mod config;
pub mod logging;
pub mod report;
pub mod summary;
pub mod types;
