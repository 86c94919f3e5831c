//! Logging utilities
//!
//! Thin helpers over the `log` facade so that load steps are reported with a
//! consistent format.

pub mod log;

pub use log::{log_load_complete, log_load_start, log_skipped};
