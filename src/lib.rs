//! Monthly quality statistics over ambulance dispatch exports.
//!
//! The export is loaded once into a `Vec<Intervention>`, then every statistic
//! in [`algorithm`] borrows that slice. [`MonthlyReport`] runs them all.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
pub use config::StatsConfig;
pub use error::{EmsStatsError, Result, SchemaError};
pub use loader::{load_interventions, read_interventions};
pub use models::Intervention;
pub use report::MonthlyReport;
pub use schema::{ColumnLayout, Field, LayoutMode};
