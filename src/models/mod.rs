//! Domain models for dispatch statistics
//!
//! An [`Intervention`] is one row of the monthly export with its fields kept as
//! trimmed text. Typed values such as clock-times, NACA codes and ages are
//! parsed on access so each statistic can decide for itself which records
//! are usable.

pub mod clock;
pub mod intervention;
pub mod responder;

pub use clock::{ClockTime, format_hours_hhmm};
pub use intervention::Intervention;
pub use responder::{PairKey, normalize_name, short_name};
