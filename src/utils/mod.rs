//! Shared helpers

pub mod logging;

/// Percentage of `count` in `total`, 0 when `total` is 0
#[must_use]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Ratio of `hits` to `total`, 0 when `total` is 0
#[must_use]
pub fn ratio(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}
