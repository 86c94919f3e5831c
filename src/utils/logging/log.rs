//! Load and skip reporting

use std::path::Path;
use std::time::Duration;

/// Announce that an export is about to be read
pub fn log_load_start(path: &Path) {
    log::info!("Reading dispatch export {}", path.display());
}

/// Report the number of interventions read from an export and how long it took
pub fn log_load_complete(path: &Path, records: usize, elapsed: Duration) {
    log::info!("{records} interventions read from {} in {elapsed:.2?}", path.display());
}

/// Report how many records a statistic left out
///
/// # Arguments
/// * `statistic` - Name of the statistic
/// * `skipped` - Records excluded because a required field was unusable
/// * `total` - Records offered to the statistic
pub fn log_skipped(statistic: &str, skipped: usize, total: usize) {
    if skipped > 0 {
        log::debug!("{statistic}: skipped {skipped} of {total} records");
    }
}
