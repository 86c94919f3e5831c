//! Time spent on scene

use serde::Serialize;

use crate::models::Intervention;
use crate::utils::logging::log_skipped;

/// Aggregate time between arrival on scene and hospital arrival
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SceneTimeStats {
    /// Sum of all scene durations, in hours
    pub total_hours: f64,
    /// Number of interventions measured
    pub count: usize,
    /// Mean duration in hours, 0 when nothing was measured
    pub mean_hours: f64,
}

/// Compute scene-time statistics over transported patients
///
/// A record counts only when the patient was dropped off at a hospital and
/// both the on-scene and hospital-arrival times are readable.
#[must_use]
pub fn compute_scene_times(records: &[Intervention]) -> SceneTimeStats {
    let durations: Vec<f64> = records.iter().filter_map(Intervention::scene_hours).collect();
    log_skipped("scene times", records.len() - durations.len(), records.len());

    let total_hours: f64 = durations.iter().sum();
    let count = durations.len();
    let mean_hours = if count == 0 {
        0.0
    } else {
        total_hours / count as f64
    };

    SceneTimeStats {
        total_hours,
        count,
        mean_hours,
    }
}
