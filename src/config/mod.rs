//! Configuration for statistics runs.
//!
//! Category sets and thresholds are passed explicitly into every aggregation
//! call so that calls stay independent of each other.

use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::util::safe_open_file;
use crate::error::{EmsStatsError, Result};
use crate::schema::LayoutMode;

/// Predicate selecting stroke (AVC) interventions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeCriteria {
    /// Prefix of the EST motif code
    pub motif_prefix: String,
    /// Exact EST degree
    pub degree: String,
}

impl Default for StrokeCriteria {
    fn default() -> Self {
        Self {
            motif_prefix: "1105".to_string(),
            degree: "1".to_string(),
        }
    }
}

/// Half-open range of clock hours `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourWindow {
    pub start: u32,
    pub end: u32,
}

impl HourWindow {
    #[must_use]
    pub const fn contains(self, hour: u32) -> bool {
        self.start <= hour && hour < self.end
    }
}

/// Configuration for the aggregation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Priority classes always present in the priority distribution
    pub priority_keys: Vec<String>,
    /// Ambulance numbers always present in the ambulance distribution
    pub ambulance_keys: Vec<String>,
    /// NACA codes always present in the NACA distribution
    pub naca_keys: Vec<String>,
    /// Length of the unit-type prefix stripped from ambulance identifiers
    pub ambulance_prefix_len: usize,
    /// Responders with fewer tallied records are left out of per-responder ratios
    pub min_sample: usize,
    /// NACA codes counted as high severity
    pub naca_high: Vec<u8>,
    /// NACA codes counted as low severity
    pub naca_low: Vec<u8>,
    /// Clock hours counted as night shift
    pub night_window: HourWindow,
    /// Patients strictly younger than this are pediatric
    pub pediatric_age: u32,
    /// Scene durations above this many hours are treated as data-entry errors
    pub scene_plausibility_cap_hours: f64,
    /// Stroke selection used by the fastest-response query
    pub stroke: StrokeCriteria,
    /// Priority class used by the escalation query
    pub escalation_priority: String,
    /// Number of EST motifs kept in the ranking
    pub top_motifs: usize,
    /// Number of pairs kept in the ranking
    pub top_pairs: usize,
    /// How the column layout is resolved from the export
    pub layout_mode: LayoutMode,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            priority_keys: ["P1", "P2", "P3", "S1 feux bleus", "S1 sans feux bleus"]
                .map(String::from)
                .to_vec(),
            ambulance_keys: ["704", "705", "706", "707", "708", "709"]
                .map(String::from)
                .to_vec(),
            naca_keys: ["0", "1", "2", "3", "4", "5", "6", "7", "9"]
                .map(String::from)
                .to_vec(),
            ambulance_prefix_len: 2,
            min_sample: 5,
            naca_high: vec![5, 6, 7],
            naca_low: vec![0, 1, 9],
            night_window: HourWindow { start: 2, end: 6 },
            pediatric_age: 16,
            scene_plausibility_cap_hours: 10.0,
            stroke: StrokeCriteria::default(),
            escalation_priority: "P3".to_string(),
            top_motifs: 5,
            top_pairs: 5,
            layout_mode: LayoutMode::default(),
        }
    }
}

impl StatsConfig {
    /// Load a configuration from a JSON file, filling unspecified keys with defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = safe_open_file(path, "statistics configuration")?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| EmsStatsError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that thresholds are usable
    pub fn validate(&self) -> Result<()> {
        if self.min_sample == 0 {
            return Err(EmsStatsError::Config(
                "min_sample must be at least 1".to_string(),
            ));
        }
        let window = self.night_window;
        if window.start >= window.end || window.end > 24 {
            return Err(EmsStatsError::Config(format!(
                "night_window [{}, {}) is not a valid hour range",
                window.start, window.end
            )));
        }
        let cap = self.scene_plausibility_cap_hours;
        if !cap.is_finite() || cap <= 0.0 {
            return Err(EmsStatsError::Config(
                "scene_plausibility_cap_hours must be positive".to_string(),
            ));
        }
        if let Some(code) = self
            .naca_high
            .iter()
            .chain(&self.naca_low)
            .find(|code| **code > 9)
        {
            return Err(EmsStatsError::Config(format!(
                "NACA code {code} is outside 0-9"
            )));
        }
        Ok(())
    }
}
