//! Fastest and longest interventions
//!
//! Both queries keep a single winner. A later record only replaces it when it
//! is strictly better, so the first record seen wins a tie.

use serde::Serialize;

use crate::config::StrokeCriteria;
use crate::models::Intervention;

/// The record holding an extreme duration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremum {
    pub hours: f64,
    pub responders: Vec<String>,
    pub date: String,
}

impl Extremum {
    fn from_record(hours: f64, record: &Intervention) -> Self {
        Self {
            hours,
            responders: record.responders().collect(),
            date: record.date.clone(),
        }
    }
}

/// Whether an intervention is a stroke alert
#[must_use]
pub fn is_stroke(record: &Intervention, criteria: &StrokeCriteria) -> bool {
    record.est_motif.trim().starts_with(criteria.motif_prefix.as_str())
        && record.est_degree.trim() == criteria.degree
}

/// Shortest alarm-to-hospital time over stroke interventions
#[must_use]
pub fn fastest_stroke_response(
    records: &[Intervention],
    criteria: &StrokeCriteria,
) -> Option<Extremum> {
    let mut best: Option<Extremum> = None;
    for record in records.iter().filter(|r| is_stroke(r, criteria)) {
        let (Some(alarm), Some(hospital)) = (record.alarm_time(), record.hospital_time()) else {
            continue;
        };
        let hours = alarm.hours_until(hospital);
        if best.as_ref().is_none_or(|b| hours < b.hours) {
            best = Some(Extremum::from_record(hours, record));
        }
    }
    best
}

/// Longest scene time, ignoring durations above `cap_hours`
///
/// Durations beyond the cap are data-entry errors and are dropped from the
/// search rather than clamped.
#[must_use]
pub fn longest_scene(records: &[Intervention], cap_hours: f64) -> Option<Extremum> {
    let mut best: Option<Extremum> = None;
    let mut implausible = 0usize;
    for record in records {
        let Some(hours) = record.scene_hours() else {
            continue;
        };
        if hours > cap_hours {
            implausible += 1;
            continue;
        }
        if best.as_ref().is_none_or(|b| hours > b.hours) {
            best = Some(Extremum::from_record(hours, record));
        }
    }
    if implausible > 0 {
        log::debug!("longest scene: ignored {implausible} durations above {cap_hours}h");
    }
    best
}
