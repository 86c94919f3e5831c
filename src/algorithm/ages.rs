//! Patient age statistics

use serde::Serialize;

use crate::algorithm::FxIndexMap;
use crate::models::Intervention;
use crate::utils::logging::log_skipped;

/// Descriptive statistics over patient ages
///
/// All values are 0 when no age was usable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AgeStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: u32,
    pub max: u32,
}

impl AgeStats {
    /// Compute statistics over a set of ages
    #[must_use]
    pub fn from_ages(ages: &[u32]) -> Self {
        if ages.is_empty() {
            return Self::default();
        }
        let mut sorted = ages.to_vec();
        sorted.sort_unstable();

        let count = sorted.len();
        let mean = sorted.iter().map(|age| f64::from(*age)).sum::<f64>() / count as f64;
        let mid = count / 2;
        let median = if count.is_multiple_of(2) {
            (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
        } else {
            f64::from(sorted[mid])
        };

        Self {
            count,
            mean,
            median,
            min: sorted[0],
            max: sorted[count - 1],
        }
    }
}

/// Mean patient age for one responder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponderMean {
    pub mean: f64,
    pub count: usize,
}

/// Age of the patient when it is readable and backed by a birth date
fn usable_age(record: &Intervention) -> Option<u32> {
    if record.has_birth_date() {
        record.age_years()
    } else {
        None
    }
}

#[must_use]
pub fn compute_age_stats(records: &[Intervention]) -> AgeStats {
    let ages: Vec<u32> = records.iter().filter_map(usable_age).collect();
    log_skipped("patient ages", records.len() - ages.len(), records.len());
    AgeStats::from_ages(&ages)
}

/// Mean patient age per responder, for responders with at least `min_sample` ages
#[must_use]
pub fn age_mean_by_responder(
    records: &[Intervention],
    min_sample: usize,
) -> FxIndexMap<String, ResponderMean> {
    let mut ages: FxIndexMap<String, Vec<u32>> = FxIndexMap::default();
    for record in records {
        let Some(age) = usable_age(record) else {
            continue;
        };
        for responder in record.responders() {
            ages.entry(responder).or_default().push(age);
        }
    }

    ages.into_iter()
        .filter(|(_, ages)| ages.len() >= min_sample)
        .map(|(responder, ages)| {
            let stats = AgeStats::from_ages(&ages);
            (
                responder,
                ResponderMean {
                    mean: stats.mean,
                    count: stats.count,
                },
            )
        })
        .collect()
}
