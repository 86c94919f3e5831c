//! Categorical distributions
//!
//! Priority, ambulance and NACA counts share one reducer: canonical keys are
//! seeded at zero so empty categories still show, and any other observed value
//! is appended after them in order of first appearance.

use itertools::Itertools;
use serde::Serialize;

use crate::algorithm::FxIndexMap;
use crate::config::StatsConfig;
use crate::models::Intervention;
use crate::utils::percentage;

/// Ordered category counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Distribution {
    counts: FxIndexMap<String, usize>,
    total: usize,
}

impl Distribution {
    /// Start a distribution with every canonical key at zero
    #[must_use]
    pub fn seeded<S: AsRef<str>>(keys: &[S]) -> Self {
        let mut counts = FxIndexMap::default();
        for key in keys {
            counts.insert(key.as_ref().to_string(), 0);
        }
        Self { counts, total: 0 }
    }

    /// Count one occurrence of `key`, returning whether the key is new
    pub fn add(&mut self, key: &str) -> bool {
        self.total += 1;
        match self.counts.get_mut(key) {
            Some(count) => {
                *count += 1;
                false
            }
            None => {
                self.counts.insert(key.to_string(), 1);
                true
            }
        }
    }

    #[must_use]
    pub const fn counts(&self) -> &FxIndexMap<String, usize> {
        &self.counts
    }

    /// Count for a key, 0 when the key was never seen
    #[must_use]
    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Share of `key` in percent, 0 for an empty distribution
    #[must_use]
    pub fn percentage(&self, key: &str) -> f64 {
        percentage(self.get(key), self.total)
    }

    /// Key, count and percentage in key order
    pub fn with_percentages(&self) -> impl Iterator<Item = (&str, usize, f64)> + '_ {
        self.counts
            .iter()
            .map(move |(key, count)| (key.as_str(), *count, percentage(*count, self.total)))
    }

    /// Keys by descending count, ties in key order
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        self.counts
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .collect()
    }
}

/// Count the values picked by `selector`, skipping blank ones
pub fn distribution<F, S>(records: &[Intervention], selector: F, canonical_keys: &[S]) -> Distribution
where
    F: Fn(&Intervention) -> String,
    S: AsRef<str>,
{
    let mut dist = Distribution::seeded(canonical_keys);
    for record in records {
        let value = selector(record);
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if dist.add(value) && !canonical_keys.is_empty() {
            log::warn!("Category '{value}' is outside the canonical set, added");
        }
    }
    dist
}

/// Drop the first `len` characters of an identifier
///
/// Identifiers no longer than the prefix become blank.
#[must_use]
pub fn strip_unit_prefix(raw: &str, len: usize) -> &str {
    let raw = raw.trim();
    raw.char_indices().nth(len).map_or("", |(offset, _)| &raw[offset..])
}

#[must_use]
pub fn priority_distribution(records: &[Intervention], config: &StatsConfig) -> Distribution {
    distribution(records, |r| r.priority.clone(), &config.priority_keys)
}

/// Interventions per ambulance, keyed on the unit number without its type prefix
#[must_use]
pub fn ambulance_distribution(records: &[Intervention], config: &StatsConfig) -> Distribution {
    let prefix_len = config.ambulance_prefix_len;
    distribution(
        records,
        |r| strip_unit_prefix(&r.ambulance, prefix_len).to_string(),
        &config.ambulance_keys,
    )
}

#[must_use]
pub fn naca_distribution(records: &[Intervention], config: &StatsConfig) -> Distribution {
    distribution(records, |r| r.naca.clone(), &config.naca_keys)
}

/// Most frequent EST motif codes
#[must_use]
pub fn top_est_motifs(records: &[Intervention], limit: usize) -> Vec<(String, usize)> {
    let no_keys: [&str; 0] = [];
    distribution(records, |r| r.est_motif.clone(), &no_keys)
        .ranked()
        .into_iter()
        .take(limit)
        .map(|(key, count)| (key.to_string(), count))
        .collect()
}
