//! NACA severity by responder

use serde::Serialize;

use crate::algorithm::FxIndexMap;
use crate::algorithm::responders::ResponderRatio;
use crate::models::Intervention;
use crate::utils::ratio;

/// NACA codes each responder took part in, in record order
///
/// Responders with fewer than `min_sample` codes are dropped so that ratios
/// are never computed over a handful of interventions.
#[must_use]
pub fn naca_by_responder(records: &[Intervention], min_sample: usize) -> FxIndexMap<String, Vec<u8>> {
    let mut by_responder: FxIndexMap<String, Vec<u8>> = FxIndexMap::default();
    for record in records {
        let Some(code) = record.naca_code() else {
            continue;
        };
        for responder in record.responders() {
            by_responder.entry(responder).or_default().push(code);
        }
    }
    by_responder.retain(|_, codes| codes.len() >= min_sample);
    by_responder
}

/// Share of each responder's NACA codes that fall in `target`
///
/// Sorted by descending ratio. Equal ratios keep first-appearance order.
#[must_use]
pub fn naca_extreme_ratio(
    records: &[Intervention],
    target: &[u8],
    min_sample: usize,
) -> Vec<ResponderRatio> {
    let mut ratios: Vec<ResponderRatio> = naca_by_responder(records, min_sample)
        .into_iter()
        .map(|(responder, codes)| {
            let hits = codes.iter().filter(|code| target.contains(code)).count();
            ResponderRatio::new(responder, hits, codes.len())
        })
        .collect();
    ratios.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    ratios
}

/// Low-priority interventions that turned out severe
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Escalations {
    /// Interventions of the priority with a readable NACA code
    pub total: usize,
    /// Of those, how many had a high NACA code
    pub escalated: usize,
    pub ratio: f64,
}

/// Count interventions of `priority` whose NACA code is in `high`
#[must_use]
pub fn escalations(records: &[Intervention], priority: &str, high: &[u8]) -> Escalations {
    let codes: Vec<u8> = records
        .iter()
        .filter(|r| r.priority.trim() == priority)
        .filter_map(Intervention::naca_code)
        .collect();
    let escalated = codes.iter().filter(|code| high.contains(code)).count();

    Escalations {
        total: codes.len(),
        escalated,
        ratio: ratio(escalated, codes.len()),
    }
}
