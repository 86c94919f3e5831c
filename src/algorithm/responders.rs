//! Per-responder and per-pair rankings
//!
//! Every non-blank responder on a record gets credit for it, so a two-person
//! crew counts once for each member. Totals here answer "how many
//! interventions did this person work", not "how many interventions occurred".

use itertools::Itertools;
use serde::Serialize;

use crate::algorithm::FxIndexMap;
use crate::config::HourWindow;
use crate::models::{Intervention, PairKey};
use crate::utils::ratio;

/// A responder's share of records matching some condition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponderRatio {
    pub responder: String,
    pub hits: usize,
    pub total: usize,
    pub ratio: f64,
}

impl ResponderRatio {
    #[must_use]
    pub fn new(responder: String, hits: usize, total: usize) -> Self {
        Self {
            responder,
            hits,
            total,
            ratio: ratio(hits, total),
        }
    }
}

/// Everyone sharing the highest count
///
/// Empty with a count of 0 when nobody scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TiedLeaders {
    pub responders: Vec<String>,
    pub count: usize,
}

impl TiedLeaders {
    /// Collect the responders at the maximum of a tally, in tally order
    #[must_use]
    pub fn from_tally(tally: &FxIndexMap<String, usize>) -> Self {
        let count = tally.values().copied().max().unwrap_or(0);
        if count == 0 {
            return Self::default();
        }
        let responders = tally
            .iter()
            .filter(|(_, n)| **n == count)
            .map(|(name, _)| name.clone())
            .collect();
        Self { responders, count }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responders.is_empty()
    }
}

/// How often a responder led versus seconded
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoleShare {
    pub leader: usize,
    pub second: usize,
    /// Share of interventions worked as leader
    pub leader_ratio: f64,
}

/// The partner a responder worked with most
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Colleague {
    pub partner: String,
    pub count: usize,
}

/// Interventions worked per responder, in order of first appearance
#[must_use]
pub fn interventions_by_responder(records: &[Intervention]) -> FxIndexMap<String, usize> {
    let mut tally = FxIndexMap::default();
    for responder in records.iter().flat_map(Intervention::responders) {
        *tally.entry(responder).or_insert(0) += 1;
    }
    tally
}

/// Responders tied for the most interventions
#[must_use]
pub fn busiest_responders(records: &[Intervention]) -> TiedLeaders {
    TiedLeaders::from_tally(&interventions_by_responder(records))
}

/// Interventions per crew pair, whatever the role order
#[must_use]
pub fn pair_counts(records: &[Intervention]) -> FxIndexMap<PairKey, usize> {
    let mut tally = FxIndexMap::default();
    for record in records {
        let (Some(leader), Some(second)) = (record.leader_name(), record.second_name()) else {
            continue;
        };
        if let Some(pair) = PairKey::new(&leader, &second) {
            *tally.entry(pair).or_insert(0) += 1;
        }
    }
    tally
}

/// The `limit` most frequent pairs, ties in order of first appearance
#[must_use]
pub fn top_pairs(records: &[Intervention], limit: usize) -> Vec<(PairKey, usize)> {
    pair_counts(records)
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .take(limit)
        .collect()
}

/// Share of each responder's interventions that started at night
///
/// The clock hour is taken from departure, or from arrival on scene when
/// departure is blank. Records with neither are not counted.
#[must_use]
pub fn night_shift_ratio(records: &[Intervention], window: HourWindow) -> Vec<ResponderRatio> {
    let mut tally: FxIndexMap<String, (usize, usize)> = FxIndexMap::default();
    for record in records {
        let Some(time) = record.departure_time().or_else(|| record.on_scene_time()) else {
            continue;
        };
        let is_night = window.contains(time.hour());
        for responder in record.responders() {
            let entry = tally.entry(responder).or_insert((0, 0));
            entry.1 += 1;
            if is_night {
                entry.0 += 1;
            }
        }
    }

    let mut ratios: Vec<ResponderRatio> = tally
        .into_iter()
        .map(|(responder, (night, total))| ResponderRatio::new(responder, night, total))
        .collect();
    ratios.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    ratios
}

/// Responders tied for the most pediatric patients
///
/// A patient is pediatric when their age is readable and below `pediatric_age`.
#[must_use]
pub fn pediatric_leaders(records: &[Intervention], pediatric_age: u32) -> TiedLeaders {
    let mut tally = FxIndexMap::default();
    for record in records {
        if !record.age_years().is_some_and(|age| age < pediatric_age) {
            continue;
        }
        for responder in record.responders() {
            *tally.entry(responder).or_insert(0) += 1;
        }
    }
    TiedLeaders::from_tally(&tally)
}

#[must_use]
pub fn role_share(records: &[Intervention]) -> FxIndexMap<String, RoleShare> {
    let mut shares: FxIndexMap<String, RoleShare> = FxIndexMap::default();
    for record in records {
        if let Some(leader) = record.leader_name() {
            shares.entry(leader).or_default().leader += 1;
        }
        if let Some(second) = record.second_name() {
            shares.entry(second).or_default().second += 1;
        }
    }
    for share in shares.values_mut() {
        share.leader_ratio = ratio(share.leader, share.leader + share.second);
    }
    shares
}

/// Most frequent partner of each responder
///
/// Crews whose members share a short name are skipped, as for pair counts.
/// The first partner to reach the top count wins a tie.
#[must_use]
pub fn favorite_colleagues(records: &[Intervention]) -> FxIndexMap<String, Colleague> {
    let mut partners: FxIndexMap<String, FxIndexMap<String, usize>> = FxIndexMap::default();
    for record in records {
        let (Some(leader), Some(second)) = (record.leader_name(), record.second_name()) else {
            continue;
        };
        if PairKey::new(&leader, &second).is_none() {
            continue;
        }
        *partners
            .entry(leader.clone())
            .or_default()
            .entry(second.clone())
            .or_insert(0) += 1;
        *partners.entry(second).or_default().entry(leader).or_insert(0) += 1;
    }

    partners
        .into_iter()
        .filter_map(|(responder, counts)| {
            let leaders = TiedLeaders::from_tally(&counts);
            let partner = leaders.responders.into_iter().next()?;
            Some((
                responder,
                Colleague {
                    partner,
                    count: leaders.count,
                },
            ))
        })
        .collect()
}
