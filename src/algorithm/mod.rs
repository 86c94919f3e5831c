//! Aggregation engine for monthly dispatch statistics
//!
//! Every statistic is a pure function over a slice of interventions and the
//! configuration values it needs. A record that lacks a field a statistic
//! depends on is skipped by that statistic only. An empty or fully skipped
//! input yields a zero, an empty collection, or `None`.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

pub mod ages;
pub mod distribution;
pub mod extremes;
pub mod responders;
pub mod scene;
pub mod severity;

/// Insertion-ordered map used for every tally
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

pub use ages::{AgeStats, ResponderMean, age_mean_by_responder, compute_age_stats};
pub use distribution::{
    Distribution, ambulance_distribution, distribution, naca_distribution,
    priority_distribution, strip_unit_prefix, top_est_motifs,
};
pub use extremes::{Extremum, fastest_stroke_response, longest_scene};
pub use responders::{
    Colleague, ResponderRatio, RoleShare, TiedLeaders, busiest_responders,
    favorite_colleagues, interventions_by_responder, night_shift_ratio, pair_counts,
    pediatric_leaders, role_share, top_pairs,
};
pub use scene::{SceneTimeStats, compute_scene_times};
pub use severity::{Escalations, escalations, naca_by_responder, naca_extreme_ratio};
