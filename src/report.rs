//! Monthly report assembly
//!
//! Runs every statistic over the same record slice and bundles the results
//! for the chart and document tooling downstream.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::algorithm::{
    self, AgeStats, Colleague, Distribution, Escalations, Extremum, FxIndexMap,
    ResponderMean, ResponderRatio, RoleShare, SceneTimeStats, TiedLeaders,
};
use crate::config::StatsConfig;
use crate::error::{EmsStatsError, Result};
use crate::models::{Intervention, PairKey, format_hours_hhmm};

/// Every statistic for one monthly export
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    pub record_count: usize,
    pub scene_times: SceneTimeStats,
    pub priorities: Distribution,
    pub ambulances: Distribution,
    pub nacas: Distribution,
    pub top_motifs: Vec<(String, usize)>,
    pub interventions_by_responder: FxIndexMap<String, usize>,
    pub busiest: TiedLeaders,
    pub role_share: FxIndexMap<String, RoleShare>,
    pub top_pairs: Vec<(PairKey, usize)>,
    pub favorite_colleagues: FxIndexMap<String, Colleague>,
    pub naca_high_ratio: Vec<ResponderRatio>,
    pub naca_low_ratio: Vec<ResponderRatio>,
    pub night_shift: Vec<ResponderRatio>,
    pub escalations: Escalations,
    pub fastest_stroke: Option<Extremum>,
    pub longest_scene: Option<Extremum>,
    pub pediatric: TiedLeaders,
    pub ages: AgeStats,
    pub age_by_responder: FxIndexMap<String, ResponderMean>,
}

impl MonthlyReport {
    /// Compute every statistic over `records`
    #[must_use]
    pub fn build(records: &[Intervention], config: &StatsConfig) -> Self {
        log::info!("Computing statistics over {} interventions", records.len());
        Self {
            record_count: records.len(),
            scene_times: algorithm::compute_scene_times(records),
            priorities: algorithm::priority_distribution(records, config),
            ambulances: algorithm::ambulance_distribution(records, config),
            nacas: algorithm::naca_distribution(records, config),
            top_motifs: algorithm::top_est_motifs(records, config.top_motifs),
            interventions_by_responder: algorithm::interventions_by_responder(records),
            busiest: algorithm::busiest_responders(records),
            role_share: algorithm::role_share(records),
            top_pairs: algorithm::top_pairs(records, config.top_pairs),
            favorite_colleagues: algorithm::favorite_colleagues(records),
            naca_high_ratio: algorithm::naca_extreme_ratio(
                records,
                &config.naca_high,
                config.min_sample,
            ),
            naca_low_ratio: algorithm::naca_extreme_ratio(
                records,
                &config.naca_low,
                config.min_sample,
            ),
            night_shift: algorithm::night_shift_ratio(records, config.night_window),
            escalations: algorithm::escalations(
                records,
                &config.escalation_priority,
                &config.naca_high,
            ),
            fastest_stroke: algorithm::fastest_stroke_response(records, &config.stroke),
            longest_scene: algorithm::longest_scene(records, config.scene_plausibility_cap_hours),
            pediatric: algorithm::pediatric_leaders(records, config.pediatric_age),
            ages: algorithm::compute_age_stats(records),
            age_by_responder: algorithm::age_mean_by_responder(records, config.min_sample),
        }
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as JSON to `path`
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| {
            EmsStatsError::io_with_source(path, "failed to create report file", e)
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|e| {
            EmsStatsError::io_with_source(path, "failed to write report file", e)
        })?;
        log::info!("Wrote report to {}", path.display());
        Ok(())
    }

    /// Plain-text summary of the month
    #[must_use]
    pub fn render_summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Rapport qualité - interventions ambulance\n");
        summary.push_str(&format!("  Interventions : {}\n", self.record_count));

        summary.push_str("\nTemps sur site :\n");
        summary.push_str(&format!(
            "  Interventions mesurées : {}\n",
            self.scene_times.count
        ));
        summary.push_str(&format!(
            "  Temps total : {}\n",
            format_hours_hhmm(self.scene_times.total_hours)
        ));
        summary.push_str(&format!(
            "  Temps moyen : {}\n",
            format_hours_hhmm(self.scene_times.mean_hours)
        ));
        match &self.longest_scene {
            Some(longest) => summary.push_str(&format!(
                "  Plus long : {} le {} ({})\n",
                format_hours_hhmm(longest.hours),
                longest.date,
                longest.responders.join(", ")
            )),
            None => summary.push_str("  Plus long : aucune donnée\n"),
        }

        push_distribution(&mut summary, "Priorités", &self.priorities);
        push_distribution(&mut summary, "Ambulances", &self.ambulances);
        push_distribution(&mut summary, "NACA", &self.nacas);

        summary.push_str("\nMotifs EST les plus courants :\n");
        if self.top_motifs.is_empty() {
            summary.push_str("  aucune donnée\n");
        }
        for (motif, count) in &self.top_motifs {
            summary.push_str(&format!("  {motif} : {count}\n"));
        }

        summary.push_str("\nIntervenants :\n");
        if self.busiest.is_empty() {
            summary.push_str("  Le plus d'interventions : aucune donnée\n");
        } else {
            summary.push_str(&format!(
                "  Le plus d'interventions : {} ({})\n",
                self.busiest.responders.join(", "),
                self.busiest.count
            ));
        }
        if let Some((pair, count)) = self.top_pairs.first() {
            summary.push_str(&format!("  Binôme le plus fréquent : {pair} ({count})\n"));
        }
        if let Some(top) = self.naca_high_ratio.first() {
            summary.push_str(&format!(
                "  Plus de NACA hauts : {} ({:.2}%)\n",
                top.responder,
                top.ratio * 100.0
            ));
        }
        if let Some(top) = self.naca_low_ratio.first() {
            summary.push_str(&format!(
                "  Plus de NACA bas : {} ({:.2}%)\n",
                top.responder,
                top.ratio * 100.0
            ));
        }
        if let Some(top) = self.night_shift.first() {
            summary.push_str(&format!(
                "  Plus d'interventions de nuit : {} ({:.2}%)\n",
                top.responder,
                top.ratio * 100.0
            ));
        }
        if self.pediatric.is_empty() {
            summary.push_str("  Le plus de patients pédiatriques : aucune donnée\n");
        } else {
            summary.push_str(&format!(
                "  Le plus de patients pédiatriques : {} ({})\n",
                self.pediatric.responders.join(", "),
                self.pediatric.count
            ));
        }

        summary.push_str(&format!(
            "\nP3 finissant en NACA haut : {} sur {} ({:.2}%)\n",
            self.escalations.escalated,
            self.escalations.total,
            self.escalations.ratio * 100.0
        ));

        match &self.fastest_stroke {
            Some(fastest) => summary.push_str(&format!(
                "AVC le plus rapide : {} le {} ({})\n",
                format_hours_hhmm(fastest.hours),
                fastest.date,
                fastest.responders.join(", ")
            )),
            None => summary.push_str("AVC le plus rapide : aucune donnée\n"),
        }

        summary.push_str("\nÂge des patients :\n");
        if self.ages.count == 0 {
            summary.push_str("  aucune donnée\n");
        } else {
            summary.push_str(&format!(
                "  {} patients, moyenne {:.1}, médiane {:.1}, min {}, max {}\n",
                self.ages.count, self.ages.mean, self.ages.median, self.ages.min, self.ages.max
            ));
        }

        summary
    }
}

fn push_distribution(summary: &mut String, title: &str, dist: &Distribution) {
    summary.push_str(&format!("\n{title} ({} interventions) :\n", dist.total()));
    for (key, count, pct) in dist.with_percentages() {
        summary.push_str(&format!("  {key} : {count} ({pct:.2}%)\n"));
    }
}
