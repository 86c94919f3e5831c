#[cfg(test)]
mod tests {
    use ems_stats::{LayoutMode, MonthlyReport, StatsConfig, read_interventions};

    use crate::utils::sample_month;

    fn sample_report() -> MonthlyReport {
        let records = read_interventions(sample_month().as_bytes(), LayoutMode::ByName).unwrap();
        MonthlyReport::build(&records, &StatsConfig::default())
    }

    #[test]
    fn test_report_over_sample_month() {
        let report = sample_report();
        assert_eq!(report.record_count, 4);

        // 30 min, 20 min across midnight, and an 11 hour outlier
        assert_eq!(report.scene_times.count, 3);
        assert!((report.scene_times.total_hours - (0.5 + 1.0 / 3.0 + 11.0)).abs() < 1e-9);

        let longest = report.longest_scene.as_ref().unwrap();
        assert!((longest.hours - 0.5).abs() < 1e-9);
        assert_eq!(longest.date, "01/01/2026");

        assert_eq!(report.priorities.total(), 4);
        assert_eq!(report.priorities.get("S2"), 1);
        assert_eq!(report.ambulances.get("799"), 1);
        assert_eq!(report.ambulances.get("708"), 0);
        assert_eq!(report.nacas.total(), 4);

        let stroke = report.fastest_stroke.as_ref().unwrap();
        assert!((stroke.hours - 55.0 / 60.0).abs() < 1e-9);
        assert_eq!(stroke.responders, vec!["Jean Dupont", "Marie Curie"]);

        assert_eq!(report.busiest.responders, vec!["Marie Curie"]);
        assert_eq!(report.busiest.count, 3);
        assert_eq!(report.top_pairs[0].0.to_string(), "Jean D. & Marie C.");
        assert_eq!(report.top_pairs[0].1, 2);

        assert_eq!(report.pediatric.responders, vec!["Marie Curie", "Jean Dupont"]);
        assert_eq!(report.escalations.escalated, 1);
        assert_eq!(report.escalations.total, 1);

        assert_eq!(report.ages.count, 3);
        assert_eq!(report.ages.median, 30.0);
        assert_eq!(report.night_shift[0].responder, "Paul Martin");

        // Nobody reaches the default sample size in this small month
        assert!(report.naca_high_ratio.is_empty());
        assert!(report.age_by_responder.is_empty());
    }

    #[test]
    fn test_summary_mentions_key_figures() {
        let summary = sample_report().render_summary();
        assert!(summary.contains("Interventions : 4"));
        assert!(summary.contains("Plus long : 00:30 le 01/01/2026"));
        assert!(summary.contains("P1 : 1 (25.00%)"));
        assert!(summary.contains("Binôme le plus fréquent : Jean D. & Marie C. (2)"));
        assert!(summary.contains("AVC le plus rapide : 00:55"));
    }

    #[test]
    fn test_empty_month_renders_without_panicking() {
        let report = MonthlyReport::build(&[], &StatsConfig::default());
        assert!(report.fastest_stroke.is_none());
        assert!(report.pediatric.is_empty());

        let summary = report.render_summary();
        assert!(summary.contains("P1 : 0 (0.00%)"));
        assert!(summary.contains("AVC le plus rapide : aucune donnée"));
    }

    #[test]
    fn test_json_export_uses_readable_pair_keys() {
        let json: serde_json::Value =
            serde_json::from_str(&sample_report().to_json().unwrap()).unwrap();
        assert_eq!(json["record_count"], 4);
        assert_eq!(json["nacas"]["counts"]["4"], 1);
        assert_eq!(json["top_pairs"][0][0], "Jean D. & Marie C.");
        assert_eq!(json["busiest"]["count"], 3);
    }

    #[test]
    fn test_write_json_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rapport.json");
        sample_report().write_json(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"record_count\": 4"));
    }
}
