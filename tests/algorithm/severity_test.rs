#[cfg(test)]
mod tests {
    use ems_stats::algorithm::{naca_by_responder, naca_extreme_ratio};

    use crate::utils::with_naca;

    #[test]
    fn test_small_sample_responder_is_excluded() {
        let mut records = Vec::new();
        for code in ["5", "6", "7"] {
            records.push(with_naca("Ana Silva", "", code));
        }
        for code in ["1", "2", "3", "4", "5"] {
            records.push(with_naca("Ben Roy", "", code));
        }

        let by_responder = naca_by_responder(&records, 5);
        assert!(!by_responder.contains_key("Ana Silva"));
        assert_eq!(by_responder["Ben Roy"], vec![1, 2, 3, 4, 5]);

        let ratios = naca_extreme_ratio(&records, &[5, 6, 7], 5);
        assert_eq!(ratios.len(), 1);
        assert_eq!(ratios[0].responder, "Ben Roy");
        assert!((ratios[0].ratio - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let mut records = Vec::new();
        // Carl: 1 high of 5, Ana: 3 high of 5, Ben: 1 high of 5
        for code in ["6", "2", "2", "2", "2"] {
            records.push(with_naca("Carl Dahl", "", code));
        }
        for code in ["5", "5", "7", "1", "2"] {
            records.push(with_naca("Ana Silva", "", code));
        }
        for code in ["0", "0", "6", "3", "3"] {
            records.push(with_naca("Ben Roy", "", code));
        }

        let high = naca_extreme_ratio(&records, &[5, 6, 7], 5);
        let order: Vec<&str> = high.iter().map(|r| r.responder.as_str()).collect();
        assert_eq!(order, vec!["Ana Silva", "Carl Dahl", "Ben Roy"]);

        let low = naca_extreme_ratio(&records, &[0, 1, 9], 5);
        let order: Vec<&str> = low.iter().map(|r| r.responder.as_str()).collect();
        assert_eq!(order, vec!["Ben Roy", "Ana Silva", "Carl Dahl"]);
    }

    #[test]
    fn test_both_crew_members_share_the_code() {
        let records = vec![with_naca("Ana Silva", "Ben Roy", "6"); 5];
        let ratios = naca_extreme_ratio(&records, &[5, 6, 7], 5);
        assert_eq!(ratios.len(), 2);
        assert!(ratios.iter().all(|r| r.total == 5 && r.ratio == 1.0));
    }
}
