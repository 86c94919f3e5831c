#[cfg(test)]
mod tests {
    use ems_stats::algorithm::longest_scene;

    use crate::utils::with_scene;

    #[test]
    fn test_implausible_duration_is_ignored() {
        let records = [
            with_scene("Ana Silva", "10:00", "11:30", "11:45"),
            with_scene("Ben Roy", "08:00", "19:00", "19:30"),
            with_scene("Carl Dahl", "10:00", "10:20", "10:40"),
        ];
        let longest = longest_scene(&records, 10.0).unwrap();
        assert_eq!(longest.responders, vec!["Ana Silva"]);
        assert!((longest.hours - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_only_implausible_durations_gives_none() {
        let records = [with_scene("Ben Roy", "08:00", "19:00", "19:30")];
        assert!(longest_scene(&records, 10.0).is_none());
    }

    #[test]
    fn test_first_seen_wins_tie() {
        let records = [
            with_scene("Ana Silva", "10:00", "11:00", "11:10"),
            with_scene("Ben Roy", "12:00", "13:00", "13:10"),
        ];
        let longest = longest_scene(&records, 10.0).unwrap();
        assert_eq!(longest.responders, vec!["Ana Silva"]);
    }

    #[test]
    fn test_rollover_counts_towards_longest() {
        let records = [
            with_scene("Ana Silva", "10:00", "11:00", "11:10"),
            with_scene("Ben Roy", "22:30", "00:15", "00:40"),
        ];
        let longest = longest_scene(&records, 10.0).unwrap();
        assert_eq!(longest.responders, vec!["Ben Roy"]);
        assert!((longest.hours - 1.75).abs() < 1e-9);
    }
}
