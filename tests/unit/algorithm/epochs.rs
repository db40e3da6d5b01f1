//! Tests for the epoch log doubling schedule and replay order

#[cfg(test)]
mod tests {
    use lozenge_cftp::algorithm::epochs::EpochLog;

    // Tests a new log holds one single-step epoch
    // Verified by starting with two steps
    #[test]
    fn test_new_log() {
        let log = EpochLog::new("origin");
        assert_eq!(log.len(), 1);
        assert!(!log.is_empty());
        assert_eq!(log.total_steps(), 1);
    }

    // Tests epoch lengths double and land at the front
    // Verified by appending instead of prepending
    #[test]
    fn test_extend_past_doubles() {
        let mut log = EpochLog::new(0);
        for snapshot in 1..=4 {
            log.extend_past(snapshot);
        }

        let order: Vec<(i32, u64)> = log.iter().map(|e| (e.snapshot, e.steps)).collect();
        assert_eq!(order, vec![(4, 16), (3, 8), (2, 4), (1, 2), (0, 1)]);
        assert_eq!(log.total_steps(), 31);
    }

    // Tests total window is one less than a power of two
    // Verified by doubling the total instead of the epoch count
    #[test]
    fn test_window_sizes() {
        let mut log = EpochLog::new(());
        for n in 1..20u32 {
            assert_eq!(log.total_steps(), (1u64 << n) - 1);
            log.extend_past(());
        }
    }

    // Tests very long logs saturate instead of overflowing
    // Verified by using unchecked shifts
    #[test]
    fn test_saturating_growth() {
        let mut log = EpochLog::new(());
        for _ in 0..70 {
            log.extend_past(());
        }
        assert_eq!(log.total_steps(), u64::MAX);
        assert_eq!(log.iter().next().map(|e| e.steps), Some(u64::MAX));
    }
}
