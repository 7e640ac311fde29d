//! Per-step timing.

/// Wall-clock timings for one [`PcgEnv::step`](crate::PcgEnv::step).
///
/// Durations are in microseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// The whole step, from action mapping to observation.
    pub total_us: u64,
    /// Statistic recomputation; zero when the edit changed nothing.
    pub stats_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.stats_us, 0);
    }
}
