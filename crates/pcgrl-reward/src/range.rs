//! Range-shaping reward primitives.
//!
//! Both helpers score a statistic's move from `old` to `new` relative to
//! a target window `[low, high]`. Bounds may be infinite: a window of
//! `[inf, inf]` turns them into "reward growth, penalize standing still".

/// Shaped reward for moving a value toward `[low, high]`.
///
/// - Both inside: `0`.
/// - Both below: `new - old`, or `-1` if the value did not move.
/// - Both above: `old - new`, or `-1` if the value did not move.
/// - Jumped across the window: the sum of the two signed distances
///   overshooting it.
/// - Exactly one inside: `-1`, whichever direction it moved.
///
/// The last rule is deliberately coarse: entering the window scores the
/// same as leaving it. Existing reward scenarios are tuned against it.
pub fn range_reward(new: f64, old: f64, low: f64, high: f64) -> f64 {
    let new_in = low <= new && new <= high;
    let old_in = low <= old && old <= high;

    if new_in && old_in {
        return 0.0;
    }

    if new < low && old < low {
        return if new == old { -1.0 } else { new - old };
    }

    if new > high && old > high {
        return if new == old { -1.0 } else { old - new };
    }

    if new > high && old < low {
        return (high - new) + (old - low);
    }

    if new < low && old > high {
        return (high - old) + (new - low);
    }

    if new_in != old_in {
        return -1.0;
    }

    // Only reachable with NaN inputs or an inverted window.
    0.0
}

/// Shaped reward measuring progress by clamping to the window.
///
/// Unlike [`range_reward`], a static value scores `0` and entering the
/// window is rewarded by the distance covered up to its edge.
pub fn clamped_range_reward(new: f64, old: f64, low: f64, high: f64) -> f64 {
    let new_in = low <= new && new <= high;
    let old_in = low <= old && old <= high;

    if new_in && old_in {
        return 0.0;
    }
    if old <= high && new <= high {
        return new.min(low) - old.min(low);
    }
    if old >= low && new >= low {
        return old.max(high) - new.max(high);
    }
    if new > high && old < low {
        return high - new + old - low;
    }
    if new < low && old > high {
        return high - old + new - low;
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const INF: f64 = f64::INFINITY;

    // ── range_reward ────────────────────────────────────────────

    #[test]
    fn inside_is_zero() {
        assert_eq!(range_reward(3.0, 3.0, 1.0, 5.0), 0.0);
        assert_eq!(range_reward(1.0, 5.0, 1.0, 5.0), 0.0);
    }

    #[test]
    fn below_rewards_approach_and_penalizes_standing_still() {
        assert_eq!(range_reward(4.0, 2.0, 10.0, 12.0), 2.0);
        assert_eq!(range_reward(2.0, 4.0, 10.0, 12.0), -2.0);
        assert_eq!(range_reward(2.0, 2.0, 10.0, 12.0), -1.0);
    }

    #[test]
    fn above_is_mirrored() {
        assert_eq!(range_reward(13.0, 15.0, 10.0, 12.0), 2.0);
        assert_eq!(range_reward(15.0, 13.0, 10.0, 12.0), -2.0);
        assert_eq!(range_reward(15.0, 15.0, 10.0, 12.0), -1.0);
    }

    #[test]
    fn straddling_sums_overshoot() {
        // old below, new above: (12 - 14) + (8 - 10)
        assert_eq!(range_reward(14.0, 8.0, 10.0, 12.0), -4.0);
        // old above, new below: (12 - 14) + (8 - 10)
        assert_eq!(range_reward(8.0, 14.0, 10.0, 12.0), -4.0);
    }

    #[test]
    fn one_inside_is_minus_one_either_way() {
        assert_eq!(range_reward(11.0, 4.0, 10.0, 12.0), -1.0);
        assert_eq!(range_reward(4.0, 11.0, 10.0, 12.0), -1.0);
        assert_eq!(range_reward(11.0, 20.0, 10.0, 12.0), -1.0);
    }

    #[test]
    fn infinite_window_rewards_growth() {
        assert_eq!(range_reward(6.0, 5.0, INF, INF), 1.0);
        assert_eq!(range_reward(4.0, 5.0, INF, INF), -1.0);
        assert_eq!(range_reward(5.0, 5.0, INF, INF), -1.0);
        // Unsolvable path length still below an infinite window.
        assert_eq!(range_reward(-1.0, 7.0, INF, INF), -8.0);
    }

    // ── clamped_range_reward ────────────────────────────────────

    #[test]
    fn clamped_static_is_zero() {
        assert_eq!(clamped_range_reward(2.0, 2.0, 10.0, 12.0), 0.0);
        assert_eq!(clamped_range_reward(20.0, 20.0, 10.0, 12.0), 0.0);
    }

    #[test]
    fn clamped_entering_counts_distance_to_edge() {
        assert_eq!(clamped_range_reward(11.0, 4.0, 10.0, 12.0), 6.0);
        assert_eq!(clamped_range_reward(11.0, 20.0, 10.0, 12.0), 8.0);
        assert_eq!(clamped_range_reward(4.0, 11.0, 10.0, 12.0), -6.0);
    }

    #[test]
    fn clamped_straddle_matches_range_reward() {
        assert_eq!(
            clamped_range_reward(14.0, 8.0, 10.0, 12.0),
            range_reward(14.0, 8.0, 10.0, 12.0)
        );
    }

    proptest! {
        #[test]
        fn static_inside_is_zero(low in -50i32..50, span in 0i32..20, off in 0i32..20) {
            let (low, high) = (low as f64, (low + span) as f64);
            let v = low + (off.min(span)) as f64;
            prop_assert_eq!(range_reward(v, v, low, high), 0.0);
        }

        #[test]
        fn closer_from_below_scores_higher(
            low in 0i32..100,
            old_gap in 3i32..50,
            a in 0i32..1000,
            b in 0i32..1000,
        ) {
            // Two candidate new values, both still below the window and
            // both moved away from `old`.
            let far_off = 1 + a % (old_gap - 2);
            let near_off = far_off + 1 + b % (old_gap - 1 - far_off);
            let old = (low - old_gap) as f64;
            let far = old + far_off as f64;
            let near = old + near_off as f64;
            let (low, high) = (low as f64, low as f64 + 5.0);
            prop_assert!(near < low);
            prop_assert!(range_reward(near, old, low, high) > range_reward(far, old, low, high));
        }
    }
}
