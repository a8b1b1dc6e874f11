/// Start offsets (seconds) for playing a group of `count` elements forward.
///
/// Element `i` starts at `delay_children + i * stagger`, in declared order.
pub fn play_delays(count: usize, delay_children: f64, stagger: f64) -> Vec<f64> {
    (0..count)
        .map(|i| delay_children + i as f64 * stagger)
        .collect()
}

/// Start offsets (seconds) for reversing a group. The last element to
/// appear is the first to leave, and reversal never waits on the group's
/// entrance delay.
pub fn reverse_delays(count: usize, stagger: f64) -> Vec<f64> {
    (0..count)
        .map(|i| (count - 1 - i) as f64 * stagger)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn three_items_point_two_apart() {
        assert_close(&play_delays(3, 0.0, 0.2), &[0.0, 0.2, 0.4]);
    }

    #[test]
    fn entrance_delay_shifts_whole_group() {
        assert_close(&play_delays(3, 0.3, 0.2), &[0.3, 0.5, 0.7]);
    }

    #[test]
    fn reverse_runs_last_in_first_out() {
        assert_close(&reverse_delays(3, 0.2), &[0.4, 0.2, 0.0]);
    }

    #[test]
    fn empty_group_has_no_delays() {
        assert!(play_delays(0, 0.3, 0.2).is_empty());
        assert!(reverse_delays(0, 0.2).is_empty());
    }
}
