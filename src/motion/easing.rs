/// Timing curves used by the landing page.
///
/// Every curve is expressed as a CSS cubic-bezier so the browser runs the
/// exact same curve that [`Easing::value`] evaluates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    Power2Out,
    Power2InOut,
    /// Overshoots the target before settling. The argument is the overshoot
    /// strength, 1.7 gives the familiar "pop".
    BackOut(f64),
}

impl Easing {
    fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Easing::Power2Out => (0.215, 0.61, 0.355, 1.0),
            Easing::Power2InOut => (0.645, 0.045, 0.355, 1.0),
            Easing::BackOut(overshoot) => (0.34, 1.0 + overshoot.max(0.0) * 0.33, 0.64, 1.0),
        }
    }

    pub fn css(self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            other => {
                let (x1, y1, x2, y2) = other.control_points();
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }

    /// Progress of the curve at time fraction `t`, clamped to `[0, 1]`.
    pub fn value(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 || self == Easing::Linear {
            return t;
        }
        let (x1, y1, x2, y2) = self.control_points();
        let s = solve_parameter(t, x1, x2);
        bezier(s, y1, y2)
    }
}

fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

// Finds the curve parameter whose x equals `x`. Newton first, bisection
// when the slope is too flat to trust.
fn solve_parameter(x: f64, x1: f64, x2: f64) -> f64 {
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < 1e-7 {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..50 {
        let current = bezier(s, x1, x2);
        if (current - x).abs() < 1e-7 {
            break;
        }
        if current < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Power2Out,
        Easing::Power2InOut,
        Easing::BackOut(1.7),
    ];

    #[test]
    fn curves_start_at_zero_and_end_at_one() {
        for easing in ALL {
            assert_eq!(easing.value(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.value(1.0), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn linear_is_identity() {
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((Easing::Linear.value(t) - t).abs() < 1e-6);
        }
    }

    #[test]
    fn ease_out_front_loads_progress() {
        assert!(Easing::EaseOut.value(0.5) > 0.5);
        assert!(Easing::Power2Out.value(0.5) > 0.5);
    }

    #[test]
    fn ease_in_out_is_symmetric_around_midpoint() {
        let mid = Easing::EaseInOut.value(0.5);
        assert!((mid - 0.5).abs() < 1e-3);
        assert!(Easing::EaseInOut.value(0.25) < 0.25);
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BackOut(1.7).value(i as f64 / 100.0))
            .fold(0.0, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn out_of_range_time_is_clamped() {
        assert_eq!(Easing::EaseOut.value(-3.0), 0.0);
        assert_eq!(Easing::EaseOut.value(4.0), 1.0);
    }

    #[test]
    fn css_names() {
        assert_eq!(Easing::Linear.css(), "linear");
        assert_eq!(Easing::EaseOut.css(), "cubic-bezier(0, 0, 0.58, 1)");
    }
}
