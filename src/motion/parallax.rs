use super::easing::Easing;
use super::trigger::ElementBox;

/// Scroll progress of a section between "its top enters at the bottom of
/// the viewport" (0.0) and "its bottom leaves at the top" (1.0).
pub fn scroll_progress(section: ElementBox, viewport_height: f64) -> f64 {
    let distance = viewport_height + section.height;
    if distance <= 0.0 {
        return 0.0;
    }
    ((viewport_height - section.top) / distance).clamp(0.0, 1.0)
}

/// A background whose vertical position follows [`scroll_progress`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxSpec {
    /// Horizontal background position, percent.
    pub x: f64,
    /// Vertical background position at progress 0, percent.
    pub y_start: f64,
    /// Vertical background position at progress 1, percent.
    pub y_end: f64,
    /// Curve applied to the scroll progress before interpolating.
    pub easing: Easing,
}

impl ParallaxSpec {
    pub const fn vertical(y_start: f64, y_end: f64) -> Self {
        Self {
            x: 50.0,
            y_start,
            y_end,
            easing: Easing::Linear,
        }
    }

    pub fn y_at(&self, progress: f64) -> f64 {
        self.y_start + (self.y_end - self.y_start) * self.easing.value(progress)
    }

    /// CSS `background-position` for the given section geometry.
    pub fn background_position(&self, section: ElementBox, viewport_height: f64) -> String {
        let y = self.y_at(scroll_progress(section, viewport_height));
        format!("{}% {:.2}%", self.x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    #[test]
    fn progress_bounds() {
        // Section still below the fold
        assert_eq!(scroll_progress(ElementBox::new(900.0, 400.0), VIEWPORT), 0.0);
        // Top edge just touching the bottom of the viewport
        assert_eq!(scroll_progress(ElementBox::new(800.0, 400.0), VIEWPORT), 0.0);
        // Bottom edge just leaving the top
        assert_eq!(scroll_progress(ElementBox::new(-400.0, 400.0), VIEWPORT), 1.0);
        assert_eq!(scroll_progress(ElementBox::new(-2000.0, 400.0), VIEWPORT), 1.0);
    }

    #[test]
    fn progress_is_proportional() {
        // Travel is 1200px; 300px in is a quarter
        let p = scroll_progress(ElementBox::new(500.0, 400.0), VIEWPORT);
        assert!((p - 0.25).abs() < 1e-9);
        let halfway = scroll_progress(ElementBox::new(200.0, 400.0), VIEWPORT);
        assert!((halfway - 0.5).abs() < 1e-9);
    }

    #[test]
    fn recomputed_every_frame_follows_scroll_both_ways() {
        let spec = ParallaxSpec::vertical(0.0, 100.0);
        let tops = [800.0, 500.0, 200.0, 500.0, 800.0];
        let ys: Vec<f64> = tops
            .iter()
            .map(|&top| spec.y_at(scroll_progress(ElementBox::new(top, 400.0), VIEWPORT)))
            .collect();
        assert_eq!(ys[0], 0.0);
        assert!(ys[1] < ys[2]);
        assert_eq!(ys[1], ys[3]);
        assert_eq!(ys[4], 0.0);
    }

    #[test]
    fn eased_scrub_keeps_endpoints() {
        let spec = ParallaxSpec {
            easing: Easing::EaseInOut,
            ..ParallaxSpec::vertical(0.0, 100.0)
        };
        assert_eq!(spec.y_at(0.0), 0.0);
        assert_eq!(spec.y_at(1.0), 100.0);
        assert!(spec.y_at(0.25) < 25.0);
    }

    #[test]
    fn background_position_css() {
        let spec = ParallaxSpec::vertical(0.0, 100.0);
        assert_eq!(spec.background_position(ElementBox::new(200.0, 400.0), VIEWPORT), "50% 50.00%");
    }
}
