/// Vertical geometry of an element relative to the viewport, in CSS pixels.
///
/// `top` is the distance from the top of the viewport to the element's top
/// edge, so it goes negative once the element starts scrolling off the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

impl ElementBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Fraction of the element's height that has come up past the bottom
    /// edge of a viewport of `viewport_height`.
    /// Stays at 1.0 once the element scrolls off the top.
    pub fn entered_fraction(&self, viewport_height: f64) -> f64 {
        let entered = viewport_height - self.top;
        if self.height <= 0.0 {
            return if entered >= 0.0 { 1.0 } else { 0.0 };
        }
        (entered / self.height).clamp(0.0, 1.0)
    }
}

/// When a reveal group fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerPoint {
    /// As soon as the group is bound.
    Mount,
    /// Once at least this fraction of the trigger element has scrolled into
    /// view from below.
    Amount(f64),
    /// Once the trigger element's top edge reaches this fraction of the
    /// viewport height, measured from the top. `0.8` fires when the top edge
    /// is 80% of the way down the screen.
    ViewportLine(f64),
}

impl TriggerPoint {
    /// Whether the element is past the trigger point.
    pub fn is_past(&self, element: ElementBox, viewport_height: f64) -> bool {
        match *self {
            TriggerPoint::Mount => true,
            TriggerPoint::Amount(amount) => {
                element.entered_fraction(viewport_height) >= amount.clamp(0.0, 1.0)
            }
            TriggerPoint::ViewportLine(line) => element.top <= viewport_height * line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;

    #[test]
    fn entered_fraction_partial() {
        let el = ElementBox::new(800.0, 400.0);
        assert!((el.entered_fraction(VIEWPORT) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn entered_fraction_stays_full_after_leaving_top() {
        assert_eq!(ElementBox::new(-500.0, 100.0).entered_fraction(VIEWPORT), 1.0);
    }

    #[test]
    fn entered_fraction_below_viewport() {
        assert_eq!(ElementBox::new(1200.0, 100.0).entered_fraction(VIEWPORT), 0.0);
    }

    #[test]
    fn zero_height_marker() {
        assert_eq!(ElementBox::new(999.0, 0.0).entered_fraction(VIEWPORT), 1.0);
        assert_eq!(ElementBox::new(1001.0, 0.0).entered_fraction(VIEWPORT), 0.0);
    }

    #[test]
    fn amount_threshold_79_vs_81_percent() {
        let trigger = TriggerPoint::Amount(0.8);
        // 100px tall element, 79px then 81px inside the viewport
        assert!(!trigger.is_past(ElementBox::new(921.0, 100.0), VIEWPORT));
        assert!(trigger.is_past(ElementBox::new(919.0, 100.0), VIEWPORT));
    }

    #[test]
    fn viewport_line_80_percent() {
        let trigger = TriggerPoint::ViewportLine(0.8);
        assert!(!trigger.is_past(ElementBox::new(810.0, 300.0), VIEWPORT));
        assert!(trigger.is_past(ElementBox::new(800.0, 300.0), VIEWPORT));
        assert!(trigger.is_past(ElementBox::new(-2000.0, 300.0), VIEWPORT));
    }

    #[test]
    fn mount_is_always_past() {
        assert!(TriggerPoint::Mount.is_past(ElementBox::new(5000.0, 10.0), VIEWPORT));
    }
}
