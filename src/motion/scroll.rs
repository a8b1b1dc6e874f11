/// "Page has scrolled past the threshold" flag driving the header style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFlag {
    threshold: f64,
    scrolled: bool,
}

impl ScrollFlag {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    #[cfg(test)]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Records the latest scroll offset. Returns the new value only when it
    /// flipped, so callers can skip redundant re-renders.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let scrolled = scroll_y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_flag_scenario() {
        let mut flag = ScrollFlag::new(50.0);
        assert_eq!(flag.update(0.0), None);
        assert!(!flag.is_scrolled());
        assert_eq!(flag.update(51.0), Some(true));
        assert!(flag.is_scrolled());
        assert_eq!(flag.update(49.0), Some(false));
        assert!(!flag.is_scrolled());
    }

    #[test]
    fn threshold_itself_is_not_scrolled() {
        let mut flag = ScrollFlag::new(50.0);
        assert_eq!(flag.update(50.0), None);
    }

    #[test]
    fn only_reports_changes() {
        let mut flag = ScrollFlag::new(50.0);
        assert_eq!(flag.update(300.0), Some(true));
        assert_eq!(flag.update(600.0), None);
        assert_eq!(flag.update(51.0), None);
    }
}
