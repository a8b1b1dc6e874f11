/// The animatable properties of a revealed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotation: f64,
    pub opacity: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl VisualState {
    /// Untransformed and fully opaque. Every reveal ends here.
    pub const IDENTITY: VisualState = VisualState {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        rotation: 0.0,
        opacity: 1.0,
    };

    /// Shifted down by `dy` pixels and transparent.
    pub const fn rise(dy: f64) -> Self {
        VisualState {
            translate_y: dy,
            opacity: 0.0,
            ..Self::IDENTITY
        }
    }

    pub const fn offset(dx: f64, dy: f64) -> Self {
        VisualState {
            translate_x: dx,
            translate_y: dy,
            ..Self::IDENTITY
        }
    }

    pub const fn with_opacity(self, opacity: f64) -> Self {
        VisualState { opacity, ..self }
    }

    pub const fn with_scale(self, scale: f64) -> Self {
        VisualState { scale, ..self }
    }

    pub const fn with_rotation(self, rotation: f64) -> Self {
        VisualState { rotation, ..self }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// CSS `transform` value. Identity renders as `none` so the element does
    /// not keep a stacking context once revealed.
    pub fn transform_css(&self) -> String {
        let mut parts = Vec::new();
        if self.translate_x != 0.0 || self.translate_y != 0.0 {
            parts.push(format!("translate({}px, {}px)", self.translate_x, self.translate_y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.rotation != 0.0 {
            parts.push(format!("rotate({}deg)", self.rotation));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    pub fn opacity_css(&self) -> String {
        self.opacity.clamp(0.0, 1.0).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_has_no_transform() {
        assert_eq!(VisualState::IDENTITY.transform_css(), "none");
        assert_eq!(VisualState::IDENTITY.opacity_css(), "1");
        assert!(VisualState::default().is_identity());
    }

    #[test]
    fn rise_is_translated_and_hidden() {
        let state = VisualState::rise(50.0);
        assert_eq!(state.transform_css(), "translate(0px, 50px)");
        assert_eq!(state.opacity_css(), "0");
    }

    #[test]
    fn combined_transform_keeps_order() {
        let state = VisualState::IDENTITY.with_scale(0.0).with_rotation(-180.0);
        assert_eq!(state.transform_css(), "scale(0) rotate(-180deg)");
    }
}
