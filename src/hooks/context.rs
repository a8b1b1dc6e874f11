use yew::prelude::*;

use crate::motion::registry::ObserverRegistry;

/// Page-scoped motion settings handed to every section.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionContext {
    /// False when the browser asked for reduced motion or cannot animate.
    /// Everything then renders in its final state.
    pub animate: bool,
    pub registry: ObserverRegistry,
}

impl MotionContext {
    pub fn new(animate: bool) -> Self {
        Self {
            animate,
            registry: ObserverRegistry::new(),
        }
    }

    /// What a section sees when rendered outside a page: no animation, so
    /// nothing stays hidden.
    pub fn still() -> Self {
        Self::new(false)
    }
}

#[hook]
pub fn use_motion() -> MotionContext {
    use_context::<MotionContext>().unwrap_or_else(MotionContext::still)
}
