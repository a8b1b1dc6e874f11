use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use web_sys::{Element, HtmlElement};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::dom::listener::{Subscription, SCROLL_EVENTS};
use crate::dom::viewport;
use crate::error::{MotionError, Result};
use crate::hooks::bind::bind_after_layout;
use crate::hooks::context::{use_motion, MotionContext};
use crate::motion::parallax::ParallaxSpec;

/// A named scroll-scrubbed background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub label: &'static str,
    pub spec: ParallaxSpec,
}

impl ParallaxLayer {
    pub const fn new(label: &'static str, spec: ParallaxSpec) -> Self {
        Self { label, spec }
    }
}

/// Trips on the first failure only.
#[derive(Debug, Default)]
struct FailureLatch(Cell<bool>);

impl FailureLatch {
    fn first(&self) -> bool {
        !self.0.replace(true)
    }
}

/// Scrubs `background`'s position with the scroll progress of `section`.
///
/// Unlike a reveal there is no trigger: the position is recomputed on every
/// scroll and resize for as long as the section is mounted.
#[hook]
pub fn use_parallax(section: &NodeRef, background: &NodeRef, layer: ParallaxLayer) {
    let motion = use_motion();
    let section = section.clone();
    let background = background.clone();
    use_effect_with_deps(
        move |_| {
            bind_after_layout(section, layer.label, move |section| {
                match bind(section, &background, layer, &motion) {
                    Ok(subscription) => subscription,
                    Err(e) => {
                        // The background simply stays where the markup put it
                        warn!("{}: disabled ({})", layer.label, e);
                        None
                    }
                }
            })
        },
        (),
    );
}

fn bind(
    section: &Element,
    background: &NodeRef,
    layer: ParallaxLayer,
    motion: &MotionContext,
) -> Result<Option<Subscription>> {
    if !motion.animate {
        return Ok(None);
    }
    let background = background
        .cast::<Element>()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(MotionError::NotMounted)?;
    let window = viewport::window()?;

    let handler: Rc<dyn Fn()> = {
        let section = section.clone();
        let window = window.clone();
        let failed = FailureLatch::default();
        Rc::new(move || {
            let Ok(viewport_height) = viewport::viewport_height(&window) else {
                return;
            };
            let position = layer
                .spec
                .background_position(viewport::element_box(&section), viewport_height);
            if let Err(e) = background.style().set_property("background-position", &position) {
                if failed.first() {
                    debug!("{}: cannot move background: {:?}", layer.label, e);
                }
            }
        })
    };
    handler();

    Subscription::new(
        &window,
        &SCROLL_EVENTS,
        handler,
        motion.registry.register(layer.label),
    )
    .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_reports_first_failure_only() {
        let latch = FailureLatch::default();
        assert!(latch.first());
        assert!(!latch.first());
        assert!(!latch.first());
    }

    #[test]
    fn layer_keeps_its_label() {
        let layer = ParallaxLayer::new("hero.backdrop", ParallaxSpec::vertical(10.0, 90.0));
        assert_eq!(layer.label, "hero.backdrop");
        assert_eq!(layer.spec.y_start, 10.0);
    }
}
