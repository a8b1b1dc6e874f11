use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::dom::listener::Subscription;
use crate::dom::viewport;
use crate::error::Result;
use crate::motion::registry::ObserverRegistry;
use crate::motion::scroll::ScrollFlag;

/// Tracks whether the window has scrolled past `threshold` pixels.
///
/// The flag lives in the calling component; whoever needs it gets it as a
/// prop.
#[hook]
pub fn use_scrolled(threshold: f64, registry: &ObserverRegistry) -> bool {
    let scrolled = use_state(|| false);
    {
        let scrolled = scrolled.clone();
        let registry = registry.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = match subscribe(threshold, &registry, scrolled) {
                    Ok(subscription) => Some(subscription),
                    Err(e) => {
                        warn!("header.scrolled: not tracking scroll ({})", e);
                        None
                    }
                };
                move || drop(subscription)
            },
            (),
        );
    }
    *scrolled
}

fn subscribe(
    threshold: f64,
    registry: &ObserverRegistry,
    scrolled: UseStateHandle<bool>,
) -> Result<Subscription> {
    let window = viewport::window()?;
    let flag = Rc::new(RefCell::new(ScrollFlag::new(threshold)));

    let handler: Rc<dyn Fn()> = {
        let window = window.clone();
        Rc::new(move || {
            let Ok(scroll_y) = viewport::scroll_y(&window) else {
                return;
            };
            if let Some(value) = flag.borrow_mut().update(scroll_y) {
                scrolled.set(value);
            }
        })
    };
    // Reloads can restore a scrolled position
    handler();

    Subscription::new(&window, &["scroll"], handler, registry.register("header.scrolled"))
}
