use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::Result;
use crate::motion::registry::Registration;

/// A window event listener that removes itself when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(window: &Window, event: &'static str, handler: Rc<dyn Fn()>) -> Result<Self> {
        let callback = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            window: window.clone(),
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("failed to remove {} listener: {:?}", self.event, e);
        }
    }
}

/// One handler attached to several window events, counted in the page's
/// observer registry for as long as it lives.
pub struct Subscription {
    _listeners: Vec<WindowListener>,
    _registration: Registration,
}

impl Subscription {
    pub fn new(
        window: &Window,
        events: &[&'static str],
        handler: Rc<dyn Fn()>,
        registration: Registration,
    ) -> Result<Self> {
        let listeners = events
            .iter()
            .map(|&event| WindowListener::new(window, event, Rc::clone(&handler)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            _listeners: listeners,
            _registration: registration,
        })
    }
}

/// Geometry can change on either, so every scroll-driven binding listens to
/// both.
pub const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];
