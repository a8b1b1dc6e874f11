use web_sys::{Element, HtmlElement, Window};
use wasm_bindgen::JsCast;

use crate::error::{MotionError, Result};
use crate::motion::trigger::ElementBox;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(MotionError::NoWindow)
}

pub fn viewport_height(window: &Window) -> Result<f64> {
    window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| MotionError::Js("innerHeight is not a number".to_string()))
}

pub fn scroll_y(window: &Window) -> Result<f64> {
    Ok(window.scroll_y()?)
}

pub fn element_box(element: &Element) -> ElementBox {
    let rect = element.get_bounding_client_rect();
    ElementBox::new(rect.top(), rect.height())
}

/// Which elements under a container make up a reveal group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Targets {
    /// The container element itself.
    Container,
    /// The container's direct children, in document order.
    Children,
    /// Descendants matching a CSS selector, in document order.
    Selector(&'static str),
}

pub fn collect_targets(container: &Element, targets: Targets) -> Result<Vec<HtmlElement>> {
    let mut found = Vec::new();
    match targets {
        Targets::Container => found.push(container.clone()),
        Targets::Children => {
            let children = container.children();
            for i in 0..children.length() {
                if let Some(el) = children.item(i) {
                    found.push(el);
                }
            }
        }
        Targets::Selector(selector) => {
            let nodes = container.query_selector_all(selector)?;
            for i in 0..nodes.length() {
                if let Some(node) = nodes.item(i) {
                    if let Ok(el) = node.dyn_into::<Element>() {
                        found.push(el);
                    }
                }
            }
        }
    }
    // Only HTML elements carry an inline style we can drive
    Ok(found
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}
