use web_sys::{CssStyleDeclaration, HtmlElement};

use crate::error::Result;
use crate::motion::easing::Easing;
use crate::motion::reveal::{Command, RevealSpec};
use crate::motion::visual::VisualState;

pub fn transition_css(duration: f64, delay: f64, easing: Easing) -> String {
    let timing = format!("{:.2}s {} {:.2}s", duration, easing.css(), delay);
    format!("transform {timing}, opacity {timing}")
}

fn write_state(style: &CssStyleDeclaration, state: &VisualState) -> Result<()> {
    if state.is_identity() {
        // Hand control back to the stylesheet so :hover transforms work
        style.remove_property("transform")?;
        style.remove_property("opacity")?;
    } else {
        style.set_property("transform", &state.transform_css())?;
        style.set_property("opacity", &state.opacity_css())?;
    }
    Ok(())
}

/// Jumps straight to `state` without any transition.
pub fn set_instantly(element: &HtmlElement, state: &VisualState) -> Result<()> {
    let style = element.style();
    style.set_property("transition", "none")?;
    write_state(&style, state)?;
    // Reading layout commits the jump before any following transition
    let _ = element.offset_height();
    Ok(())
}

pub fn transition_to(
    element: &HtmlElement,
    state: &VisualState,
    duration: f64,
    delay: f64,
    easing: Easing,
) -> Result<()> {
    let style = element.style();
    style.set_property("transition", &transition_css(duration, delay, easing))?;
    write_state(&style, state)
}

pub fn clear_transition(element: &HtmlElement) -> Result<()> {
    element.style().remove_property("transition")?;
    Ok(())
}

/// Starts `command` on every target, staggered in declared order.
/// Returns how long (seconds) until the last element settles.
pub fn run_command(targets: &[HtmlElement], spec: &RevealSpec, command: Command) -> Result<f64> {
    let state = spec.target(command);
    let delays = spec.delays(command, targets.len());
    let mut settled_after: f64 = 0.0;
    for (element, delay) in targets.iter().zip(delays) {
        transition_to(element, &state, spec.duration, delay, spec.easing)?;
        settled_after = settled_after.max(delay + spec.duration);
    }
    Ok(settled_after)
}

/// Puts every target in `state` with no animation. Used whenever the page
/// cannot or should not animate.
pub fn reveal_instantly(targets: &[HtmlElement], state: &VisualState) -> Result<()> {
    for element in targets {
        set_instantly(element, state)?;
        clear_transition(element)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_covers_transform_and_opacity() {
        assert_eq!(
            transition_css(0.8, 0.4, Easing::Linear),
            "transform 0.80s linear 0.40s, opacity 0.80s linear 0.40s"
        );
    }
}
