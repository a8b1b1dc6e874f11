use log::Level;

/// Scroll offset (px) past which the header switches to its solid style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Number of drifting particles behind the call-to-action.
pub const CTA_PARTICLE_COUNT: usize = 20;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose observer bookkeeping when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Whether the browser allows us to animate at all.
///
/// Falls back to `false` when there is no window, so content is shown in its
/// final state instead of being left hidden behind an animation that never
/// runs.
pub fn motion_allowed() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(query)) => !query.matches(),
        // matchMedia missing means an old engine, not a user preference
        _ => true,
    }
}
