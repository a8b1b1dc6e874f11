use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser capabilities the motion layer depends on.
///
/// None of these are fatal: callers log them and fall back to showing the
/// content in its final state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    #[error("no window available")]
    NoWindow,
    #[error("target element is not mounted")]
    NotMounted,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for MotionError {
    fn from(value: JsValue) -> Self {
        MotionError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, MotionError>;
