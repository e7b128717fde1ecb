//! Error types for the pointer effect.
//!
//! Install-time failures abort activation and leave the page's default
//! cursor in place. Errors serialize as their message so they can cross
//! the wasm boundary as plain strings.

use serde::Serialize;
use thiserror::Error;

/// Main error type for pointer effect operations.
#[derive(Error, Debug)]
pub enum CursorFxError {
    /// A required cursor element is missing from the page
    #[error("Cursor element not found: {selector}")]
    ElementNotFound { selector: String },

    /// No global `window` (not running in a browser main thread)
    #[error("No window available")]
    NoWindow,

    /// Window has no document attached
    #[error("No document available")]
    NoDocument,

    /// Effect configuration could not be parsed
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A DOM call threw
    #[error("DOM error: {0}")]
    Dom(String),
}

impl Serialize for CursorFxError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<serde_json::Error> for CursorFxError {
    fn from(err: serde_json::Error) -> Self {
        CursorFxError::InvalidConfig(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for CursorFxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        CursorFxError::Dom(format!("{:?}", value))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<CursorFxError> for wasm_bindgen::JsValue {
    fn from(err: CursorFxError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

/// Extension trait turning a missing value into a `CursorFxError`.
pub trait OptionExt<T> {
    /// Convert None to an arbitrary error built lazily.
    fn or_fx_err<F: FnOnce() -> CursorFxError>(self, f: F) -> CursorFxResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_fx_err<F: FnOnce() -> CursorFxError>(self, f: F) -> CursorFxResult<T> {
        self.ok_or_else(f)
    }
}

/// Type alias for Results using CursorFxError.
pub type CursorFxResult<T> = Result<T, CursorFxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CursorFxError::ElementNotFound {
            selector: ".cursor-dot".to_string(),
        };
        assert_eq!(err.to_string(), "Cursor element not found: .cursor-dot");
    }

    #[test]
    fn test_error_serialization() {
        let err = CursorFxError::NoDocument;
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"No document available\"");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: CursorFxError = json_err.into();
        assert!(matches!(err, CursorFxError::InvalidConfig(_)));
    }

    #[test]
    fn test_option_ext_or_fx_err() {
        let opt: Option<i32> = None;
        let result = opt.or_fx_err(|| CursorFxError::NoWindow);
        assert!(matches!(result, Err(CursorFxError::NoWindow)));

        let some: Option<i32> = Some(7);
        assert_eq!(some.or_fx_err(|| CursorFxError::NoWindow).unwrap(), 7);
    }
}
