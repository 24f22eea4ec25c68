//! Error type shared by the DOM installers.
//!
//! None of these reach the visitor: callers log them and the affected effect
//! simply does not appear.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons an effect could not be installed.
#[derive(Debug, Error)]
pub enum FxError {
	/// No global `window` (not running in a browser main thread).
	#[error("no global window")]
	NoWindow,
	/// The window has no document.
	#[error("window has no document")]
	NoDocument,
	/// The canvas refused to hand out a 2d context.
	#[error("2d drawing context unavailable")]
	NoContext,
	/// A platform API the effect depends on is missing.
	#[error("{0} is not supported by this browser")]
	Unsupported(&'static str),
	/// A configured CSS selector was rejected by the document.
	#[error("invalid selector `{0}`")]
	Selector(String),
	/// Any other exception thrown by a DOM call.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for FxError {
	fn from(value: JsValue) -> Self {
		let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
		FxError::Js(message)
	}
}
