//! Error type shared by feature installers.

use wasm_bindgen::{JsCast, JsValue};

/// Reasons a feature could not be wired to the page.
///
/// None of these are fatal: the app logs them and carries on with the
/// remaining features.
#[derive(Debug, thiserror::Error)]
pub enum FxError {
	/// No global `window` (not running in a browser).
	#[error("no browser window available")]
	NoWindow,
	/// A required element is absent from the page.
	#[error("element not found: {0}")]
	MissingElement(String),
	/// `window.localStorage` is disabled or inaccessible.
	#[error("local storage unavailable")]
	StorageUnavailable,
	/// A browser API call threw.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for FxError {
	fn from(value: JsValue) -> Self {
		let message = value
			.dyn_ref::<js_sys::Error>()
			.map(|e| String::from(e.message()))
			.or_else(|| value.as_string())
			.unwrap_or_else(|| format!("{value:?}"));
		Self::Js(message)
	}
}

/// Convenience alias for installer results.
pub type FxResult<T> = Result<T, FxError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_element_names_the_selector() {
		let err = FxError::MissingElement("#bg-canvas".into());
		assert_eq!(err.to_string(), "element not found: #bg-canvas");
	}
}
