//! Browser session history via `web-sys`.

use crate::entry::{EntryState, ScrollPosition};
use crate::error::HistoryError;
use crate::platform::{Platform, PopStateListener};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, PopStateEvent, Window};

/// [`Platform`] backed by `window.history`, `window.location` and the
/// window's `popstate` event.
#[derive(Debug, Clone)]
pub struct BrowserPlatform {
	window: Window,
}

impl BrowserPlatform {
	/// Binds to the global `window`.
	///
	/// # Errors
	///
	/// Returns [`HistoryError::Unavailable`] outside a browser window context.
	pub fn new() -> Result<Self, HistoryError> {
		let window = web_sys::window()
			.ok_or_else(|| HistoryError::Unavailable("no window object".to_string()))?;
		Ok(Self { window })
	}

	fn history(&self) -> Result<web_sys::History, HistoryError> {
		self.window.history().map_err(js_error)
	}
}

impl Platform for BrowserPlatform {
	fn location_href(&self) -> Result<String, HistoryError> {
		self.window.location().href().map_err(js_error)
	}

	fn push_state(&self, state: &EntryState, url: &str) -> Result<(), HistoryError> {
		self.history()?
			.push_state_with_url(&encode_state(state)?, "", Some(url))
			.map_err(js_error)
	}

	fn replace_state(&self, state: &EntryState, url: &str) -> Result<(), HistoryError> {
		self.history()?
			.replace_state_with_url(&encode_state(state)?, "", Some(url))
			.map_err(js_error)
	}

	fn scroll_position(&self) -> ScrollPosition {
		ScrollPosition::new(
			self.window.scroll_x().unwrap_or_default(),
			self.window.scroll_y().unwrap_or_default(),
		)
	}

	fn subscribe_popstate(&self, listener: PopStateListener) -> Result<(), HistoryError> {
		let handler = Closure::wrap(Box::new(move |event: Event| {
			let state = event
				.dyn_ref::<PopStateEvent>()
				.and_then(|event| decode_state(&event.state()));
			listener(state);
		}) as Box<dyn FnMut(_)>);

		self.window
			.add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())
			.map_err(js_error)?;
		// The listener lives as long as the page
		handler.forget();
		Ok(())
	}
}

fn encode_state(state: &EntryState) -> Result<JsValue, HistoryError> {
	let json = serde_json::to_string(state)?;
	js_sys::JSON::parse(&json).map_err(js_error)
}

/// Entries pushed by other code carry no state or foreign state.
fn decode_state(value: &JsValue) -> Option<EntryState> {
	if value.is_null() || value.is_undefined() {
		return None;
	}
	let json = js_sys::JSON::stringify(value).ok()?.as_string()?;
	match serde_json::from_str(&json) {
		Ok(state) => Some(state),
		Err(error) => {
			tracing::trace!(%error, "ignoring foreign history state");
			None
		}
	}
}

fn js_error(value: JsValue) -> HistoryError {
	let message = value
		.dyn_ref::<js_sys::Error>()
		.map(|error| String::from(error.message()))
		.or_else(|| value.as_string())
		.unwrap_or_else(|| format!("{value:?}"));
	HistoryError::Operation(message)
}
