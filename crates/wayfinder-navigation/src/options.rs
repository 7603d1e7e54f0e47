//! Per-navigation options.

use serde::{Deserialize, Serialize};

/// Options for a single navigation.
///
/// Deserializes from the camelCase object form used by hosts that pass
/// options through JavaScript (`{"replaceState": true, "scrollY": 400}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationOptions {
	/// Replace the current history entry instead of pushing one.
	///
	/// When unset, the entry is replaced exactly when the target is the same
	/// route with equal params and query as the current match.
	pub replace_state: Option<bool>,

	/// Leave the session history untouched.
	pub invisible: bool,

	/// Run lifecycle hooks. When `false` only the current match changes.
	#[serde(default = "default_true")]
	pub dispatch: bool,

	/// Horizontal scroll target stamped on the new match.
	pub scroll_x: Option<f64>,

	/// Vertical scroll target stamped on the new match.
	pub scroll_y: Option<f64>,

	/// Do nothing when the target equals the current match.
	pub ignore_same_route: bool,
}

fn default_true() -> bool {
	true
}

impl Default for NavigationOptions {
	fn default() -> Self {
		Self {
			replace_state: None,
			invisible: false,
			dispatch: true,
			scroll_x: None,
			scroll_y: None,
			ignore_same_route: false,
		}
	}
}

impl NavigationOptions {
	/// Creates default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Forces replacing (`true`) or pushing (`false`) a history entry.
	pub fn with_replace_state(mut self, replace: bool) -> Self {
		self.replace_state = Some(replace);
		self
	}

	/// Skips the history mutation.
	pub fn with_invisible(mut self, invisible: bool) -> Self {
		self.invisible = invisible;
		self
	}

	/// Enables or disables lifecycle hooks.
	pub fn with_dispatch(mut self, dispatch: bool) -> Self {
		self.dispatch = dispatch;
		self
	}

	/// Sets the scroll target.
	pub fn with_scroll(mut self, x: f64, y: f64) -> Self {
		self.scroll_x = Some(x);
		self.scroll_y = Some(y);
		self
	}

	/// Makes navigating to the current match a no-op.
	pub fn with_ignore_same_route(mut self, ignore: bool) -> Self {
		self.ignore_same_route = ignore;
		self
	}
}

/// Options for [`Router::start_with`](crate::Router::start_with).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartOptions {
	/// Href to navigate to when no route matches the current location.
	pub fallback: Option<String>,
}

impl StartOptions {
	/// Creates default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the fallback href.
	pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
		self.fallback = Some(fallback.into());
		self
	}
}
