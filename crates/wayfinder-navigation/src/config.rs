//! Router configuration.

use serde::{Deserialize, Serialize};

/// Router-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
	/// Path prefix a link must start with to be intercepted. Empty means any.
	pub base: String,
}

impl RouterConfig {
	/// Creates the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the interception base path.
	pub fn with_base(mut self, base: impl Into<String>) -> Self {
		self.base = base.into();
		self
	}

	/// Checks whether `path` falls under the base path.
	pub fn covers(&self, path: &str) -> bool {
		path.starts_with(&self.base)
	}
}
