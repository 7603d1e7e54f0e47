//! Error types for navigation.

use wayfinder_history::HistoryError;
use wayfinder_routes::{Hook, HookError, RouteError};

/// Outcome of a failed navigation.
///
/// Cloneable so that one outcome can settle every caller waiting on it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NavigationError {
	/// A lifecycle hook failed.
	#[error("{hook} hook failed while navigating to '{href}': {source}")]
	Hook {
		/// The hook that failed.
		hook: Hook,
		/// Target of the navigation.
		href: String,
		/// Failure reported by the hook.
		#[source]
		source: HookError,
	},

	/// The session history rejected the new entry.
	#[error(transparent)]
	History(#[from] HistoryError),

	/// The target href could not be resolved.
	#[error(transparent)]
	InvalidHref(#[from] RouteError),

	/// The executor refused the driver task.
	#[error("failed to spawn navigation driver: {0}")]
	Spawn(String),

	/// The router dropped the navigation before it settled.
	#[error("navigation was interrupted before it settled")]
	Interrupted,
}

impl NavigationError {
	/// Returns the failed hook, if a hook failed.
	pub fn hook(&self) -> Option<Hook> {
		match self {
			Self::Hook { hook, .. } => Some(*hook),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::error::Error as _;

	#[rstest]
	fn test_hook_error_display_and_source() {
		// Arrange
		let error = NavigationError::Hook {
			hook: Hook::BeforeEnter,
			href: "/admin".to_string(),
			source: HookError::new("forbidden"),
		};

		// Act
		let message = error.to_string();

		// Assert
		assert_eq!(
			message,
			"beforeenter hook failed while navigating to '/admin': forbidden"
		);
		assert_eq!(error.hook(), Some(Hook::BeforeEnter));
		assert_eq!(error.source().map(ToString::to_string).as_deref(), Some("forbidden"));
	}

	#[rstest]
	fn test_history_error_is_transparent() {
		let error = NavigationError::from(HistoryError::Operation("quota exceeded".to_string()));

		assert_eq!(error.to_string(), "history operation failed: quota exceeded");
		assert_eq!(error.hook(), None);
	}
}
