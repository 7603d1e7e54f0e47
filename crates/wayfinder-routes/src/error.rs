//! Error types for route registration and lifecycle hooks.

use std::error::Error as StdError;
use std::sync::Arc;

/// Error type for route template compilation and href resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
	/// A wildcard segment appeared before the last segment.
	#[error("wildcard must be the last segment of route template '{template}'")]
	MisplacedWildcard {
		/// The offending template.
		template: String,
	},

	/// A `:` or `*` marker was not followed by a name.
	#[error("route template '{template}' contains a parameter without a name")]
	EmptyParameterName {
		/// The offending template.
		template: String,
	},

	/// The href could not be resolved to an absolute URL.
	#[error("invalid href '{href}': {source}")]
	InvalidHref {
		/// The href as supplied by the caller.
		href: String,
		/// Parser failure.
		#[source]
		source: url::ParseError,
	},
}

/// Failure reported by a lifecycle hook.
///
/// Cloneable so that a single failure can settle every completion handle
/// chained onto the failing navigation.
#[derive(Debug, Clone, thiserror::Error)]
#[error(transparent)]
pub struct HookError(Arc<dyn StdError + Send + Sync + 'static>);

impl HookError {
	/// Wraps an error or message.
	///
	/// # Example
	///
	/// ```
	/// use wayfinder_routes::HookError;
	///
	/// let error = HookError::new("user is not signed in");
	/// assert_eq!(error.to_string(), "user is not signed in");
	/// ```
	pub fn new<E>(error: E) -> Self
	where
		E: Into<Box<dyn StdError + Send + Sync + 'static>>,
	{
		Self(Arc::from(error.into()))
	}
}

impl From<anyhow::Error> for HookError {
	fn from(error: anyhow::Error) -> Self {
		Self::new(error)
	}
}
