//! Error types for host history operations.

/// Failure of a host history or location operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
	/// The host exposes no history or location object.
	#[error("history API unavailable: {0}")]
	Unavailable(String),

	/// The host rejected a history or location call.
	#[error("history operation failed: {0}")]
	Operation(String),

	/// A URL handed to the history could not be resolved.
	#[error("invalid history URL '{url}': {source}")]
	InvalidUrl {
		/// The URL as supplied.
		url: String,
		/// Parser failure.
		#[source]
		source: url::ParseError,
	},

	/// An entry state payload could not be encoded or decoded.
	#[error("invalid history state: {0}")]
	State(String),
}

impl From<serde_json::Error> for HistoryError {
	fn from(error: serde_json::Error) -> Self {
		Self::State(error.to_string())
	}
}
