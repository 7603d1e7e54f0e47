//! Payloads attached to history entries.

use serde::{Deserialize, Serialize};

/// Opaque state attached to every history entry the router creates.
///
/// The platform hands it back unchanged with the pop event for that entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryState {
	/// Entry identifier allocated by the router.
	pub uid: u64,
}

impl EntryState {
	/// Creates state for the given entry identifier.
	pub fn new(uid: u64) -> Self {
		Self { uid }
	}
}

/// Viewport scroll offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollPosition {
	/// Horizontal offset.
	pub x: f64,
	/// Vertical offset.
	pub y: f64,
}

impl ScrollPosition {
	/// Creates a scroll position.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_entry_state_wire_format() {
		// Arrange
		let state = EntryState::new(7);

		// Act
		let json = serde_json::to_string(&state).unwrap();
		let decoded: EntryState = serde_json::from_str(&json).unwrap();

		// Assert
		assert_eq!(json, r#"{"uid":7}"#);
		assert_eq!(decoded, state);
	}

	#[rstest]
	fn test_foreign_state_is_rejected() {
		let decoded = serde_json::from_str::<EntryState>(r#"{"page":3}"#);

		assert!(decoded.is_err());
	}
}
