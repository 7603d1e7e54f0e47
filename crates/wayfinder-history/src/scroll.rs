//! Scroll offsets keyed by history entry.

use crate::entry::ScrollPosition;
use std::collections::HashMap;

/// Scroll bookkeeping for the history entries created by the router.
///
/// Identifiers increase monotonically. The entry that was current when the
/// router started is identifier `1`.
#[derive(Debug, Clone)]
pub struct ScrollHistory {
	current_id: u64,
	last_id: u64,
	positions: HashMap<u64, ScrollPosition>,
}

impl Default for ScrollHistory {
	fn default() -> Self {
		Self::new()
	}
}

impl ScrollHistory {
	/// Creates an empty store whose current entry is `1`.
	pub fn new() -> Self {
		Self {
			current_id: 1,
			last_id: 1,
			positions: HashMap::new(),
		}
	}

	/// Returns the identifier of the current entry.
	pub fn current_id(&self) -> u64 {
		self.current_id
	}

	/// Allocates a fresh identifier for a pushed entry.
	pub fn allocate(&mut self) -> u64 {
		self.last_id += 1;
		self.last_id
	}

	/// Makes `uid` the current entry.
	///
	/// Later allocations never reuse `uid` or anything below it.
	pub fn set_current(&mut self, uid: u64) {
		self.current_id = uid;
		self.last_id = self.last_id.max(uid);
	}

	/// Records the scroll offsets for an entry, overwriting earlier ones.
	pub fn capture(&mut self, uid: u64, position: ScrollPosition) {
		self.positions.insert(uid, position);
	}

	/// Returns the scroll offsets recorded for an entry.
	pub fn recall(&self, uid: u64) -> Option<ScrollPosition> {
		self.positions.get(&uid).copied()
	}

	/// Returns the number of entries with recorded offsets.
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	/// Returns whether no offsets have been recorded.
	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}
}
