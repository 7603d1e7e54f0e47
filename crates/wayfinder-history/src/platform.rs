//! The host platform contract.

use crate::entry::{EntryState, ScrollPosition};
use crate::error::HistoryError;
use std::rc::Rc;

/// Receives the state of the entry a pop event moved to.
///
/// `None` means the entry was not created by the router.
pub type PopStateListener = Rc<dyn Fn(Option<EntryState>)>;

/// Session history, location and scroll access provided by the host.
pub trait Platform {
	/// Returns the full URL of the current location.
	fn location_href(&self) -> Result<String, HistoryError>;

	/// Pushes a new entry carrying `state` at `url`.
	fn push_state(&self, state: &EntryState, url: &str) -> Result<(), HistoryError>;

	/// Replaces the current entry's state and URL.
	fn replace_state(&self, state: &EntryState, url: &str) -> Result<(), HistoryError>;

	/// Returns the current viewport scroll offsets.
	fn scroll_position(&self) -> ScrollPosition;

	/// Registers a listener for back/forward navigation.
	///
	/// Listeners stay registered for the lifetime of the platform.
	fn subscribe_popstate(&self, listener: PopStateListener) -> Result<(), HistoryError>;
}
