//! In-memory session history.
//!
//! [`MemoryPlatform`] behaves like a browser tab without a page: a list of
//! entries with a cursor, a settable scroll position and synchronous pop
//! events. Native hosts and tests drive navigation with [`MemoryPlatform::back`],
//! [`MemoryPlatform::forward`] and [`MemoryPlatform::go`].

use crate::entry::{EntryState, ScrollPosition};
use crate::error::HistoryError;
use crate::platform::{Platform, PopStateListener};
use std::cell::RefCell;
use std::rc::Rc;
use url::Url;

/// One session history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEntry {
	/// Absolute URL of the entry.
	pub url: String,
	/// State attached by `push_state`/`replace_state`, if any.
	pub state: Option<EntryState>,
}

struct Session {
	entries: Vec<MemoryEntry>,
	cursor: usize,
	scroll: ScrollPosition,
	listeners: Vec<PopStateListener>,
}

impl Session {
	fn current(&self) -> &MemoryEntry {
		&self.entries[self.cursor]
	}

	fn resolve(&self, url: &str) -> Result<String, HistoryError> {
		let invalid = |source| HistoryError::InvalidUrl {
			url: url.to_string(),
			source,
		};
		let base = Url::parse(&self.current().url).map_err(invalid)?;
		Ok(base.join(url).map_err(invalid)?.to_string())
	}
}

/// Shared handle to an in-memory session history.
///
/// Clones observe and drive the same history.
#[derive(Clone)]
pub struct MemoryPlatform {
	session: Rc<RefCell<Session>>,
}

impl std::fmt::Debug for MemoryPlatform {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let session = self.session.borrow();
		f.debug_struct("MemoryPlatform")
			.field("entries", &session.entries)
			.field("cursor", &session.cursor)
			.field("scroll", &session.scroll)
			.field("listeners", &session.listeners.len())
			.finish()
	}
}

impl MemoryPlatform {
	/// Creates a history holding a single stateless entry at `initial_url`.
	///
	/// # Errors
	///
	/// Returns [`HistoryError::InvalidUrl`] if `initial_url` is not absolute.
	pub fn new(initial_url: &str) -> Result<Self, HistoryError> {
		let url = Url::parse(initial_url).map_err(|source| HistoryError::InvalidUrl {
			url: initial_url.to_string(),
			source,
		})?;

		Ok(Self {
			session: Rc::new(RefCell::new(Session {
				entries: vec![MemoryEntry {
					url: url.to_string(),
					state: None,
				}],
				cursor: 0,
				scroll: ScrollPosition::default(),
				listeners: Vec::new(),
			})),
		})
	}

	/// Sets the viewport scroll offsets.
	pub fn set_scroll(&self, x: f64, y: f64) {
		self.session.borrow_mut().scroll = ScrollPosition::new(x, y);
	}

	/// Returns every entry, oldest first.
	pub fn entries(&self) -> Vec<MemoryEntry> {
		self.session.borrow().entries.clone()
	}

	/// Returns the entry under the cursor.
	pub fn current_entry(&self) -> MemoryEntry {
		self.session.borrow().current().clone()
	}

	/// Returns the cursor position.
	pub fn index(&self) -> usize {
		self.session.borrow().cursor
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.session.borrow().entries.len()
	}

	/// Always `false`; a session has at least one entry.
	pub fn is_empty(&self) -> bool {
		self.session.borrow().entries.is_empty()
	}

	/// Moves one entry back. Returns `false` at the start of the history.
	pub fn back(&self) -> bool {
		self.go(-1)
	}

	/// Moves one entry forward. Returns `false` at the end of the history.
	pub fn forward(&self) -> bool {
		self.go(1)
	}

	/// Moves the cursor by `delta` and dispatches a pop event.
	///
	/// Listeners run synchronously, after the cursor moved. Returns `false`
	/// without dispatching when `delta` is zero or leaves the history.
	pub fn go(&self, delta: isize) -> bool {
		let (state, listeners) = {
			let mut session = self.session.borrow_mut();
			let Some(target) = session
				.cursor
				.checked_add_signed(delta)
				.filter(|target| delta != 0 && *target < session.entries.len())
			else {
				return false;
			};
			session.cursor = target;
			tracing::trace!(index = target, url = %session.current().url, "memory history moved");
			(session.current().state, session.listeners.clone())
		};

		for listener in listeners {
			listener(state);
		}
		true
	}
}

impl Platform for MemoryPlatform {
	fn location_href(&self) -> Result<String, HistoryError> {
		Ok(self.session.borrow().current().url.clone())
	}

	fn push_state(&self, state: &EntryState, url: &str) -> Result<(), HistoryError> {
		let mut session = self.session.borrow_mut();
		let url = session.resolve(url)?;
		let cursor = session.cursor + 1;
		session.entries.truncate(cursor);
		session.entries.push(MemoryEntry {
			url,
			state: Some(*state),
		});
		session.cursor = cursor;
		Ok(())
	}

	fn replace_state(&self, state: &EntryState, url: &str) -> Result<(), HistoryError> {
		let mut session = self.session.borrow_mut();
		let url = session.resolve(url)?;
		let cursor = session.cursor;
		session.entries[cursor] = MemoryEntry {
			url,
			state: Some(*state),
		};
		Ok(())
	}

	fn scroll_position(&self) -> ScrollPosition {
		self.session.borrow().scroll
	}

	fn subscribe_popstate(&self, listener: PopStateListener) -> Result<(), HistoryError> {
		self.session.borrow_mut().listeners.push(listener);
		Ok(())
	}
}
