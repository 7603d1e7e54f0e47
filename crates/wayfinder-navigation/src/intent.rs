//! Navigation intents and their completion handles.

use crate::error::NavigationError;
use crate::options::NavigationOptions;
use futures::FutureExt;
use futures::channel::oneshot;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use wayfinder_history::ScrollPosition;

type Outcome = Result<(), NavigationError>;

/// A requested transition.
pub(crate) struct Intent {
	pub(crate) href: String,
	pub(crate) options: NavigationOptions,
	/// Raised by the pop event handler; the history already moved.
	pub(crate) popstate: bool,
	/// Scroll offsets already captured for the entry being left.
	pub(crate) outgoing_scroll: Option<ScrollPosition>,
	waiters: Vec<oneshot::Sender<Outcome>>,
}

impl std::fmt::Debug for Intent {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Intent")
			.field("href", &self.href)
			.field("options", &self.options)
			.field("popstate", &self.popstate)
			.field("waiters", &self.waiters.len())
			.finish()
	}
}

impl Intent {
	/// An intent from application code, with the caller's handle.
	pub(crate) fn new(href: String, options: NavigationOptions) -> (Self, Navigation) {
		let (sender, receiver) = oneshot::channel();
		let intent = Self {
			href,
			options,
			popstate: false,
			outgoing_scroll: None,
			waiters: vec![sender],
		};
		(intent, Navigation { receiver })
	}

	/// An intent raised by a pop event. Nobody waits on it.
	pub(crate) fn popstate(href: String, target: ScrollPosition, outgoing: ScrollPosition) -> Self {
		Self {
			href,
			options: NavigationOptions::new().with_scroll(target.x, target.y),
			popstate: true,
			outgoing_scroll: Some(outgoing),
			waiters: Vec::new(),
		}
	}

	/// Takes over the waiters of an intent this one superseded.
	pub(crate) fn absorb(&mut self, mut superseded: Intent) {
		self.waiters.append(&mut superseded.waiters);
	}

	/// Settles every waiter with `outcome`.
	pub(crate) fn settle(self, outcome: Outcome) {
		for waiter in self.waiters {
			// The caller may have dropped its handle
			let _ = waiter.send(outcome.clone());
		}
	}
}

/// Completion handle returned by [`Router::goto`](crate::Router::goto) and
/// [`Router::start`](crate::Router::start).
///
/// Resolves once the navigation, or the newer navigation that superseded it,
/// has settled. Dropping the handle does not cancel the navigation.
#[derive(Debug)]
pub struct Navigation {
	receiver: oneshot::Receiver<Outcome>,
}

impl Navigation {
	/// A handle that has already settled.
	pub(crate) fn settled(outcome: Outcome) -> Self {
		let (sender, receiver) = oneshot::channel();
		let _ = sender.send(outcome);
		Self { receiver }
	}
}

impl Future for Navigation {
	type Output = Outcome;

	fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		self.receiver
			.poll_unpin(cx)
			.map(|received| received.unwrap_or(Err(NavigationError::Interrupted)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::executor::block_on;
	use rstest::rstest;

	#[rstest]
	fn test_absorbed_waiters_share_outcome() {
		// Arrange
		let (mut newer, second) = Intent::new("/bar".to_string(), NavigationOptions::new());
		let (older, first) = Intent::new("/foo".to_string(), NavigationOptions::new());

		// Act
		newer.absorb(older);
		newer.settle(Ok(()));

		// Assert
		assert!(block_on(first).is_ok());
		assert!(block_on(second).is_ok());
	}

	#[rstest]
	fn test_dropped_intent_interrupts_handle() {
		let (intent, navigation) = Intent::new("/foo".to_string(), NavigationOptions::new());

		drop(intent);

		assert!(matches!(
			block_on(navigation),
			Err(NavigationError::Interrupted)
		));
	}

	#[rstest]
	fn test_popstate_intent_targets_recalled_scroll() {
		let intent = Intent::popstate(
			"http://localhost/foo".to_string(),
			ScrollPosition::new(0.0, 300.0),
			ScrollPosition::new(0.0, 20.0),
		);

		assert!(intent.popstate);
		assert_eq!(intent.options.scroll_y, Some(300.0));
		assert_eq!(intent.outgoing_scroll, Some(ScrollPosition::new(0.0, 20.0)));
	}
}
