//! Shared harness for router integration tests.
//!
//! Routers run on a `LocalPool` over a `MemoryPlatform`. Hooks record what
//! they saw in a [`Log`]; [`gate`] hands out hook results the test settles by
//! hand, which makes supersession deterministic.

#![allow(dead_code)]

use futures::channel::oneshot;
use futures::executor::LocalPool;
use std::cell::RefCell;
use std::rc::Rc;
use wayfinder_history::MemoryPlatform;
use wayfinder_navigation::{Navigation, NavigationError, Router};
use wayfinder_routes::{Completion, HookError, Hooks};

/// Router, platform and executor under test.
pub struct Harness {
	pub pool: LocalPool,
	pub platform: MemoryPlatform,
	pub router: Router,
	pub log: Log,
}

impl Harness {
	/// A router whose location starts at the site root.
	pub fn new() -> Self {
		Self::at("http://localhost/")
	}

	/// A router whose location starts at `url`.
	pub fn at(url: &str) -> Self {
		let pool = LocalPool::new();
		let platform = MemoryPlatform::new(url).unwrap();
		let router = Router::new(platform.clone(), pool.spawner());
		Self {
			pool,
			platform,
			router,
			log: Log::default(),
		}
	}

	/// Drives the executor until `navigation` settles.
	pub fn run(&mut self, navigation: Navigation) -> Result<(), NavigationError> {
		self.pool.run_until(navigation)
	}

	/// Drives the executor until every task is blocked.
	pub fn settle(&mut self) {
		self.pool.run_until_stalled();
	}

	/// Template of the current match's route.
	pub fn current_template(&self) -> Option<String> {
		self.router
			.current()
			.map(|current| current.route().template().to_string())
	}

	/// URLs of every history entry, oldest first.
	pub fn history_urls(&self) -> Vec<String> {
		self.platform
			.entries()
			.into_iter()
			.map(|entry| entry.url)
			.collect()
	}
}

/// Ordered record of hook calls.
#[derive(Debug, Clone, Default)]
pub struct Log(Rc<RefCell<Vec<String>>>);

impl Log {
	pub fn push(&self, entry: impl Into<String>) {
		self.0.borrow_mut().push(entry.into());
	}

	/// Returns and clears the recorded entries.
	pub fn take(&self) -> Vec<String> {
		std::mem::take(&mut *self.0.borrow_mut())
	}

	pub fn entries(&self) -> Vec<String> {
		self.0.borrow().clone()
	}
}

/// Hooks that log `"<hook> <label>"` for `leave`, `beforeenter` and `enter`.
///
/// The label is the match's `id` parameter when present, `name` otherwise.
pub fn tracked(log: &Log, name: &'static str) -> Hooks {
	let (leave, before_enter, enter) = (log.clone(), log.clone(), log.clone());
	Hooks::new()
		.leave(move |route, _next| {
			leave.push(format!("leave {}", route.param("id").unwrap_or(name)));
		})
		.before_enter(move |route, _previous| {
			before_enter.push(format!("beforeenter {}", route.param("id").unwrap_or(name)));
		})
		.enter(move |route, _previous| {
			enter.push(format!("enter {}", route.param("id").unwrap_or(name)));
		})
}

/// Hook result that stays pending until its [`Release`] is used.
#[derive(Clone)]
pub struct Gate(Rc<RefCell<Option<oneshot::Receiver<Result<(), HookError>>>>>);

/// Settles the paired [`Gate`].
pub struct Release(oneshot::Sender<Result<(), HookError>>);

pub fn gate() -> (Gate, Release) {
	let (sender, receiver) = oneshot::channel();
	(Gate(Rc::new(RefCell::new(Some(receiver)))), Release(sender))
}

impl Gate {
	/// The first call waits for the release; later calls complete at once.
	pub fn completion(&self) -> Completion {
		let receiver = self.0.borrow_mut().take();
		Completion::from_future(async move {
			match receiver {
				Some(receiver) => receiver.await.unwrap_or(Ok(())),
				None => Ok(()),
			}
		})
	}
}

impl Release {
	pub fn open(self) {
		let _ = self.0.send(Ok(()));
	}

	pub fn fail(self, message: &str) {
		let _ = self.0.send(Err(HookError::new(message.to_string())));
	}
}
