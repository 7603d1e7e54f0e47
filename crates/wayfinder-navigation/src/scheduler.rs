//! The transition engine behind [`Router`](crate::Router).
//!
//! At most one transition runs at a time. Intents submitted while one runs
//! are coalesced into a single pending slot, newest wins. When the running
//! transition settles the engine checks that slot once: if it holds an
//! intent, that intent runs next and inherits the waiters of every intent it
//! superseded, so earlier callers observe the latest navigation's outcome.
//!
//! ```text
//!            submit                    hooks start
//!   Idle ───────────────▶ Resolving ───────────────▶ Running
//!    ▲                        ▲                          │
//!    │   no pending intent    │    pending intent        │
//!    └────────────────────────┴──────────────────────────┘
//! ```

use crate::config::RouterConfig;
use crate::error::NavigationError;
use crate::intent::Intent;
use futures::TryFutureExt;
use futures::future::{self, Either};
use futures::task::{LocalSpawn, LocalSpawnExt};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use wayfinder_history::{EntryState, Platform, ScrollHistory, ScrollPosition};
use wayfinder_routes::{DEFAULT_BASE, Hook, RouteMatch, RouteRegistry, resolve_href};

/// Scheduler state, observable through [`Router::phase`](crate::Router::phase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
	/// Waiting for the next intent.
	#[default]
	Idle,
	/// Matching the target and choosing a strategy.
	Resolving,
	/// Lifecycle hooks are in flight.
	Running,
}

pub(crate) struct EngineState {
	pub(crate) phase: Phase,
	pub(crate) current: Option<Rc<RouteMatch>>,
	pub(crate) pending: Option<Intent>,
	pub(crate) scroll: ScrollHistory,
	/// Bumped by every handled pop event.
	pub(crate) history_epoch: u64,
}

pub(crate) struct RouterInner {
	pub(crate) config: RouterConfig,
	pub(crate) platform: Rc<dyn Platform>,
	pub(crate) spawner: Rc<dyn LocalSpawn>,
	pub(crate) registry: RefCell<RouteRegistry>,
	pub(crate) state: RefCell<EngineState>,
}

impl RouterInner {
	pub(crate) fn new(
		platform: Rc<dyn Platform>,
		spawner: Rc<dyn LocalSpawn>,
		config: RouterConfig,
	) -> Self {
		Self {
			config,
			platform,
			spawner,
			registry: RefCell::new(RouteRegistry::new()),
			state: RefCell::new(EngineState {
				phase: Phase::Idle,
				current: None,
				pending: None,
				scroll: ScrollHistory::new(),
				history_epoch: 0,
			}),
		}
	}

	/// The current location, or the default base when the host has none.
	pub(crate) fn location(&self) -> String {
		match self.platform.location_href() {
			Ok(href) => href,
			Err(error) => {
				tracing::warn!(%error, "location unavailable, using default base");
				DEFAULT_BASE.to_string()
			}
		}
	}

	/// Hands an intent to the engine.
	pub(crate) fn submit(self: &Rc<Self>, mut intent: Intent) {
		let mut state = self.state.borrow_mut();
		if state.phase != Phase::Idle {
			if let Some(displaced) = state.pending.take() {
				tracing::trace!(
					displaced = %displaced.href,
					href = %intent.href,
					"superseding pending navigation"
				);
				intent.absorb(displaced);
			} else {
				tracing::trace!(href = %intent.href, "navigation queued behind running transition");
			}
			state.pending = Some(intent);
			return;
		}
		state.phase = Phase::Resolving;
		drop(state);

		// Left in place if the executor never polls the driver
		let slot = Rc::new(Cell::new(Some(intent)));
		let driver = Rc::clone(self).drive(Rc::clone(&slot));
		if let Err(error) = self.spawner.spawn_local(driver) {
			tracing::warn!(%error, "failed to spawn navigation driver");
			self.state.borrow_mut().phase = Phase::Idle;
			if let Some(intent) = slot.take() {
				intent.settle(Err(NavigationError::Spawn(error.to_string())));
			}
		}
	}

	/// Runs transitions until no intent is pending.
	async fn drive(self: Rc<Self>, slot: Rc<Cell<Option<Intent>>>) {
		let Some(mut intent) = slot.take() else {
			self.state.borrow_mut().phase = Phase::Idle;
			return;
		};

		loop {
			let outcome = self.transition(&intent).await;

			let next = {
				let mut state = self.state.borrow_mut();
				let next = state.pending.take();
				state.phase = if next.is_some() {
					Phase::Resolving
				} else {
					Phase::Idle
				};
				next
			};

			let Some(mut next) = next else {
				intent.settle(outcome);
				return;
			};

			match outcome {
				Ok(()) => {
					tracing::trace!(from = %intent.href, to = %next.href, "chaining onto newer navigation");
					next.absorb(intent);
				}
				Err(error) => intent.settle(Err(error)),
			}
			intent = next;
		}
	}

	async fn transition(&self, intent: &Intent) -> Result<(), NavigationError> {
		let href = intent.href.as_str();
		let epoch = self.state.borrow().history_epoch;
		let url = resolve_href(&self.location(), href)?;

		let Some(found) = self.registry.borrow().find_match(&url) else {
			tracing::debug!(href, "no route matches, nothing to do");
			return Ok(());
		};

		let previous = self.state.borrow().current.clone();
		let same = previous
			.as_deref()
			.is_some_and(|current| current.is_same_route(&found));
		if same && intent.options.ignore_same_route {
			tracing::debug!(href, "already on this route, ignoring");
			return Ok(());
		}
		let replace = intent.options.replace_state.unwrap_or(same);

		let target = ScrollPosition::new(
			intent.options.scroll_x.unwrap_or_default(),
			intent.options.scroll_y.unwrap_or_default(),
		);
		let next = Rc::new(found.with_scroll(target.x, target.y));

		let outgoing = match intent.outgoing_scroll {
			Some(outgoing) => outgoing,
			None => {
				let outgoing = self.platform.scroll_position();
				let mut state = self.state.borrow_mut();
				let uid = state.scroll.current_id();
				state.scroll.capture(uid, outgoing);
				outgoing
			}
		};
		let previous = previous
			.map(|current| Rc::new(RouteMatch::clone(&current).with_scroll(outgoing.x, outgoing.y)));

		self.state.borrow_mut().phase = Phase::Running;
		tracing::debug!(
			href,
			route = next.route().template(),
			replace,
			popstate = intent.popstate,
			"starting transition"
		);

		if intent.options.dispatch {
			run_hooks(href, Rc::clone(&next), previous).await?;
		} else {
			tracing::debug!(href, "dispatch disabled, skipping hooks");
		}

		self.state.borrow_mut().current = Some(next);

		if intent.popstate || intent.options.invisible {
			return Ok(());
		}
		// A pop event while hooks ran leaves the routing to its queued intent
		if self.state.borrow().history_epoch != epoch {
			tracing::debug!(href, "history moved during transition, not writing an entry");
			return Ok(());
		}
		self.commit_history(url.as_str(), replace, target)
	}

	fn commit_history(
		&self,
		url: &str,
		replace: bool,
		target: ScrollPosition,
	) -> Result<(), NavigationError> {
		let uid = {
			let mut state = self.state.borrow_mut();
			if replace {
				state.scroll.current_id()
			} else {
				state.scroll.allocate()
			}
		};

		let entry = EntryState::new(uid);
		let written = if replace {
			self.platform.replace_state(&entry, url)
		} else {
			self.platform.push_state(&entry, url)
		};
		if let Err(error) = written {
			tracing::warn!(%error, url, replace, "failed to write history entry");
			return Err(error.into());
		}

		let mut state = self.state.borrow_mut();
		state.scroll.set_current(uid);
		state.scroll.capture(uid, target);
		tracing::debug!(url, uid, replace, "committed history entry");
		Ok(())
	}

	/// Handles a back/forward navigation.
	pub(crate) fn on_popstate(self: &Rc<Self>, entry: Option<EntryState>) {
		let Some(entry) = entry else {
			tracing::trace!("ignoring pop event for an entry the router did not create");
			return;
		};
		let href = match self.platform.location_href() {
			Ok(href) => href,
			Err(error) => {
				tracing::warn!(%error, uid = entry.uid, "cannot read location after pop event");
				return;
			}
		};

		let outgoing = self.platform.scroll_position();
		let recalled = {
			let mut state = self.state.borrow_mut();
			let uid = state.scroll.current_id();
			state.scroll.capture(uid, outgoing);
			state.scroll.set_current(entry.uid);
			state.history_epoch += 1;
			state.scroll.recall(entry.uid)
		};
		let target = recalled.unwrap_or_else(|| {
			tracing::warn!(uid = entry.uid, "no scroll position recorded for history entry");
			ScrollPosition::default()
		});

		self.submit(Intent::popstate(href, target, outgoing));
	}
}

/// Runs the hooks for one transition.
///
/// Within one route an updateable route only runs `update`. Otherwise
/// `leave` and `beforeenter` run concurrently and `enter` runs once both
/// succeeded. The first failure wins.
async fn run_hooks(
	href: &str,
	next: Rc<RouteMatch>,
	previous: Option<Rc<RouteMatch>>,
) -> Result<(), NavigationError> {
	let route = Rc::clone(next.route());

	if let Some(previous) = &previous
		&& Rc::ptr_eq(previous.route(), &route)
		&& route.is_updateable()
	{
		tracing::debug!(href, "updating route in place");
		return invoke(Hook::Update, href, next, Some(Rc::clone(previous))).await;
	}

	let leave = match &previous {
		Some(current) => Either::Left(invoke(
			Hook::Leave,
			href,
			Rc::clone(current),
			Some(Rc::clone(&next)),
		)),
		None => Either::Right(future::ok(())),
	};
	let before_enter = invoke(Hook::BeforeEnter, href, Rc::clone(&next), previous.clone());
	future::try_join(leave, before_enter).await?;

	invoke(Hook::Enter, href, next, previous).await
}

/// Invokes one hook on the route owning `route_match`.
fn invoke(
	hook: Hook,
	href: &str,
	route_match: Rc<RouteMatch>,
	other: Option<Rc<RouteMatch>>,
) -> impl Future<Output = Result<(), NavigationError>> + 'static {
	let href = href.to_string();
	let completion = Rc::clone(route_match.route())
		.handlers()
		.invoke(hook, route_match, other);
	completion.map_err(move |source| NavigationError::Hook { hook, href, source })
}
