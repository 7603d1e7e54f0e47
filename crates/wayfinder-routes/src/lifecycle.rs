//! Lifecycle hooks.
//!
//! Every route carries four hook slots: `beforeenter`, `enter`, `leave` and
//! `update`. Each hook receives the match it concerns and the other side of
//! the transition:
//!
//! | Hook | First argument | Second argument |
//! |------|----------------|-----------------|
//! | `beforeenter` | match being entered | match being left, if any |
//! | `enter` | match being entered | match being left, if any |
//! | `leave` | match being left | match being entered |
//! | `update` | new match | previous match on the same route |
//!
//! Hooks may return `()`, a `Result`, or a [`Completion`] wrapping a future.
//! The invoker normalizes all of them into a [`Completion`], and an empty
//! slot behaves as a hook that succeeds immediately.
//!
//! ## Example
//!
//! ```
//! use wayfinder_routes::{Completion, Hooks};
//!
//! let hooks = Hooks::new()
//! 	.enter(|route, _previous| {
//! 		println!("entered {}", route.pathname);
//! 	})
//! 	.leave(|_route, _next| Completion::from_future(async { Ok::<(), anyhow::Error>(()) }));
//! # let _ = hooks;
//! ```

use crate::error::HookError;
use crate::route_match::RouteMatch;
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

/// Names of the hook slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
	/// Runs alongside `leave`, before `enter`.
	BeforeEnter,
	/// Runs once `leave` and `beforeenter` both succeeded.
	Enter,
	/// Runs on the route being left.
	Leave,
	/// Replaces the leave/enter cycle when navigating within one route.
	Update,
}

impl Hook {
	/// Returns the hook's name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::BeforeEnter => "beforeenter",
			Self::Enter => "enter",
			Self::Leave => "leave",
			Self::Update => "update",
		}
	}
}

impl std::fmt::Display for Hook {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Completion handle returned by a hook.
#[must_use = "a completion does nothing unless awaited"]
pub struct Completion(LocalBoxFuture<'static, Result<(), HookError>>);

impl Completion {
	/// A completion that has already settled.
	pub fn ready(result: Result<(), HookError>) -> Self {
		Self(futures::future::ready(result).boxed_local())
	}

	/// A completion that settles when `future` does.
	pub fn from_future<F, E>(future: F) -> Self
	where
		F: Future<Output = Result<(), E>> + 'static,
		E: Into<HookError>,
	{
		Self(future.map(|result| result.map_err(Into::into)).boxed_local())
	}
}

impl Future for Completion {
	type Output = Result<(), HookError>;

	fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		self.0.poll_unpin(cx)
	}
}

impl std::fmt::Debug for Completion {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Completion").finish_non_exhaustive()
	}
}

/// Values a hook may return.
pub trait IntoCompletion {
	/// Converts the value into a completion handle.
	fn into_completion(self) -> Completion;
}

impl IntoCompletion for () {
	fn into_completion(self) -> Completion {
		Completion::ready(Ok(()))
	}
}

impl<E> IntoCompletion for Result<(), E>
where
	E: Into<HookError>,
{
	fn into_completion(self) -> Completion {
		Completion::ready(self.map_err(Into::into))
	}
}

impl IntoCompletion for Completion {
	fn into_completion(self) -> Completion {
		self
	}
}

/// A normalized hook.
pub type Callback = Rc<dyn Fn(Rc<RouteMatch>, Option<Rc<RouteMatch>>) -> Completion>;

fn callback<F, R>(hook: F) -> Callback
where
	F: Fn(Rc<RouteMatch>, Option<Rc<RouteMatch>>) -> R + 'static,
	R: IntoCompletion,
{
	Rc::new(move |route, other| hook(route, other).into_completion())
}

/// Builder for a route's named hooks.
#[derive(Clone, Default)]
pub struct Hooks {
	before_enter: Option<Callback>,
	enter: Option<Callback>,
	leave: Option<Callback>,
	update: Option<Callback>,
}

impl Hooks {
	/// Creates an empty set of hooks.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the `beforeenter` hook.
	pub fn before_enter<F, R>(mut self, hook: F) -> Self
	where
		F: Fn(Rc<RouteMatch>, Option<Rc<RouteMatch>>) -> R + 'static,
		R: IntoCompletion,
	{
		self.before_enter = Some(callback(hook));
		self
	}

	/// Sets the `enter` hook.
	pub fn enter<F, R>(mut self, hook: F) -> Self
	where
		F: Fn(Rc<RouteMatch>, Option<Rc<RouteMatch>>) -> R + 'static,
		R: IntoCompletion,
	{
		self.enter = Some(callback(hook));
		self
	}

	/// Sets the `leave` hook.
	///
	/// The second argument is always present for `leave`.
	pub fn leave<F, R>(mut self, hook: F) -> Self
	where
		F: Fn(Rc<RouteMatch>, Option<Rc<RouteMatch>>) -> R + 'static,
		R: IntoCompletion,
	{
		self.leave = Some(callback(hook));
		self
	}

	/// Sets the `update` hook, which makes the route updateable.
	pub fn update<F, R>(mut self, hook: F) -> Self
	where
		F: Fn(Rc<RouteMatch>, Option<Rc<RouteMatch>>) -> R + 'static,
		R: IntoCompletion,
	{
		self.update = Some(callback(hook));
		self
	}

	fn slot(&self, hook: Hook) -> Option<&Callback> {
		match hook {
			Hook::BeforeEnter => self.before_enter.as_ref(),
			Hook::Enter => self.enter.as_ref(),
			Hook::Leave => self.leave.as_ref(),
			Hook::Update => self.update.as_ref(),
		}
	}
}

impl std::fmt::Debug for Hooks {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Hooks")
			.field("before_enter", &self.before_enter.is_some())
			.field("enter", &self.enter.is_some())
			.field("leave", &self.leave.is_some())
			.field("update", &self.update.is_some())
			.finish()
	}
}

/// Hook configuration accepted at registration.
pub enum HandlerOptions {
	/// Shorthand for a route that only has an `enter` hook.
	Enter(Callback),
	/// Any combination of named hooks.
	Hooks(Hooks),
}

impl HandlerOptions {
	/// Shorthand for a route that only has an `enter` hook.
	pub fn enter<F, R>(hook: F) -> Self
	where
		F: Fn(Rc<RouteMatch>, Option<Rc<RouteMatch>>) -> R + 'static,
		R: IntoCompletion,
	{
		Self::Enter(callback(hook))
	}
}

impl From<Hooks> for HandlerOptions {
	fn from(hooks: Hooks) -> Self {
		Self::Hooks(hooks)
	}
}

/// The hooks of a registered route.
#[derive(Clone, Default)]
pub struct Handlers(Hooks);

impl From<HandlerOptions> for Handlers {
	fn from(options: HandlerOptions) -> Self {
		match options {
			HandlerOptions::Enter(enter) => Self(Hooks {
				enter: Some(enter),
				..Hooks::default()
			}),
			HandlerOptions::Hooks(hooks) => Self(hooks),
		}
	}
}

impl Handlers {
	/// Returns whether a hook was supplied for `hook`.
	pub fn has(&self, hook: Hook) -> bool {
		self.0.slot(hook).is_some()
	}

	/// Invokes a hook. Empty slots complete immediately.
	pub fn invoke(
		&self,
		hook: Hook,
		route: Rc<RouteMatch>,
		other: Option<Rc<RouteMatch>>,
	) -> Completion {
		match self.0.slot(hook) {
			Some(callback) => callback(route, other),
			None => Completion::ready(Ok(())),
		}
	}
}

impl std::fmt::Debug for Handlers {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Handlers").field(&self.0).finish()
	}
}
