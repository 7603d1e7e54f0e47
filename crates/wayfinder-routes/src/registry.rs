//! Ordered route registry.

use crate::error::RouteError;
use crate::lifecycle::HandlerOptions;
use crate::route::Route;
use crate::route_match::RouteMatch;
use std::cell::Cell;
use std::rc::Rc;
use url::Url;

/// Routes in registration order. The first matching route wins.
#[derive(Debug)]
pub struct RouteRegistry {
	/// Registered routes.
	routes: Vec<Rc<Route>>,
	/// Latched to `false` once the first match has been produced.
	initial: Cell<bool>,
}

impl Default for RouteRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl RouteRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self {
			routes: Vec::new(),
			initial: Cell::new(true),
		}
	}

	/// Compiles and appends a route.
	pub fn register(
		&mut self,
		template: &str,
		options: impl Into<HandlerOptions>,
	) -> Result<Rc<Route>, RouteError> {
		let route = Rc::new(Route::new(template, options)?);
		tracing::debug!(template, index = self.routes.len(), "registered route");
		self.routes.push(Rc::clone(&route));
		Ok(route)
	}

	/// Returns the first route matching `url`, with its match.
	///
	/// Only the very first match produced by a registry is marked initial.
	pub fn find_match(&self, url: &Url) -> Option<RouteMatch> {
		self.routes.iter().find_map(|route| route.exec(url)).map(|mut route_match| {
			route_match.is_initial = self.initial.replace(false);
			route_match
		})
	}

	/// Checks whether any route matches `url`.
	pub fn any_matches(&self, url: &Url) -> bool {
		self.routes.iter().any(|route| route.quick_match(url))
	}

	/// Returns the registered routes in order.
	pub fn routes(&self) -> &[Rc<Route>] {
		&self.routes
	}

	/// Returns the number of registered routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Returns whether no routes are registered.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}
