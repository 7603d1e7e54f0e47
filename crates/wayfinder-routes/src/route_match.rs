//! The result of matching a URL against a route.

use crate::query::{Query, QueryValue};
use crate::route::Route;
use std::collections::HashMap;
use std::rc::Rc;
use url::Url;

/// A URL matched against a route, with its decoded components.
#[derive(Clone)]
pub struct RouteMatch {
	/// Decoded path, including the leading `/`.
	pub pathname: String,
	/// Decoded fragment without the `#`, or empty.
	pub hash: String,
	/// Named parameters, plus the wildcard capture under its name.
	pub params: HashMap<String, String>,
	/// Decoded query string.
	pub query: Query,
	/// Horizontal scroll offset associated with this navigation.
	pub scroll_x: f64,
	/// Vertical scroll offset associated with this navigation.
	pub scroll_y: f64,
	/// Whether this is the first match produced by the registry.
	pub is_initial: bool,
	/// The route that produced this match.
	pub(crate) route: Rc<Route>,
}

impl std::fmt::Debug for RouteMatch {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouteMatch")
			.field("route", &self.route.template())
			.field("pathname", &self.pathname)
			.field("hash", &self.hash)
			.field("params", &self.params)
			.field("query", &self.query)
			.field("scroll_x", &self.scroll_x)
			.field("scroll_y", &self.scroll_y)
			.field("is_initial", &self.is_initial)
			.finish()
	}
}

impl RouteMatch {
	/// Returns the route that produced this match.
	pub fn route(&self) -> &Rc<Route> {
		&self.route
	}

	/// Returns a named parameter.
	pub fn param(&self, name: &str) -> Option<&str> {
		self.params.get(name).map(String::as_str)
	}

	/// Returns a query parameter that appeared exactly once.
	pub fn query_single(&self, name: &str) -> Option<&str> {
		self.query.get(name).and_then(QueryValue::as_single)
	}

	/// Checks whether `url` would match this match's route.
	pub fn matches(&self, url: &Url) -> bool {
		self.route.quick_match(url)
	}

	/// Same route, equal params and equal query.
	pub fn is_same_route(&self, other: &RouteMatch) -> bool {
		Rc::ptr_eq(&self.route, &other.route)
			&& self.params == other.params
			&& self.query == other.query
	}

	/// Returns a copy carrying the given scroll offsets.
	pub fn with_scroll(mut self, scroll_x: f64, scroll_y: f64) -> Self {
		self.scroll_x = scroll_x;
		self.scroll_y = scroll_y;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::href::parse_href;
	use crate::lifecycle::Hooks;
	use rstest::{fixture, rstest};

	#[fixture]
	fn item_route() -> Rc<Route> {
		Rc::new(Route::new("/items/:id", Hooks::new()).unwrap())
	}

	fn exec(route: &Rc<Route>, href: &str) -> RouteMatch {
		route.exec(&parse_href(href).unwrap()).unwrap()
	}

	#[rstest]
	fn test_same_route_requires_equal_params_and_query(item_route: Rc<Route>) {
		let a = exec(&item_route, "/items/1?sort=asc");

		assert!(a.is_same_route(&exec(&item_route, "/items/1?sort=asc")));
		assert!(a.is_same_route(&exec(&item_route, "/items/1?sort=asc#ignored")));
		assert!(!a.is_same_route(&exec(&item_route, "/items/2?sort=asc")));
		assert!(!a.is_same_route(&exec(&item_route, "/items/1?sort=desc")));
	}

	#[rstest]
	fn test_same_route_requires_route_identity(item_route: Rc<Route>) {
		let twin = Rc::new(Route::new("/items/:id", Hooks::new()).unwrap());

		let a = exec(&item_route, "/items/1");
		let b = exec(&twin, "/items/1");

		assert!(!a.is_same_route(&b));
	}

	#[rstest]
	fn test_matches_uses_own_route(item_route: Rc<Route>) {
		let a = exec(&item_route, "/items/1");

		assert!(a.matches(&parse_href("/items/99").unwrap()));
		assert!(!a.matches(&parse_href("/other").unwrap()));
	}

	#[rstest]
	fn test_with_scroll_stamps_offsets(item_route: Rc<Route>) {
		let a = exec(&item_route, "/items/1").with_scroll(10.0, 250.5);

		assert_eq!(a.scroll_x, 10.0);
		assert_eq!(a.scroll_y, 250.5);
	}
}
