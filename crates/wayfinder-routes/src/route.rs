//! Registered routes.

use crate::error::RouteError;
use crate::lifecycle::{HandlerOptions, Handlers, Hook};
use crate::pattern::{RoutePattern, decode_segment};
use crate::query::parse_query;
use crate::route_match::RouteMatch;
use std::rc::Rc;
use url::Url;

/// A compiled route template and its lifecycle hooks.
///
/// Routes are immutable once registered. Route identity (pointer equality of
/// the owning `Rc`) is what "same route" means during transitions.
pub struct Route {
	/// The compiled template.
	pattern: RoutePattern,
	/// Hook slots.
	handlers: Handlers,
}

impl std::fmt::Debug for Route {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Route")
			.field("pattern", &self.pattern.template())
			.field("handlers", &self.handlers)
			.finish()
	}
}

impl Route {
	/// Compiles a route.
	///
	/// # Errors
	///
	/// Returns [`RouteError`] if the template is invalid.
	pub fn new(template: &str, options: impl Into<HandlerOptions>) -> Result<Self, RouteError> {
		Ok(Self {
			pattern: RoutePattern::new(template)?,
			handlers: Handlers::from(options.into()),
		})
	}

	/// Returns the compiled template.
	pub fn pattern(&self) -> &RoutePattern {
		&self.pattern
	}

	/// Returns the template as registered.
	pub fn template(&self) -> &str {
		self.pattern.template()
	}

	/// Returns the hook slots.
	pub fn handlers(&self) -> &Handlers {
		&self.handlers
	}

	/// Returns whether an `update` hook was supplied.
	pub fn is_updateable(&self) -> bool {
		self.handlers.has(Hook::Update)
	}

	/// Checks whether the URL's path matches, skipping query and hash decoding.
	pub fn quick_match(&self, url: &Url) -> bool {
		self.pattern.is_match(url)
	}

	/// Matches the URL and builds a [`RouteMatch`].
	///
	/// The returned match is never marked initial; the registry owns that latch.
	pub fn exec(self: &Rc<Self>, url: &Url) -> Option<RouteMatch> {
		let params = self.pattern.captures(url)?;

		Some(RouteMatch {
			pathname: decode_segment(url.path()).into_owned(),
			hash: url
				.fragment()
				.map(|fragment| decode_segment(fragment).into_owned())
				.unwrap_or_default(),
			params,
			query: url.query().map(parse_query).unwrap_or_default(),
			scroll_x: 0.0,
			scroll_y: 0.0,
			is_initial: false,
			route: Rc::clone(self),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::href::parse_href;
	use crate::lifecycle::Hooks;
	use crate::query::QueryValue;
	use rstest::rstest;

	#[rstest]
	fn test_exec_extracts_every_component() {
		// Arrange
		let route = Rc::new(Route::new("/users/:id", Hooks::new()).unwrap());
		let url = parse_href("/users/a%20b?tab=posts&tab=likes#top%20section").unwrap();

		// Act
		let route_match = route.exec(&url).unwrap();

		// Assert
		assert_eq!(route_match.pathname, "/users/a b");
		assert_eq!(route_match.hash, "top section");
		assert_eq!(route_match.param("id"), Some("a b"));
		assert_eq!(
			route_match.query.get("tab"),
			Some(&QueryValue::Multiple(vec![
				"posts".to_string(),
				"likes".to_string()
			]))
		);
		assert!(!route_match.is_initial);
		assert!(Rc::ptr_eq(route_match.route(), &route));
	}

	#[rstest]
	fn test_exec_without_query_or_hash() {
		let route = Rc::new(Route::new("/", Hooks::new()).unwrap());

		let route_match = route.exec(&parse_href("/").unwrap()).unwrap();

		assert!(route_match.query.is_empty());
		assert_eq!(route_match.hash, "");
		assert!(route_match.params.is_empty());
	}

	#[rstest]
	fn test_quick_match_ignores_query() {
		let route = Route::new("/search", Hooks::new()).unwrap();

		assert!(route.quick_match(&parse_href("/search?q=%FF").unwrap()));
		assert!(!route.quick_match(&parse_href("/other").unwrap()));
	}

	#[rstest]
	fn test_updateable_follows_update_hook() {
		let plain = Route::new("/a", Hooks::new()).unwrap();
		let updateable = Route::new("/a", Hooks::new().update(|_, _| ())).unwrap();

		assert!(!plain.is_updateable());
		assert!(updateable.is_updateable());
	}
}
