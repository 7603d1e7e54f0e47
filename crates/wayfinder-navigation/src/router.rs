//! The public router handle.

use crate::config::RouterConfig;
#[cfg(target_arch = "wasm32")]
use crate::error::NavigationError;
use crate::intent::{Intent, Navigation};
use crate::options::{NavigationOptions, StartOptions};
use crate::scheduler::{Phase, RouterInner};
use futures::task::LocalSpawn;
use std::rc::{Rc, Weak};
use wayfinder_history::{EntryState, Platform};
use wayfinder_routes::{HandlerOptions, RouteError, RouteMatch, resolve_href};

/// Client-side router.
///
/// A cheap-to-clone handle. Transitions run on the [`LocalSpawn`] executor
/// supplied at construction; every navigation entry point returns a
/// [`Navigation`] that resolves once the navigation settles.
///
/// # Example
///
/// ```
/// use futures::executor::LocalPool;
/// use wayfinder_history::{MemoryPlatform, Platform};
/// use wayfinder_navigation::Router;
/// use wayfinder_routes::{HandlerOptions, Hooks};
///
/// let mut pool = LocalPool::new();
/// let platform = MemoryPlatform::new("http://localhost/").unwrap();
/// let router = Router::new(platform.clone(), pool.spawner());
///
/// router
/// 	.add("/", Hooks::new())
/// 	.add("/users/:id", HandlerOptions::enter(|route, _previous| {
/// 		println!("user {}", route.param("id").unwrap_or_default());
/// 	}));
///
/// let navigation = router.goto("/users/42");
/// pool.run_until(navigation).unwrap();
///
/// assert_eq!(router.current().unwrap().param("id"), Some("42"));
/// assert_eq!(platform.location_href().unwrap(), "http://localhost/users/42");
/// ```
#[derive(Clone)]
pub struct Router {
	inner: Rc<RouterInner>,
}

impl std::fmt::Debug for Router {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("config", &self.inner.config)
			.field("routes", &self.route_count())
			.field("phase", &self.phase())
			.field("current_entry_id", &self.current_entry_id())
			.finish()
	}
}

impl Router {
	/// Creates a router with the default configuration.
	pub fn new<P, S>(platform: P, spawner: S) -> Self
	where
		P: Platform + 'static,
		S: LocalSpawn + 'static,
	{
		Self::with_config(platform, spawner, RouterConfig::default())
	}

	/// Creates a router and subscribes it to the platform's pop events.
	pub fn with_config<P, S>(platform: P, spawner: S, config: RouterConfig) -> Self
	where
		P: Platform + 'static,
		S: LocalSpawn + 'static,
	{
		let inner = Rc::new(RouterInner::new(Rc::new(platform), Rc::new(spawner), config));

		let weak: Weak<RouterInner> = Rc::downgrade(&inner);
		let listener = Rc::new(move |entry: Option<EntryState>| {
			if let Some(inner) = weak.upgrade() {
				inner.on_popstate(entry);
			}
		});
		if let Err(error) = inner.platform.subscribe_popstate(listener) {
			tracing::warn!(%error, "back/forward navigation will not be observed");
		}

		Self { inner }
	}

	/// Creates a router bound to the browser window.
	///
	/// # Errors
	///
	/// Returns [`NavigationError::History`] outside a browser window context.
	#[cfg(target_arch = "wasm32")]
	pub fn browser() -> Result<Self, NavigationError> {
		let platform = wayfinder_history::BrowserPlatform::new()?;
		Ok(Self::new(platform, crate::spawn::BrowserSpawner))
	}

	/// Registers a route. Routes are matched in registration order.
	///
	/// # Panics
	///
	/// Panics if the template is invalid.
	/// Use [`Router::try_add`] for fallible registration.
	pub fn add(&self, template: &str, options: impl Into<HandlerOptions>) -> &Self {
		self.try_add(template, options)
			.unwrap_or_else(|e| panic!("Invalid route template '{}': {}", template, e))
	}

	/// Registers a route, reporting an invalid template.
	pub fn try_add(
		&self,
		template: &str,
		options: impl Into<HandlerOptions>,
	) -> Result<&Self, RouteError> {
		self.inner.registry.borrow_mut().register(template, options)?;
		Ok(self)
	}

	/// Routes the current location, replacing its history entry.
	pub fn start(&self) -> Navigation {
		self.start_with(StartOptions::default())
	}

	/// Routes the current location, or `options.fallback` when no route
	/// matches it.
	///
	/// The current history entry is replaced and the current scroll offsets
	/// become the scroll target.
	pub fn start_with(&self, options: StartOptions) -> Navigation {
		let location = match self.inner.platform.location_href() {
			Ok(location) => location,
			Err(error) => return Navigation::settled(Err(error.into())),
		};

		let href = match options.fallback {
			Some(fallback) if !self.matches(&location) => {
				tracing::debug!(%location, %fallback, "no route for start location, using fallback");
				fallback
			}
			_ => location,
		};

		let scroll = self.inner.platform.scroll_position();
		self.goto_with(
			href,
			NavigationOptions::new()
				.with_replace_state(true)
				.with_scroll(scroll.x, scroll.y),
		)
	}

	/// Navigates to `href` with default options.
	pub fn goto(&self, href: impl Into<String>) -> Navigation {
		self.goto_with(href, NavigationOptions::default())
	}

	/// Navigates to `href`.
	///
	/// The returned handle resolves once this navigation, or a newer one that
	/// superseded it while it was pending, has settled.
	pub fn goto_with(&self, href: impl Into<String>, options: NavigationOptions) -> Navigation {
		let (intent, navigation) = Intent::new(href.into(), options);
		self.inner.submit(intent);
		navigation
	}

	/// Checks whether a link to `href` should be handled by the router.
	///
	/// The target must share the current location's origin, fall under the
	/// configured base path and match a registered route.
	pub fn intercepts(&self, href: &str) -> bool {
		let location = self.inner.location();
		let (Ok(here), Ok(target)) = (resolve_href(&location, &location), resolve_href(&location, href))
		else {
			return false;
		};

		target.origin() == here.origin()
			&& self.inner.config.covers(target.path())
			&& self.inner.registry.borrow().any_matches(&target)
	}

	fn matches(&self, href: &str) -> bool {
		resolve_href(&self.inner.location(), href)
			.is_ok_and(|url| self.inner.registry.borrow().any_matches(&url))
	}

	/// Returns the current match.
	pub fn current(&self) -> Option<Rc<RouteMatch>> {
		self.inner.state.borrow().current.clone()
	}

	/// Returns the identifier of the current history entry.
	pub fn current_entry_id(&self) -> u64 {
		self.inner.state.borrow().scroll.current_id()
	}

	/// Returns the scheduler phase.
	pub fn phase(&self) -> Phase {
		self.inner.state.borrow().phase
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.inner.registry.borrow().len()
	}

	/// Returns the router configuration.
	pub fn config(&self) -> &RouterConfig {
		&self.inner.config
	}
}
