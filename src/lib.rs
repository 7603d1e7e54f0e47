//! # Wayfinder
//!
//! A client-side navigation engine: route templates with named parameters and
//! wildcards, lifecycle hooks around every transition, and session history
//! plus scroll bookkeeping that stays consistent across back/forward
//! navigation.
//!
//! ## Crates
//!
//! - [`routes`] - template matching, query decoding, lifecycle hooks
//! - [`history`] - scroll store and the host platform contract
//! - [`navigation`] - the [`Router`] and its single-flight scheduler
//!
//! ## Quick Example
//!
//! ```rust
//! use futures::executor::LocalPool;
//! use wayfinder::prelude::*;
//!
//! let mut pool = LocalPool::new();
//! let platform = MemoryPlatform::new("http://localhost/").unwrap();
//! let router = Router::new(platform.clone(), pool.spawner());
//!
//! router
//! 	.add("/", Hooks::new())
//! 	.add("/files/*path", Hooks::new().enter(|route, _previous| {
//! 		println!("opening {}", route.param("path").unwrap_or_default());
//! 	}));
//!
//! pool.run_until(router.start()).unwrap();
//! pool.run_until(router.goto("/files/docs/readme.md")).unwrap();
//!
//! let current = router.current().unwrap();
//! assert_eq!(current.param("path"), Some("docs/readme.md"));
//! assert_eq!(platform.len(), 2);
//! ```
//!
//! ## Browsers
//!
//! On `wasm32`, `Router::browser()` binds to `window.history` and spawns
//! transitions with `wasm-bindgen-futures`.

pub use wayfinder_history as history;
pub use wayfinder_navigation as navigation;
pub use wayfinder_routes as routes;

// Re-export routes
pub use wayfinder_routes::{
	Completion, HandlerOptions, Hook, HookError, Hooks, IntoCompletion, Query, QueryValue, Route,
	RouteError, RouteMatch, RouteRegistry,
};

// Re-export history
pub use wayfinder_history::{
	EntryState, HistoryError, MemoryPlatform, Platform, ScrollHistory, ScrollPosition,
};

#[cfg(target_arch = "wasm32")]
pub use wayfinder_history::BrowserPlatform;

// Re-export navigation
pub use wayfinder_navigation::{
	Navigation, NavigationError, NavigationOptions, Phase, Router, RouterConfig, StartOptions,
};

#[cfg(target_arch = "wasm32")]
pub use wayfinder_navigation::BrowserSpawner;

pub mod prelude {
	pub use crate::{
		Completion, HandlerOptions, HookError, Hooks, MemoryPlatform, Navigation, NavigationError,
		NavigationOptions, Platform, RouteMatch, Router, RouterConfig, StartOptions,
	};

	#[cfg(target_arch = "wasm32")]
	pub use crate::{BrowserPlatform, BrowserSpawner};
}
