//! # wayfinder-routes
//!
//! Route templates, URL matching and lifecycle hooks.
//!
//! A route template is a `/`-separated path made of three kinds of segments:
//!
//! - literal segments (`/users`), compared against the percent-decoded URL segment
//! - named parameters (`/:id`), which match any single segment and capture it
//! - a trailing wildcard (`/*rest`), which captures the remainder of the path
//!
//! Routes live in a [`RouteRegistry`], which is scanned in registration order;
//! the first matching route wins.
//!
//! ## Example
//!
//! ```
//! use wayfinder_routes::{Hooks, RouteRegistry, parse_href};
//!
//! let mut registry = RouteRegistry::new();
//! registry.register("/", Hooks::new()).unwrap();
//! registry.register("/users/:id", Hooks::new()).unwrap();
//!
//! let url = parse_href("/users/42?tab=posts").unwrap();
//! let route_match = registry.find_match(&url).unwrap();
//!
//! assert_eq!(route_match.param("id"), Some("42"));
//! assert_eq!(route_match.query_single("tab"), Some("posts"));
//! ```

pub mod error;
pub mod href;
pub mod lifecycle;
pub mod pattern;
pub mod query;
pub mod registry;
pub mod route;
pub mod route_match;

pub use error::{HookError, RouteError};
pub use href::{DEFAULT_BASE, parse_href, resolve_href};
pub use lifecycle::{
	Callback, Completion, HandlerOptions, Handlers, Hook, Hooks, IntoCompletion,
};
pub use pattern::{RoutePattern, Segment};
pub use query::{Query, QueryValue, parse_query};
pub use registry::RouteRegistry;
pub use route::Route;
pub use route_match::RouteMatch;
