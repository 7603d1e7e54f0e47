//! # wayfinder-navigation
//!
//! The transition scheduler. A [`Router`] owns the route registry, the
//! current match and the scroll bookkeeping for its history entries, and
//! turns navigation requests into lifecycle hook runs and history updates.
//!
//! Navigation is single-flight: while one transition runs, newer requests
//! coalesce into one pending slot and only the newest runs next. Callers
//! whose request was superseded observe the outcome of the navigation that
//! replaced theirs.
//!
//! A hook failure rejects that navigation only; the current match stays as
//! it was and a pending navigation still runs.
//!
//! Hooks that outlive the transition they belong to (for example a
//! superseded `enter` that later calls [`Router::goto`]) are not cancelled;
//! their effects are ordinary new navigations.

pub mod config;
pub mod error;
pub mod intent;
pub mod options;
pub mod router;
pub mod scheduler;

#[cfg(target_arch = "wasm32")]
pub mod spawn;

pub use config::RouterConfig;
pub use error::NavigationError;
pub use intent::Navigation;
pub use options::{NavigationOptions, StartOptions};
pub use router::Router;
pub use scheduler::Phase;

#[cfg(target_arch = "wasm32")]
pub use spawn::BrowserSpawner;
