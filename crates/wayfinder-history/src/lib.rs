//! # wayfinder-history
//!
//! Scroll bookkeeping for router-created history entries, and the contract
//! the router needs from its host.
//!
//! - [`ScrollHistory`] maps entry identifiers to captured scroll offsets.
//! - [`Platform`] abstracts session history, location and scroll access.
//! - [`MemoryPlatform`] implements it in memory for native hosts and tests.
//! - `BrowserPlatform` implements it on `web-sys` (`wasm32` only).
//!
//! ## Example
//!
//! ```
//! use wayfinder_history::{EntryState, MemoryPlatform, Platform};
//!
//! let platform = MemoryPlatform::new("http://localhost/").unwrap();
//! platform.push_state(&EntryState::new(2), "/about").unwrap();
//!
//! assert_eq!(platform.location_href().unwrap(), "http://localhost/about");
//! assert!(platform.back());
//! ```

pub mod entry;
pub mod error;
pub mod memory;
pub mod platform;
pub mod scroll;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use entry::{EntryState, ScrollPosition};
pub use error::HistoryError;
pub use memory::{MemoryEntry, MemoryPlatform};
pub use platform::{Platform, PopStateListener};
pub use scroll::ScrollHistory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserPlatform;
