//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Location (base + path, or base + #fragment)
//!     → matcher.rs (strip base, pick path or fragment by mode)
//!     → router.rs (route lookup)
//!     → Return: matched Route or NotFound
//!
//! Route Compilation (at startup):
//!     literal Route[]
//!     → table.rs (check unique names/paths, single root)
//!     → compile matchers
//!     → Freeze as immutable Router
//!
//! Navigation (after mount):
//!     navigation.rs drives state over the router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same input always matches same route
//! - First match wins (table order)
//! - Unmatched paths are an explicit outcome; policy comes from config

pub mod matcher;
pub mod navigation;
pub mod route;
pub mod router;
pub mod table;

pub use navigation::{NavEntry, NavState, Navigator, Transition};
pub use route::{Route, ViewId};
pub use router::{Resolution, Router};
pub use table::RouteTable;
