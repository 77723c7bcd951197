//! Route lookup.
//!
//! # Responsibilities
//! - Store the compiled route table
//! - Resolve a route path or a full location to a route
//! - Build hrefs for symbolic (by-name) navigation
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - O(n) scan over compiled matchers (four routes)
//! - First match wins, in table order
//! - Explicit NotFound rather than silent default; the caller applies policy

use crate::config::{NotFoundPolicy, RouterConfig, RouterMode};
use crate::routing::matcher::{ExactPathMatcher, LocationParser, Matcher};
use crate::routing::route::Route;
use crate::routing::table::RouteTable;

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Matched(&'a Route),
    NotFound { path: String },
}

impl<'a> Resolution<'a> {
    pub fn route(&self) -> Option<&'a Route> {
        match self {
            Resolution::Matched(route) => Some(route),
            Resolution::NotFound { .. } => None,
        }
    }
}

/// The application router.
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
    matchers: Vec<ExactPathMatcher>,
    locations: LocationParser,
    not_found: NotFoundPolicy,
}

impl Router {
    /// Compile a route table for the given base path and mode.
    pub fn new(table: RouteTable, base: impl Into<String>, mode: RouterMode) -> Self {
        let matchers = table
            .routes()
            .iter()
            .map(|r| ExactPathMatcher::new(&r.path))
            .collect();

        Self {
            table,
            matchers,
            locations: LocationParser::new(base, mode),
            not_found: NotFoundPolicy::default(),
        }
    }

    /// Compile a route table using the router section of the config.
    pub fn from_config(table: RouteTable, config: &RouterConfig) -> Self {
        Self::new(table, config.base_url.clone(), config.mode).with_not_found(config.not_found)
    }

    pub fn with_not_found(mut self, policy: NotFoundPolicy) -> Self {
        self.not_found = policy;
        self
    }

    /// Resolve a route path (already relative to the base).
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        self.matchers
            .iter()
            .zip(self.table.routes())
            .find(|(matcher, _)| matcher.matches(path))
            .map(|(_, route)| Resolution::Matched(route))
            .unwrap_or_else(|| Resolution::NotFound {
                path: path.to_string(),
            })
    }

    /// Resolve a full location (`/base/Newwallet?x=1`).
    pub fn resolve_location(&self, location: &str) -> Resolution<'_> {
        match self.locations.route_path(location) {
            Some(path) => self.resolve(&path),
            None => Resolution::NotFound {
                path: location.to_string(),
            },
        }
    }

    /// Route path for a location, `None` when outside the base.
    pub fn route_path(&self, location: &str) -> Option<String> {
        self.locations.route_path(location)
    }

    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.table.by_name(name)
    }

    /// Full URL for a named route, honoring base and mode.
    pub fn href_for(&self, name: &str) -> Option<String> {
        self.route_by_name(name).map(|r| self.locations.href(&r.path))
    }

    pub fn href(&self, route: &Route) -> String {
        self.locations.href(&route.path)
    }

    pub fn routes(&self) -> &[Route] {
        self.table.routes()
    }

    pub fn root(&self) -> &Route {
        self.table.root()
    }

    pub fn base(&self) -> &str {
        self.locations.base()
    }

    pub fn mode(&self) -> RouterMode {
        self.locations.mode()
    }

    pub fn not_found_policy(&self) -> NotFoundPolicy {
        self.not_found
    }
}
