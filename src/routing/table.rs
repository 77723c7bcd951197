//! The static route table.
//!
//! # Design Decisions
//! - Built once from a literal list; there is no registration API
//! - Construction checks the table invariants and refuses a bad table
//! - Order is preserved; it is the order navigation chrome lists routes in

use std::collections::HashSet;

use crate::errors::{ShellError, ShellResult};
use crate::routing::matcher::normalize_path;
use crate::routing::route::{Route, ViewId};

/// Immutable, ordered, validated list of routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Validate and freeze a list of routes.
    ///
    /// Names and paths must be unique, every path must start with `/`,
    /// and exactly one route must sit at `/`.
    pub fn new(routes: Vec<Route>) -> ShellResult<Self> {
        let mut names = HashSet::new();
        let mut paths = HashSet::new();

        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(ShellError::InvalidRoutePath(route.path.clone()));
            }
            if !names.insert(route.name.as_str()) {
                return Err(ShellError::DuplicateRouteName(route.name.clone()));
            }
            if !paths.insert(normalize_path(&route.path)) {
                return Err(ShellError::DuplicateRoutePath(route.path.clone()));
            }
        }

        // Unique paths already rule out a second root.
        if !routes.iter().any(Route::is_root) {
            return Err(ShellError::MissingRootRoute);
        }

        Ok(Self { routes })
    }

    /// The wallet application's routes.
    pub fn wallet() -> Self {
        Self {
            routes: vec![
                Route::new("/", "Main", ViewId::Main),
                Route::new("/Newwallet", "Newwallet", ViewId::Newwallet),
                Route::new("/Loadwallet", "Loadwallet", ViewId::Loadwallet),
                Route::new("/Mainaction", "Mainaction", ViewId::Mainaction),
            ],
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The route at `/`. Always present by construction.
    pub fn root(&self) -> &Route {
        self.routes
            .iter()
            .find(|r| r.is_root())
            .unwrap_or(&self.routes[0])
    }

    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
