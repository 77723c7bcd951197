//! Route records and view identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ShellError;

/// The views the wallet shell can render for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    Main,
    Newwallet,
    Loadwallet,
    Mainaction,
}

impl ViewId {
    pub const ALL: [ViewId; 4] = [
        ViewId::Main,
        ViewId::Newwallet,
        ViewId::Loadwallet,
        ViewId::Mainaction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Main => "Main",
            ViewId::Newwallet => "Newwallet",
            ViewId::Loadwallet => "Loadwallet",
            ViewId::Mainaction => "Mainaction",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ShellError::UnknownRouteName(s.to_string()))
    }
}

/// A `(path, name, view)` association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Path pattern relative to the base, always starting with `/`.
    pub path: String,
    /// Symbolic name, unique within a table.
    pub name: String,
    /// View rendered when the route is active.
    pub view: ViewId,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: ViewId) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    /// True for the default/initial entry.
    pub fn is_root(&self) -> bool {
        self.path == "/"
    }
}
