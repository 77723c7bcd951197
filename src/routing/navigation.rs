//! Navigation state machine.
//!
//! # States
//! - One per registered route (`Main`, `Newwallet`, `Loadwallet`, `Mainaction`)
//! - `NotFound(path)` for unmatched paths when the policy renders them
//!
//! # State Transitions
//! ```text
//! any state --navigate(path matches route R)--> R.view
//! any state --navigate(no match), Render-------> NotFound(path)
//! any state --navigate(no match), RedirectMain-> Main
//! any state --back()---------------------------> previous entry
//! ```
//!
//! Initial state is the root route. There is no terminal state.

use std::fmt;
use std::sync::Arc;

use crate::config::NotFoundPolicy;
use crate::errors::{ShellError, ShellResult};
use crate::routing::route::ViewId;
use crate::routing::router::{Resolution, Router};

/// Which view is currently mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    View(ViewId),
    NotFound(String),
}

impl NavState {
    pub fn view(&self) -> Option<ViewId> {
        match self {
            NavState::View(view) => Some(*view),
            NavState::NotFound(_) => None,
        }
    }
}

impl fmt::Display for NavState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavState::View(view) => write!(f, "{}", view),
            NavState::NotFound(path) => write!(f, "NotFound({})", path),
        }
    }
}

/// One entry of the navigation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Route path the state was reached through.
    pub path: String,
    pub state: NavState,
}

/// Record of a completed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: NavState,
    pub to: NavState,
    /// The requested path did not match and the policy sent us to the root.
    pub redirected: bool,
}

/// Drives the navigation state machine over a shared router.
#[derive(Debug)]
pub struct Navigator {
    router: Arc<Router>,
    history: Vec<NavEntry>,
}

impl Navigator {
    /// Start at the root route.
    pub fn new(router: Arc<Router>) -> Self {
        let root = router.root();
        let initial = NavEntry {
            path: root.path.clone(),
            state: NavState::View(root.view),
        };
        Self {
            router,
            history: vec![initial],
        }
    }

    pub fn current(&self) -> &NavState {
        &self.current_entry().state
    }

    pub fn current_entry(&self) -> &NavEntry {
        // History is never empty: it starts with the root entry and
        // `back` refuses to pop the last one.
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[NavEntry] {
        &self.history
    }

    /// Navigate to a route path (relative to the base).
    pub fn navigate(&mut self, path: &str) -> Transition {
        let from = self.current().clone();
        let (entry, redirected) = Self::entry_for(&self.router, path);

        tracing::debug!(from = %from, to = %entry.state, redirected, "Navigation");

        let to = entry.state.clone();
        self.history.push(entry);
        Transition {
            from,
            to,
            redirected,
        }
    }

    /// Navigate by route name.
    pub fn navigate_to_name(&mut self, name: &str) -> ShellResult<Transition> {
        let path = self
            .router
            .route_by_name(name)
            .map(|r| r.path.clone())
            .ok_or_else(|| ShellError::UnknownRouteName(name.to_string()))?;
        Ok(self.navigate(&path))
    }

    /// Return to the previous entry; `None` at the first entry.
    pub fn back(&mut self) -> Option<Transition> {
        if self.history.len() < 2 {
            return None;
        }
        let from = self.history.pop().map(|e| e.state)?;
        Some(Transition {
            from,
            to: self.current().clone(),
            redirected: false,
        })
    }

    fn entry_for(router: &Router, path: &str) -> (NavEntry, bool) {
        match router.resolve(path) {
            Resolution::Matched(route) => (
                NavEntry {
                    path: path.to_string(),
                    state: NavState::View(route.view),
                },
                false,
            ),
            Resolution::NotFound { path } => match router.not_found_policy() {
                NotFoundPolicy::Render => (
                    NavEntry {
                        path: path.clone(),
                        state: NavState::NotFound(path),
                    },
                    false,
                ),
                NotFoundPolicy::RedirectMain => {
                    let root = router.root();
                    (
                        NavEntry {
                            path: root.path.clone(),
                            state: NavState::View(root.view),
                        },
                        true,
                    )
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouterMode;
    use crate::routing::table::RouteTable;

    fn navigator(policy: NotFoundPolicy) -> Navigator {
        let router = Router::new(RouteTable::wallet(), "/", RouterMode::History).with_not_found(policy);
        Navigator::new(Arc::new(router))
    }

    #[test]
    fn test_initial_state_is_main() {
        let nav = navigator(NotFoundPolicy::Render);
        assert_eq!(nav.current(), &NavState::View(ViewId::Main));
        assert_eq!(nav.history().len(), 1);
    }

    #[test]
    fn test_any_state_reaches_any_state() {
        let mut nav = navigator(NotFoundPolicy::Render);
        for from in ViewId::ALL {
            nav.navigate_to_name(from.as_str()).unwrap();
            for to in ViewId::ALL {
                nav.navigate_to_name(from.as_str()).unwrap();
                let t = nav.navigate_to_name(to.as_str()).unwrap();
                assert_eq!(t.from, NavState::View(from));
                assert_eq!(t.to, NavState::View(to));
            }
        }
    }

    #[test]
    fn test_self_transition() {
        let mut nav = navigator(NotFoundPolicy::Render);
        let t = nav.navigate("/");
        assert_eq!(t.from, t.to);
        assert_eq!(nav.history().len(), 2);
    }

    #[test]
    fn test_unmatched_renders_not_found() {
        let mut nav = navigator(NotFoundPolicy::Render);
        let t = nav.navigate("/Settings");
        assert_eq!(t.to, NavState::NotFound("/Settings".into()));
        assert!(!t.redirected);

        // Not terminal.
        nav.navigate("/Loadwallet");
        assert_eq!(nav.current(), &NavState::View(ViewId::Loadwallet));
    }

    #[test]
    fn test_unmatched_redirects_main() {
        let mut nav = navigator(NotFoundPolicy::RedirectMain);
        nav.navigate("/Newwallet");
        let t = nav.navigate("/Settings");
        assert_eq!(t.from, NavState::View(ViewId::Newwallet));
        assert_eq!(t.to, NavState::View(ViewId::Main));
        assert!(t.redirected);
        assert_eq!(nav.current_entry().path, "/");
    }

    #[test]
    fn test_back() {
        let mut nav = navigator(NotFoundPolicy::Render);
        assert!(nav.back().is_none());

        nav.navigate("/Newwallet");
        nav.navigate("/Mainaction");
        let t = nav.back().unwrap();
        assert_eq!(t.from, NavState::View(ViewId::Mainaction));
        assert_eq!(t.to, NavState::View(ViewId::Newwallet));
        nav.back().unwrap();
        assert!(nav.back().is_none());
        assert_eq!(nav.current(), &NavState::View(ViewId::Main));
    }

    #[test]
    fn test_unknown_name() {
        let mut nav = navigator(NotFoundPolicy::Render);
        assert!(matches!(
            nav.navigate_to_name("Settings"),
            Err(ShellError::UnknownRouteName(_))
        ));
        assert_eq!(nav.history().len(), 1);
    }
}
