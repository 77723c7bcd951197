//! View components.
//!
//! # Data Flow
//! ```text
//! NavState (from the navigator)
//!     → app.rs (root: chrome + delegate)
//!     → registry lookup by ViewId, or not_found.rs
//!     → Markup placed into the mount anchor
//! ```
//!
//! Views only render their UI surface. Their forms post to the shell's
//! wallet relay, which forwards them to the wallet API (see
//! `app::wallet_api`).

pub mod app;
pub mod load_wallet;
pub mod main_action;
pub mod main_view;
pub mod new_wallet;
pub mod not_found;

use std::collections::HashMap;

use maud::Markup;

use crate::app::component_library::ComponentLibrary;
use crate::app::wallet_api::{WalletAction, WalletKeys};
use crate::routing::{NavState, Router, ViewId};

pub use app::App;

/// Everything a view may read while rendering.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub router: &'a Router,
    pub widgets: &'a ComponentLibrary,
    /// Keys posted from the Loadwallet form, if any.
    pub keys: Option<&'a WalletKeys>,
    pub state: &'a NavState,
    pub title: &'a str,
}

impl<'a> RenderContext<'a> {
    /// Href of a named route; `#` when the name is unknown.
    pub fn href(&self, name: &str) -> String {
        self.router.href_for(name).unwrap_or_else(|| "#".to_string())
    }

    /// Form action for a wallet operation.
    pub fn action(&self, action: WalletAction) -> String {
        action.relay_path()
    }
}

/// A renderable unit.
pub trait View: Send + Sync {
    fn render(&self, ctx: &RenderContext<'_>) -> Markup;
}

/// Maps each routed view id to its component.
pub struct ViewRegistry {
    views: HashMap<ViewId, Box<dyn View>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self {
            views: HashMap::new(),
        }
    }

    /// The four wallet views.
    pub fn wallet() -> Self {
        Self::new()
            .with(ViewId::Main, main_view::MainView)
            .with(ViewId::Newwallet, new_wallet::NewWalletView)
            .with(ViewId::Loadwallet, load_wallet::LoadWalletView)
            .with(ViewId::Mainaction, main_action::MainActionView)
    }

    pub fn with(mut self, id: ViewId, view: impl View + 'static) -> Self {
        self.views.insert(id, Box::new(view));
        self
    }

    pub fn get(&self, id: ViewId) -> Option<&dyn View> {
        self.views.get(&id).map(|v| v.as_ref())
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.views.contains_key(&id)
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("views", &self.views.keys().collect::<Vec<_>>())
            .finish()
    }
}
