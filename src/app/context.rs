//! Application context: built once, mounted once.
//!
//! # Lifecycle
//! ```text
//! AppBuilder::new(router, root)
//!     → .plugin(..) / .production_tip(..)      (configuration)
//!     → .build()                               (plugins installed, AppContext)
//!     → AppContext::mount(document, selector)  (consumes context, MountedApp)
//! ```
//!
//! # Design Decisions
//! - The context is an owned value, not a process-wide singleton
//! - Mounting consumes the context, so one context renders into one anchor
//! - The anchor remembers its owner, so a second context cannot take it either

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use maud::Markup;
use uuid::Uuid;

use crate::app::component_library::ComponentLibrary;
use crate::app::document::Document;
use crate::app::http_client::HttpClient;
use crate::app::plugin::{Plugin, PluginSet};
use crate::app::wallet_api::{WalletApi, WalletKeys};
use crate::config::NotFoundPolicy;
use crate::errors::{ShellError, ShellResult};
use crate::routing::{NavState, Navigator, Resolution, Router, Transition, ViewId};
use crate::views::{App, RenderContext, View};

/// Collects everything the application needs before plugins are installed.
pub struct AppBuilder {
    router: Arc<Router>,
    root: App,
    plugins: Vec<Box<dyn Plugin>>,
    production_tip: bool,
    title: String,
}

impl AppBuilder {
    pub fn new(router: Arc<Router>, root: App) -> Self {
        Self {
            router,
            root,
            plugins: Vec::new(),
            production_tip: false,
            title: "wallet".to_string(),
        }
    }

    /// Queue a plugin; plugins install in the order they are added.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Development-only diagnostics at mount. Off by default.
    pub fn production_tip(mut self, enabled: bool) -> Self {
        self.production_tip = enabled;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Install every plugin and freeze the context.
    pub fn build(self) -> ShellResult<AppContext> {
        let mut plugins = PluginSet::default();
        for plugin in self.plugins {
            plugins.install(plugin)?;
        }

        let widgets = plugins
            .components()
            .cloned()
            .ok_or(ShellError::PluginMissing("component-library"))?;

        Ok(AppContext {
            instance_id: Uuid::new_v4(),
            router: self.router,
            root: self.root,
            widgets,
            plugins,
            production_tip: self.production_tip,
            title: self.title,
        })
    }
}

/// A fully configured, not yet mounted application.
#[derive(Debug)]
pub struct AppContext {
    instance_id: Uuid,
    router: Arc<Router>,
    root: App,
    widgets: ComponentLibrary,
    plugins: PluginSet,
    production_tip: bool,
    title: String,
}

impl AppContext {
    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    pub fn plugins(&self) -> &PluginSet {
        &self.plugins
    }

    pub fn http(&self) -> Option<&HttpClient> {
        self.plugins.http()
    }

    /// Wallet service calls; `None` without the HTTP client plugin.
    pub fn wallet_api(&self) -> Option<WalletApi<'_>> {
        self.http().map(WalletApi::new)
    }

    /// Render the root view for a navigation state.
    pub fn render(&self, state: &NavState, keys: Option<&WalletKeys>) -> Markup {
        let ctx = RenderContext {
            router: &self.router,
            widgets: &self.widgets,
            keys,
            state,
            title: &self.title,
        };
        self.root.render(&ctx)
    }

    /// Attach to the anchor matching `selector`, rendering the initial route.
    pub fn mount(self, mut document: Document, selector: &str) -> ShellResult<MountedApp> {
        let navigator = Navigator::new(self.router.clone());
        let html = self.render(navigator.current(), None).into_string();
        document.mount(selector, self.instance_id, html)?;

        if self.production_tip {
            tracing::warn!("Running with development diagnostics enabled; disable production_tip for deployments");
        }
        tracing::info!(
            instance_id = %self.instance_id,
            selector,
            view = %navigator.current(),
            plugins = ?self.plugins.installed(),
            "Application mounted"
        );

        let mounted_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        Ok(MountedApp {
            ctx: self,
            navigator,
            document,
            selector: selector.to_string(),
            mounted_at,
        })
    }
}

/// A page rendered for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    View { view: ViewId, html: String },
    NotFound { path: String, html: String },
    Redirect { location: String },
}

/// The mounted application and the document it owns.
#[derive(Debug)]
pub struct MountedApp {
    ctx: AppContext,
    navigator: Navigator,
    document: Document,
    selector: String,
    mounted_at: u64,
}

impl MountedApp {
    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn router(&self) -> &Router {
        &self.ctx.router
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Unix seconds at mount.
    pub fn mounted_at(&self) -> u64 {
        self.mounted_at
    }

    pub fn current(&self) -> &NavState {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Current content of the mount anchor.
    pub fn anchor_html(&self) -> &str {
        self.document
            .select(&self.selector)
            .map(|e| e.content())
            .unwrap_or_default()
    }

    /// Navigate to a route path and re-render the anchor.
    pub fn navigate(&mut self, path: &str) -> ShellResult<Transition> {
        let transition = self.navigator.navigate(path);
        self.rerender()?;
        Ok(transition)
    }

    pub fn navigate_to_name(&mut self, name: &str) -> ShellResult<Transition> {
        let transition = self.navigator.navigate_to_name(name)?;
        self.rerender()?;
        Ok(transition)
    }

    pub fn back(&mut self) -> ShellResult<Option<Transition>> {
        let transition = self.navigator.back();
        if transition.is_some() {
            self.rerender()?;
        }
        Ok(transition)
    }

    /// Render the whole document as it would look at `location`,
    /// without touching the live navigation state.
    pub fn render_at(&self, location: &str) -> ShellResult<Page> {
        self.render_with_keys(location, None)
    }

    /// `render_at` with key material posted from the Loadwallet form.
    pub fn render_with_keys(&self, location: &str, keys: Option<&WalletKeys>) -> ShellResult<Page> {
        let router = self.router();
        let state = match router.resolve_location(location) {
            Resolution::Matched(route) => NavState::View(route.view),
            Resolution::NotFound { path } => match router.not_found_policy() {
                NotFoundPolicy::Render => NavState::NotFound(path),
                NotFoundPolicy::RedirectMain => {
                    return Ok(Page::Redirect {
                        location: router.href(router.root()),
                    });
                }
            },
        };

        let mut document = self.document.clone();
        document.update(&self.selector, self.ctx.instance_id, self.ctx.render(&state, keys).into_string())?;
        let html = document.render().into_string();

        Ok(match state {
            NavState::View(view) => Page::View { view, html },
            NavState::NotFound(path) => Page::NotFound { path, html },
        })
    }

    fn rerender(&mut self) -> ShellResult<()> {
        let html = self.ctx.render(self.navigator.current(), None).into_string();
        self.document.update(&self.selector, self.ctx.instance_id, html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::component_library::ComponentLibraryPlugin;
    use crate::config::RouterMode;
    use crate::routing::RouteTable;

    fn builder(policy: NotFoundPolicy) -> AppBuilder {
        let router = Router::new(RouteTable::wallet(), "/", RouterMode::History).with_not_found(policy);
        AppBuilder::new(Arc::new(router), App::wallet())
    }

    #[test]
    fn test_build_requires_component_library() {
        let err = builder(NotFoundPolicy::Render).build().unwrap_err();
        assert!(matches!(err, ShellError::PluginMissing("component-library")));
    }

    #[test]
    fn test_mount_renders_main() {
        let ctx = builder(NotFoundPolicy::Render)
            .plugin(ComponentLibraryPlugin)
            .build()
            .unwrap();
        let id = ctx.instance_id();
        let app = ctx.mount(Document::host("wallet", "app"), "#app").unwrap();

        assert_eq!(app.current(), &NavState::View(ViewId::Main));
        assert!(app.anchor_html().contains("view--main"));
        assert_eq!(app.document().select("#app").unwrap().owner(), Some(id));
    }

    #[test]
    fn test_navigate_rerenders_anchor() {
        let mut app = builder(NotFoundPolicy::Render)
            .plugin(ComponentLibraryPlugin)
            .build()
            .unwrap()
            .mount(Document::host("wallet", "app"), "#app")
            .unwrap();

        app.navigate("/Newwallet").unwrap();
        assert!(app.anchor_html().contains("view--newwallet"));

        app.navigate_to_name("Mainaction").unwrap();
        assert!(app.anchor_html().contains("view--mainaction"));

        app.back().unwrap().unwrap();
        assert!(app.anchor_html().contains("view--newwallet"));
    }

    #[test]
    fn test_render_at_leaves_state_alone() {
        let app = builder(NotFoundPolicy::Render)
            .plugin(ComponentLibraryPlugin)
            .build()
            .unwrap()
            .mount(Document::host("wallet", "app"), "#app")
            .unwrap();

        match app.render_at("/Loadwallet").unwrap() {
            Page::View { view, html } => {
                assert_eq!(view, ViewId::Loadwallet);
                assert!(html.contains("view--loadwallet"));
                assert!(html.starts_with("<!DOCTYPE html>"));
            }
            other => panic!("unexpected page {:?}", other),
        }
        assert!(matches!(app.render_at("/nope").unwrap(), Page::NotFound { .. }));
        assert_eq!(app.current(), &NavState::View(ViewId::Main));
    }

    #[test]
    fn test_render_with_keys_fills_action_forms() {
        let app = builder(NotFoundPolicy::Render)
            .plugin(ComponentLibraryPlugin)
            .build()
            .unwrap()
            .mount(Document::host("wallet", "app"), "#app")
            .unwrap();
        let keys = WalletKeys {
            g1: "1".into(),
            g2: "2".into(),
            p: "3".into(),
            h: "4".into(),
            x: "5".into(),
        };

        match app.render_with_keys("/Mainaction", Some(&keys)).unwrap() {
            Page::View { html, .. } => {
                assert!(html.contains(r#"<input type="hidden" name="sh" value="4">"#));
            }
            other => panic!("unexpected page {:?}", other),
        }
        assert!(!app.anchor_html().contains(r#"value="4""#));
        assert!(app.context().wallet_api().is_none());
    }

    #[test]
    fn test_render_at_redirect_policy() {
        let app = builder(NotFoundPolicy::RedirectMain)
            .plugin(ComponentLibraryPlugin)
            .build()
            .unwrap()
            .mount(Document::host("wallet", "app"), "#app")
            .unwrap();

        assert_eq!(
            app.render_at("/nope").unwrap(),
            Page::Redirect {
                location: "/".into()
            }
        );
    }
}
