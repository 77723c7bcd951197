//! Root view: navigation chrome around the active route's view.

use maud::{html, Markup};

use crate::routing::{NavState, ViewId};
use crate::views::not_found::NotFoundView;
use crate::views::{RenderContext, View, ViewRegistry};

/// Top-level composition unit rendered into the mount anchor.
#[derive(Debug)]
pub struct App {
    views: ViewRegistry,
}

impl App {
    pub fn new(views: ViewRegistry) -> Self {
        Self { views }
    }

    /// Root with the four wallet views.
    pub fn wallet() -> Self {
        Self::new(ViewRegistry::wallet())
    }

    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    fn body(&self, ctx: &RenderContext<'_>) -> Markup {
        match ctx.state {
            NavState::View(id) => match self.views.get(*id) {
                Some(view) => view.render(ctx),
                None => missing_view(*id),
            },
            NavState::NotFound(_) => NotFoundView.render(ctx),
        }
    }
}

impl View for App {
    fn render(&self, ctx: &RenderContext<'_>) -> Markup {
        let items: Vec<(String, String)> = ctx
            .router
            .routes()
            .iter()
            .map(|r| (ctx.router.href(r), r.name.clone()))
            .collect();
        let active = ctx
            .state
            .view()
            .and_then(|id| ctx.router.routes().iter().find(|r| r.view == id))
            .map(|r| ctx.router.href(r));

        html! {
            div class="wl-app" data-view=(ctx.state) {
                header class="wl-app__header" {
                    h1 class="wl-app__title" { (ctx.title) }
                    (ctx.widgets.menu(&items, active.as_deref()))
                }
                main class="wl-app__main" { (self.body(ctx)) }
            }
        }
    }
}

fn missing_view(id: ViewId) -> Markup {
    tracing::error!(view = %id, "Route points at a view that is not registered");
    html! { div class="view view--missing" { "View unavailable" } }
}
