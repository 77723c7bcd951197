//! Shown for locations that match no route.

use maud::{html, Markup};

use crate::app::component_library::Tone;
use crate::routing::NavState;
use crate::views::{RenderContext, View};

pub struct NotFoundView;

impl View for NotFoundView {
    fn render(&self, ctx: &RenderContext<'_>) -> Markup {
        let path = match ctx.state {
            NavState::NotFound(path) => path.as_str(),
            NavState::View(_) => "",
        };
        let body = html! {
            (ctx.widgets.alert(Tone::Danger, &format!("Nothing lives at '{}'.", path)))
            (ctx.widgets.link_button(&ctx.href("Main"), "Go to start", Tone::Primary))
        };
        html! {
            div class="view view--not-found" { (ctx.widgets.card("Page not found", body)) }
        }
    }
}
