//! Landing view: create a wallet or load an existing one.

use maud::{html, Markup};

use crate::app::component_library::Tone;
use crate::views::{RenderContext, View};

pub struct MainView;

impl View for MainView {
    fn render(&self, ctx: &RenderContext<'_>) -> Markup {
        let body = html! {
            p class="wl-lead" { "Create a new wallet, or load one you already have." }
            div class="wl-actions" {
                (ctx.widgets.link_button(&ctx.href("Newwallet"), "New wallet", Tone::Primary))
                (ctx.widgets.link_button(&ctx.href("Loadwallet"), "Load wallet", Tone::Default))
            }
        };
        html! {
            div class="view view--main" { (ctx.widgets.card("Welcome", body)) }
        }
    }
}
