//! Load an existing wallet from its key pair.

use maud::{html, Markup};

use crate::app::component_library::{Field, Tone};
use crate::views::{RenderContext, View};

pub struct LoadWalletView;

impl View for LoadWalletView {
    fn render(&self, ctx: &RenderContext<'_>) -> Markup {
        let fields = [
            Field::text("g1", "G1"),
            Field::text("g2", "G2"),
            Field::text("p", "P"),
            Field::text("h", "Public key"),
            Field::password("x", "Private key"),
        ];
        let body = html! {
            (ctx.widgets.alert(Tone::Info, "Enter the values shown when the wallet was created."))
            (ctx.widgets.form(&ctx.href("Mainaction"), &fields, "Load wallet"))
            (ctx.widgets.link_button(&ctx.href("Main"), "Back", Tone::Default))
        };
        html! {
            div class="view view--loadwallet" { (ctx.widgets.card("Load wallet", body)) }
        }
    }
}
