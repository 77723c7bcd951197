//! Wallet registration form.

use maud::{html, Markup};

use crate::app::component_library::{Field, Tone};
use crate::app::wallet_api::WalletAction;
use crate::views::{RenderContext, View};

pub struct NewWalletView;

impl View for NewWalletView {
    fn render(&self, ctx: &RenderContext<'_>) -> Markup {
        let fields = [
            Field::text("name", "Name").placeholder("Account holder name"),
            Field::text("id", "ID number"),
            Field::password("str", "Key phrase").placeholder("Used to derive your keys"),
        ];
        let body = html! {
            (ctx.widgets.alert(Tone::Info, "Keys are generated by the wallet service and shown once. Store them safely."))
            (ctx.widgets.form(&ctx.action(WalletAction::Register), &fields, "Create wallet"))
            (ctx.widgets.link_button(&ctx.href("Main"), "Back", Tone::Default))
        };
        html! {
            div class="view view--newwallet" { (ctx.widgets.card("New wallet", body)) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{NavState, ViewId};
    use crate::views::test_support;

    #[test]
    fn test_registration_fields() {
        let html = test_support::render(&NewWalletView, NavState::View(ViewId::Newwallet));
        assert_eq!(
            test_support::form_fields(&html),
            vec![WalletAction::Register.fields().to_vec()]
        );
        assert!(html.contains(r#"action="/__wallet/register""#));
    }
}
