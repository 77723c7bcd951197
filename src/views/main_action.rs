//! Wallet actions: buy, exchange, receive.
//!
//! With keys posted from Loadwallet the key inputs are hidden and prefilled;
//! without them every key input is shown.

use maud::{html, Markup};

use crate::app::component_library::{Field, Tone};
use crate::app::wallet_api::{WalletAction, WalletKeys};
use crate::views::{RenderContext, View};

/// (name, label) of the holder's own key inputs, in `WalletKeys::FIELDS` order.
const OWN_KEY: [(&str, &str); 5] = [
    ("g1", "G1"),
    ("g2", "G2"),
    ("p", "P"),
    ("h", "Public key"),
    ("x", "Private key"),
];

/// The same key under the sender names the exchange request uses.
const SENDER_KEY: [(&str, &str); 5] = [
    ("sg1", "G1"),
    ("sg2", "G2"),
    ("sp", "P"),
    ("sh", "Public key"),
    ("sx", "Private key"),
];

fn key_fields<'a>(
    keys: Option<&'a WalletKeys>,
    names: &[(&'static str, &'static str); 5],
) -> Vec<Field<'a>> {
    match keys {
        Some(keys) => names
            .iter()
            .zip(keys.parts())
            .map(|(&(name, _), value)| Field::hidden(name, value))
            .collect(),
        None => names
            .iter()
            .enumerate()
            .map(|(i, &(name, label))| {
                if i == names.len() - 1 {
                    Field::password(name, label)
                } else {
                    Field::text(name, label)
                }
            })
            .collect(),
    }
}

pub struct MainActionView;

impl View for MainActionView {
    fn render(&self, ctx: &RenderContext<'_>) -> Markup {
        let mut buy = key_fields(ctx.keys, &OWN_KEY);
        buy.push(Field::text("amount", "Amount"));

        let mut exchange = key_fields(ctx.keys, &SENDER_KEY);
        exchange.extend([
            Field::text("rg1", "Receiver G1"),
            Field::text("rg2", "Receiver G2"),
            Field::text("rp", "Receiver P"),
            Field::text("rh", "Receiver public key"),
            Field::text("amount", "Coin amount"),
            Field::text("cmv", "Coin commitment"),
            Field::text("vor", "Coin randomness"),
            Field::text("spend", "Amount to send"),
        ]);

        let mut receive = vec![Field::text("hash", "Transaction hash")];
        receive.extend(key_fields(ctx.keys, &OWN_KEY));

        html! {
            div class="view view--mainaction" {
                @if ctx.keys.is_none() {
                    (ctx.widgets.alert(Tone::Info, "No wallet loaded. Enter your keys below or load a wallet first."))
                }
                (ctx.widgets.card("Buy coins", ctx.widgets.form(&ctx.action(WalletAction::Buy), &buy, "Buy")))
                (ctx.widgets.card("Exchange", ctx.widgets.form(&ctx.action(WalletAction::Exchange), &exchange, "Send")))
                (ctx.widgets.card("Receive", ctx.widgets.form(&ctx.action(WalletAction::Receive), &receive, "Receive")))
                (ctx.widgets.link_button(&ctx.href("Main"), "Sign out", Tone::Danger))
            }
        }
    }
}
