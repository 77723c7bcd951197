//! Wallet API contract.
//!
//! Request and response bodies of the wallet service the HTTP client points
//! at (`plugins.http_client.api_base_url`, `http://localhost:1323/` by
//! default). Field names are the service's JSON names; views build their
//! forms from [`WalletAction::fields`] so the two cannot drift apart.
//!
//! # Data Flow
//! ```text
//! Loadwallet form (g1, g2, p, h, x)
//!     → POST <Mainaction href> → WalletKeys
//!     → Mainaction forms carry the keys as hidden inputs
//!     → POST /__wallet/<action> (http::wallet_relay)
//!     → WalletApi → HttpClient::post_json → wallet service
//! ```

use serde::{Deserialize, Serialize};

use crate::app::http_client::HttpClient;
use crate::errors::ShellResult;

/// Path prefix the shell relays wallet actions under.
pub const RELAY_PREFIX: &str = "/__wallet";

/// Operations the wallet service offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletAction {
    Register,
    Buy,
    Exchange,
    Receive,
}

impl WalletAction {
    /// Endpoint relative to the wallet service base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            WalletAction::Register => "register",
            WalletAction::Buy => "buy",
            WalletAction::Exchange => "exchange",
            WalletAction::Receive => "receive",
        }
    }

    /// Where the shell accepts the form for this action.
    pub fn relay_path(&self) -> String {
        format!("{}/{}", RELAY_PREFIX, self.endpoint())
    }

    /// Request body field names, in form order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            WalletAction::Register => &["name", "id", "str"],
            WalletAction::Buy => &["g1", "g2", "p", "h", "x", "amount"],
            WalletAction::Exchange => &[
                "sg1", "sg2", "sp", "sh", "sx", "rg1", "rg2", "rp", "rh", "amount", "cmv", "vor",
                "spend",
            ],
            WalletAction::Receive => &["hash", "g1", "g2", "p", "h", "x"],
        }
    }
}

/// Registration request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWallet {
    pub name: String,
    pub id: String,
    pub str: String,
}

impl NewWallet {
    /// The service refuses registrations with an empty field.
    pub fn is_complete(&self) -> bool {
        !(self.name.is_empty() || self.id.is_empty() || self.str.is_empty())
    }
}

/// Key material returned at registration. The public key is `H`, the
/// private key `X`; `G1`, `G2`, `P` are the group parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStrings {
    #[serde(rename = "G1")]
    pub g1: String,
    #[serde(rename = "G2")]
    pub g2: String,
    #[serde(rename = "P")]
    pub p: String,
    pub publickey: String,
    pub privatekey: String,
}

/// A loaded key pair, as entered on the Loadwallet view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletKeys {
    pub g1: String,
    pub g2: String,
    pub p: String,
    pub h: String,
    pub x: String,
}

impl WalletKeys {
    pub const FIELDS: [&'static str; 5] = ["g1", "g2", "p", "h", "x"];

    /// Values in [`Self::FIELDS`] order.
    pub fn parts(&self) -> [&str; 5] {
        [
            self.g1.as_str(),
            self.g2.as_str(),
            self.p.as_str(),
            self.h.as_str(),
            self.x.as_str(),
        ]
    }

    pub fn is_complete(&self) -> bool {
        self.parts().iter().all(|part| !part.is_empty())
    }
}

/// Buy coins from the exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyCoin {
    pub g1: String,
    pub g2: String,
    pub p: String,
    pub h: String,
    pub x: String,
    pub amount: String,
}

/// Spend part of a coin to a receiver's public key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeCoin {
    pub sg1: String,
    pub sg2: String,
    pub sp: String,
    pub sh: String,
    pub sx: String,
    pub rg1: String,
    pub rg2: String,
    pub rp: String,
    pub rh: String,
    pub amount: String,
    pub cmv: String,
    pub vor: String,
    pub spend: String,
}

/// Claim a coin sent in transaction `hash`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiveData {
    pub hash: String,
    pub g1: String,
    pub g2: String,
    pub p: String,
    pub h: String,
    pub x: String,
}

/// A coin as the service reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub cmv: String,
    pub vor: String,
    pub hash: String,
    pub amount: String,
}

/// Typed calls against the wallet service.
#[derive(Debug, Clone, Copy)]
pub struct WalletApi<'a> {
    http: &'a HttpClient,
}

impl<'a> WalletApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn register(&self, request: &NewWallet) -> ShellResult<KeyStrings> {
        self.http
            .post_json(WalletAction::Register.endpoint(), request)
            .await
    }

    pub async fn buy(&self, request: &BuyCoin) -> ShellResult<Coin> {
        self.http.post_json(WalletAction::Buy.endpoint(), request).await
    }

    pub async fn exchange(&self, request: &ExchangeCoin) -> ShellResult<Coin> {
        self.http
            .post_json(WalletAction::Exchange.endpoint(), request)
            .await
    }

    pub async fn receive(&self, request: &ReceiveData) -> ShellResult<Coin> {
        self.http
            .post_json(WalletAction::Receive.endpoint(), request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn json_keys<T: Serialize>(value: &T) -> BTreeSet<String> {
        match serde_json::to_value(value).unwrap() {
            serde_json::Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("expected an object, got {}", other),
        }
    }

    fn field_set(action: WalletAction) -> BTreeSet<String> {
        action.fields().iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_fields_match_request_bodies() {
        assert_eq!(field_set(WalletAction::Register), json_keys(&NewWallet::default()));
        assert_eq!(field_set(WalletAction::Buy), json_keys(&BuyCoin::default()));
        assert_eq!(field_set(WalletAction::Exchange), json_keys(&ExchangeCoin::default()));
        assert_eq!(field_set(WalletAction::Receive), json_keys(&ReceiveData::default()));
    }

    #[test]
    fn test_key_fields_match_keys_body() {
        let expected: BTreeSet<String> = WalletKeys::FIELDS.iter().map(|f| f.to_string()).collect();
        assert_eq!(expected, json_keys(&WalletKeys::default()));
    }

    #[test]
    fn test_registration_keys_use_service_names() {
        let keys: KeyStrings = serde_json::from_str(
            r#"{"G1":"a","G2":"b","P":"c","publickey":"d","privatekey":"e"}"#,
        )
        .unwrap();
        assert_eq!(keys.publickey, "d");
        assert_eq!(keys.g1, "a");
    }

    #[test]
    fn test_relay_paths() {
        assert_eq!(WalletAction::Buy.relay_path(), "/__wallet/buy");
        assert_eq!(WalletAction::Register.relay_path(), "/__wallet/register");
    }

    #[test]
    fn test_completeness() {
        assert!(!NewWallet::default().is_complete());
        let keys = WalletKeys {
            g1: "1".into(),
            g2: "2".into(),
            p: "3".into(),
            h: "4".into(),
            x: "5".into(),
        };
        assert!(keys.is_complete());
        assert_eq!(keys.parts(), ["1", "2", "3", "4", "5"]);
    }
}
