//! HTTP client capability, used by `wallet_api` to reach the wallet service.
//!
//! # Responsibilities
//! - Hold one pooled `reqwest` client for the whole application
//! - Resolve endpoint paths against the wallet API base URL
//! - JSON POST helper with a per-request timeout (the wallet API is POST-only)
//!
//! # Design Decisions
//! - Built at plugin install; a bad base URL is a startup fault
//! - Non-2xx responses are errors (`error_for_status`)

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::app::plugin::{Plugin, PluginSet};
use crate::config::HttpClientConfig;
use crate::errors::{ShellError, ShellResult};

const PLUGIN_NAME: &str = "http-client";

/// Request-making capability exposed to every view.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base: Url,
}

impl HttpClient {
    pub fn new(config: &HttpClientConfig) -> ShellResult<Self> {
        let mut base = Url::parse(&config.api_base_url).map_err(|e| ShellError::PluginInstall {
            plugin: PLUGIN_NAME,
            reason: format!("invalid api_base_url '{}': {}", config.api_base_url, e),
        })?;
        // Without a trailing slash `join` would replace the last segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ShellError::PluginInstall {
                plugin: PLUGIN_NAME,
                reason: e.to_string(),
            })?;

        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL of an API endpoint (`register` → `<base>register`).
    pub fn endpoint(&self, path: &str) -> ShellResult<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ShellError::PluginInstall {
                plugin: PLUGIN_NAME,
                reason: format!("invalid endpoint '{}': {}", path, e),
            })
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ShellResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(url = %url, "POST");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Installs the HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClientPlugin {
    config: HttpClientConfig,
}

impl HttpClientPlugin {
    pub fn new(config: HttpClientConfig) -> Self {
        Self { config }
    }
}

impl Plugin for HttpClientPlugin {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn install(self: Box<Self>, plugins: &mut PluginSet) -> ShellResult<()> {
        let client = HttpClient::new(&self.config)?;
        plugins.provide_http(PLUGIN_NAME, client)
    }
}
