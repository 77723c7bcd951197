//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the shell.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the wallet shell.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ShellConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Router mode, base path and unmatched-path policy.
    pub router: RouterConfig,

    /// Application root settings (title, anchor, diagnostics).
    pub app: AppConfig,

    /// Plugin settings.
    pub plugins: PluginsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// How the route path is read from a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouterMode {
    /// Route path is the URL path below the base (`/wallet/Newwallet`).
    #[default]
    History,
    /// Route path is the fragment (`/wallet/#/Newwallet`).
    Hash,
}

/// What happens when a location matches no route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundPolicy {
    /// Render an explicit not-found state (HTTP 404).
    #[default]
    Render,
    /// Send the user to the root route.
    RedirectMain,
}

/// Router configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Path resolution mode.
    pub mode: RouterMode,

    /// Base path all routes are rooted at. Overridden by `BASE_URL`.
    pub base_url: String,

    /// Unmatched-path behaviour.
    pub not_found: NotFoundPolicy,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            mode: RouterMode::History,
            base_url: "/".to_string(),
            not_found: NotFoundPolicy::Render,
        }
    }
}

/// Application root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Document title.
    pub title: String,

    /// Selector of the anchor the application mounts onto.
    pub mount_selector: String,

    /// Emit development-mode diagnostics at mount.
    pub production_tip: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "wallet".to_string(),
            mount_selector: "#app".to_string(),
            production_tip: false,
        }
    }
}

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PluginsConfig {
    pub http_client: HttpClientConfig,
}

/// HTTP client plugin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Base URL of the wallet API the views talk to.
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:1323/".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config: ShellConfig = toml::from_str("").unwrap();
        assert_eq!(config.router.base_url, "/");
        assert_eq!(config.router.mode, RouterMode::History);
        assert_eq!(config.app.mount_selector, "#app");
        assert!(!config.app.production_tip);
    }

    #[test]
    fn test_snake_case_enums() {
        let config: ShellConfig = toml::from_str(
            r#"
            [router]
            mode = "hash"
            not_found = "redirect_main"
            "#,
        )
        .unwrap();
        assert_eq!(config.router.mode, RouterMode::Hash);
        assert_eq!(config.router.not_found, NotFoundPolicy::RedirectMain);
        assert_eq!(config.router.base_url, "/");
    }
}
