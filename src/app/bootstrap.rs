//! One-time startup sequence.
//!
//! # Order
//! 1. Route table → router
//! 2. Root view + router → builder
//! 3. Component library, then HTTP client plugin
//! 4. Development diagnostics switch
//! 5. Mount onto the host document's anchor
//!
//! Any failure is fatal; there is no retry.

use std::sync::Arc;

use crate::app::component_library::ComponentLibraryPlugin;
use crate::app::context::{AppBuilder, MountedApp};
use crate::app::document::Document;
use crate::app::http_client::HttpClientPlugin;
use crate::config::ShellConfig;
use crate::errors::{ShellError, ShellResult};
use crate::routing::{RouteTable, Router};
use crate::views::App;

/// Run the startup sequence against a freshly created host document.
pub fn bootstrap(config: &ShellConfig) -> ShellResult<MountedApp> {
    bootstrap_into(config, host_document(config)?)
}

/// Run the startup sequence against an existing host document.
pub fn bootstrap_into(config: &ShellConfig, document: Document) -> ShellResult<MountedApp> {
    let router = Arc::new(Router::from_config(RouteTable::wallet(), &config.router));
    tracing::debug!(
        base = router.base(),
        mode = ?router.mode(),
        routes = router.routes().len(),
        "Router built"
    );

    let context = AppBuilder::new(router, App::wallet())
        .title(config.app.title.clone())
        .plugin(ComponentLibraryPlugin)
        .plugin(HttpClientPlugin::new(config.plugins.http_client.clone()))
        .production_tip(config.app.production_tip)
        .build()?;

    context.mount(document, &config.app.mount_selector)
}

/// The page served before any application is mounted.
pub fn host_document(config: &ShellConfig) -> ShellResult<Document> {
    let id = config
        .app
        .mount_selector
        .strip_prefix('#')
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ShellError::InvalidSelector(config.app.mount_selector.clone()))?;
    Ok(Document::host(config.app.title.clone(), id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{NavState, ViewId};

    #[test]
    fn test_bootstrap_defaults() {
        let app = bootstrap(&ShellConfig::default()).unwrap();
        assert_eq!(app.current(), &NavState::View(ViewId::Main));
        assert!(!app.anchor_html().is_empty());
        assert_eq!(
            app.context().plugins().installed(),
            &["component-library", "http-client"]
        );
    }

    #[test]
    fn test_missing_anchor_is_fatal() {
        let document = Document::host("wallet", "root");
        let err = bootstrap_into(&ShellConfig::default(), document).unwrap_err();
        assert!(matches!(err, ShellError::MountTargetMissing(ref s) if s == "#app"));
    }

    #[test]
    fn test_plugin_failure_is_fatal() {
        let mut config = ShellConfig::default();
        config.plugins.http_client.api_base_url = "::".into();
        let err = bootstrap(&config).unwrap_err();
        assert!(matches!(err, ShellError::PluginInstall { plugin: "http-client", .. }));
    }

    #[test]
    fn test_forms_point_at_wallet_relay() {
        let mut app = bootstrap(&ShellConfig::default()).unwrap();
        app.navigate("/Newwallet").unwrap();
        assert!(app.anchor_html().contains(r#"action="/__wallet/register""#));
        assert!(app.context().wallet_api().is_some());
    }
}
