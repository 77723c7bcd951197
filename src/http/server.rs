//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router: shell API, wallet relay, page fallback
//! - Wire up middleware (request ID, tracing, timeout)
//! - Render the mounted application for every other location
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Form, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::app::wallet_api::WalletKeys;
use crate::app::MountedApp;
use crate::config::ShellConfig;
use crate::http::request::{
    propagate_request_id_layer, request_span, set_request_id_layer, RequestIdExt,
};
use crate::http::response::{page_label, page_status};
use crate::http::shell_api::shell_routes;
use crate::http::wallet_relay::wallet_routes;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub app: Arc<MountedApp>,
}

/// HTTP server for the wallet shell.
pub struct HttpServer {
    router: Router,
    config: ShellConfig,
}

impl HttpServer {
    /// Create a server around an already mounted application.
    pub fn new(config: ShellConfig, app: MountedApp) -> Self {
        let state = AppState { app: Arc::new(app) };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ShellConfig, state: AppState) -> Router {
        shell_routes()
            .merge(wallet_routes())
            .fallback(page_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(request_span))
                    .layer(propagate_request_id_layer()),
            )
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, base = %self.config.router.base_url, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Render the document for whatever location was requested.
///
/// A POST carrying the Loadwallet form renders with those keys.
async fn page_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    uri: Uri,
    form: Result<Form<WalletKeys>, FormRejection>,
) -> Response {
    let start = Instant::now();
    let location = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let keys = match (method, form) {
        (Method::POST, Ok(Form(keys))) if keys.is_complete() => Some(keys),
        _ => None,
    };

    match state.app.render_with_keys(location, keys.as_ref()) {
        Ok(page) => {
            let status = page_status(&page);
            let label = page_label(&page);
            tracing::debug!(
                request_id = %headers.request_id(),
                location,
                view = label,
                keys_loaded = keys.is_some(),
                status = status.as_u16(),
                "Page rendered"
            );
            metrics::record_render(label, status.as_u16(), start);
            page.into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %headers.request_id(), location, error = %e, "Render failed");
            metrics::record_render("error", 500, start);
            (StatusCode::INTERNAL_SERVER_ERROR, "Render failed").into_response()
        }
    }
}
