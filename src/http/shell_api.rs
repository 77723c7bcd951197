//! Introspection endpoints under `/__shell`.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;
use crate::routing::{NavState, Resolution};

pub const PREFIX: &str = "/__shell";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemStatus {
    pub version: String,
    pub status: String,
    pub instance_id: String,
    pub mounted_at: u64,
    pub current_view: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteInfo {
    pub path: String,
    pub name: String,
    pub view: String,
    pub href: String,
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolveResult {
    /// Location as given.
    pub location: String,
    /// Path relative to the base; absent when outside the base.
    pub route_path: Option<String>,
    pub matched: bool,
    pub name: Option<String>,
    pub view: Option<String>,
}

/// Shell API routes; the caller supplies the state.
pub fn shell_routes() -> Router<AppState> {
    Router::new()
        .route(&format!("{}/status", PREFIX), get(get_status))
        .route(&format!("{}/routes", PREFIX), get(get_routes))
        .route(&format!("{}/resolve", PREFIX), get(get_resolve))
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    let app = &state.app;
    let current_view = match app.current() {
        NavState::View(view) => view.to_string(),
        NavState::NotFound(_) => "NotFound".to_string(),
    };
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "mounted".to_string(),
        instance_id: app.context().instance_id().to_string(),
        mounted_at: app.mounted_at(),
        current_view,
    })
}

pub async fn get_routes(State(state): State<AppState>) -> Json<Vec<RouteInfo>> {
    let router = state.app.router();
    Json(
        router
            .routes()
            .iter()
            .map(|r| RouteInfo {
                path: r.path.clone(),
                name: r.name.clone(),
                view: r.view.to_string(),
                href: router.href(r),
            })
            .collect(),
    )
}

pub async fn get_resolve(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Json<ResolveResult> {
    let router = state.app.router();
    let route = match router.resolve_location(&query.path) {
        Resolution::Matched(route) => Some(route),
        Resolution::NotFound { .. } => None,
    };
    Json(ResolveResult {
        route_path: router.route_path(&query.path),
        matched: route.is_some(),
        name: route.map(|r| r.name.clone()),
        view: route.map(|r| r.view.to_string()),
        location: query.path,
    })
}
