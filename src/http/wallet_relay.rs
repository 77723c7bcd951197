//! Wallet form relay under `/__wallet`.
//!
//! # Responsibilities
//! - Accept the view forms (`application/x-www-form-urlencoded`)
//! - Forward them as JSON through the HTTP client plugin
//! - Hand the wallet service's answer back to the browser
//!
//! # Design Decisions
//! - Key material is never logged
//! - A failing wallet service is a 502; a missing HTTP client is a 503

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Form, Json, Router};
use serde::Serialize;

use crate::app::wallet_api::{
    BuyCoin, ExchangeCoin, NewWallet, ReceiveData, WalletAction, WalletApi,
};
use crate::errors::ShellResult;
use crate::http::request::RequestIdExt;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
struct RelayError {
    error: String,
}

fn error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(RelayError {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Relay routes; the caller supplies the state.
pub fn wallet_routes() -> Router<AppState> {
    Router::new()
        .route(&WalletAction::Register.relay_path(), post(post_register))
        .route(&WalletAction::Buy.relay_path(), post(post_buy))
        .route(&WalletAction::Exchange.relay_path(), post(post_exchange))
        .route(&WalletAction::Receive.relay_path(), post(post_receive))
}

fn api(state: &AppState) -> Result<WalletApi<'_>, Response> {
    state.app.context().wallet_api().ok_or_else(|| {
        error(
            StatusCode::SERVICE_UNAVAILABLE,
            "http client plugin not installed",
        )
    })
}

fn respond<T: Serialize>(action: WalletAction, headers: &HeaderMap, result: ShellResult<T>) -> Response {
    match result {
        Ok(body) => {
            tracing::info!(request_id = %headers.request_id(), action = action.endpoint(), "Wallet action relayed");
            Json(body).into_response()
        }
        Err(e) => {
            tracing::warn!(
                request_id = %headers.request_id(),
                action = action.endpoint(),
                error = %e,
                "Wallet service call failed"
            );
            error(StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}

pub async fn post_register(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(request): Form<NewWallet>,
) -> Response {
    // The service answers an incomplete registration with 400 as well.
    if !request.is_complete() {
        return error(StatusCode::BAD_REQUEST, "value cannot be empty");
    }
    let api = match api(&state) {
        Ok(api) => api,
        Err(response) => return response,
    };
    respond(WalletAction::Register, &headers, api.register(&request).await)
}

pub async fn post_buy(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(request): Form<BuyCoin>,
) -> Response {
    let api = match api(&state) {
        Ok(api) => api,
        Err(response) => return response,
    };
    respond(WalletAction::Buy, &headers, api.buy(&request).await)
}

pub async fn post_exchange(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(request): Form<ExchangeCoin>,
) -> Response {
    let api = match api(&state) {
        Ok(api) => api,
        Err(response) => return response,
    };
    respond(WalletAction::Exchange, &headers, api.exchange(&request).await)
}

pub async fn post_receive(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(request): Form<ReceiveData>,
) -> Response {
    let api = match api(&state) {
        Ok(api) => api,
        Err(response) => return response,
    };
    respond(WalletAction::Receive, &headers, api.receive(&request).await)
}
