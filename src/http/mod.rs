//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → shell_api.rs for /__shell/*, wallet_relay.rs for /__wallet/*,
//!       otherwise the page fallback
//!     → MountedApp::render_at(location)
//!     → response.rs (Page → status + HTML or redirect)
//! ```

pub mod request;
pub mod response;
pub mod server;
pub mod shell_api;
pub mod wallet_relay;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
