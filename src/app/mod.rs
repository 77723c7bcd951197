//! Application subsystem.
//!
//! # Data Flow
//! ```text
//! bootstrap.rs
//!     → Router (from routing)
//!     → context.rs AppBuilder (root view + router)
//!     → plugin.rs (component_library.rs, http_client.rs)
//!     → AppContext
//!     → document.rs mount on #app
//!     → MountedApp (owns document + navigator)
//!
//! wallet_api.rs: request bodies and typed calls to the wallet service
//! ```

pub mod bootstrap;
pub mod component_library;
pub mod context;
pub mod document;
pub mod http_client;
pub mod plugin;
pub mod wallet_api;

pub use bootstrap::{bootstrap, bootstrap_into, host_document};
pub use component_library::{ComponentLibrary, ComponentLibraryPlugin};
pub use context::{AppBuilder, AppContext, MountedApp, Page};
pub use document::Document;
pub use http_client::{HttpClient, HttpClientPlugin};
pub use plugin::{Plugin, PluginSet};
pub use wallet_api::{WalletAction, WalletApi, WalletKeys};
