//! Wallet application shell.
//!
//! Bootstraps the wallet front end once (router, root view, plugins, mount
//! onto the `#app` anchor) and serves the mounted document for every
//! history-mode location under the configured base path.

pub mod app;
pub mod config;
pub mod errors;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod views;

pub use app::{bootstrap, MountedApp};
pub use config::schema::ShellConfig;
pub use errors::{ShellError, ShellResult};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
