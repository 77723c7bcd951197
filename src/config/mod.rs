//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), optional
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (BASE_URL environment override)
//!     → validation.rs (semantic checks)
//!     → ShellConfig (validated, immutable)
//!     → handed to bootstrap and the HTTP server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::{
    AppConfig, HttpClientConfig, ListenerConfig, NotFoundPolicy, ObservabilityConfig,
    PluginsConfig, RouterConfig, RouterMode, ShellConfig, TimeoutConfig,
};
