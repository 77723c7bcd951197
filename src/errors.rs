//! Shell-wide error type.
//!
//! Every startup fault (bad route table, missing anchor, plugin failure,
//! invalid configuration) surfaces as a `ShellError` and is fatal: the
//! binary logs it and exits without retrying.

use thiserror::Error;

use crate::config::loader::ConfigError;

/// Errors that can occur while building, mounting or serving the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The mount selector did not match any element of the host document.
    #[error("Mount target '{0}' not found in host document")]
    MountTargetMissing(String),

    /// Another application already owns the mount anchor.
    #[error("Mount target '{0}' already has an application mounted")]
    AlreadyMounted(String),

    /// Only `#id` selectors are supported.
    #[error("Invalid mount selector '{0}': expected '#<id>'")]
    InvalidSelector(String),

    /// A plugin refused to install.
    #[error("Plugin '{plugin}' failed to install: {reason}")]
    PluginInstall { plugin: &'static str, reason: String },

    /// A plugin the views depend on was never installed.
    #[error("Required plugin '{0}' is not installed")]
    PluginMissing(&'static str),

    /// Two routes share a name.
    #[error("Duplicate route name '{0}'")]
    DuplicateRouteName(String),

    /// Two routes share a path.
    #[error("Duplicate route path '{0}'")]
    DuplicateRoutePath(String),

    /// No route is registered at `/`.
    #[error("Route table has no route at '/'")]
    MissingRootRoute,

    /// Route path does not start with `/`.
    #[error("Invalid route path '{0}': must start with '/'")]
    InvalidRoutePath(String),

    /// Symbolic navigation to a name that is not in the table.
    #[error("Unknown route name '{0}'")]
    UnknownRouteName(String),

    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP client failure.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO failure (listener bind, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;
