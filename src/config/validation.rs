//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the base path and mount selector shapes
//! - Check value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ShellConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::ShellConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &ShellConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    let base = &config.router.base_url;
    if !base.starts_with('/') || !base.ends_with('/') {
        errors.push(ValidationError::new(
            "router.base_url",
            format!("'{}' must start and end with '/'", base),
        ));
    }
    if base.contains(['?', '#']) {
        errors.push(ValidationError::new(
            "router.base_url",
            "must not contain a query or fragment",
        ));
    }

    let selector = &config.app.mount_selector;
    if selector.len() < 2 || !selector.starts_with('#') {
        errors.push(ValidationError::new(
            "app.mount_selector",
            format!("'{}' must be an id selector like '#app'", selector),
        ));
    }

    if url::Url::parse(&config.plugins.http_client.api_base_url).is_err() {
        errors.push(ValidationError::new(
            "plugins.http_client.api_base_url",
            format!("'{}' is not an absolute URL", config.plugins.http_client.api_base_url),
        ));
    }
    if config.plugins.http_client.timeout_secs == 0 {
        errors.push(ValidationError::new(
            "plugins.http_client.timeout_secs",
            "must be greater than zero",
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new(
            "timeouts.request_secs",
            "must be greater than zero",
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
