//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Each request runs in a span carrying its request ID
//!   (`http::request::request_span`)
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
