//! OS signal handling.

/// Resolve when Ctrl+C (SIGINT) arrives.
///
/// If the handler cannot be installed the future never resolves and the
/// process has to be stopped some other way.
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
