//! Wallet shell (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────┐
//!                      │                   WALLET SHELL                   │
//!                      │                                                  │
//!   startup            │  ┌────────┐   ┌─────────┐   ┌────────────────┐   │
//!   ───────────────────┼─▶│ config │──▶│ routing │──▶│ app::bootstrap │   │
//!                      │  └────────┘   └─────────┘   │ plugins, mount │   │
//!                      │                             └───────┬────────┘   │
//!                      │                                     ▼            │
//!   Browser request    │  ┌──────────┐              ┌────────────────┐    │
//!   ───────────────────┼─▶│  http    │─────────────▶│  MountedApp    │    │
//!                      │  │  server  │◀─────────────│  render_at     │    │
//!   ◀──────────────────┼──│          │   document   └────────────────┘    │
//!                      │  └──────────┘                                    │
//!                      │                                                  │
//!                      │  observability (tracing, metrics) · lifecycle    │
//!                      └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use wallet_shell::config::loader::{load_config, load_default};
use wallet_shell::observability::{logging, metrics};
use wallet_shell::{bootstrap, lifecycle, HttpServer, ShellError, ShellResult, Shutdown};

#[derive(Parser)]
#[command(name = "wallet-shell")]
#[command(about = "Serves the wallet front-end shell", long_about = None)]
struct Args {
    /// TOML configuration file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ShellResult<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => load_default()?,
    };

    logging::init_logging(&config.observability);
    tracing::info!("wallet-shell v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        base_url = %config.router.base_url,
        mode = ?config.router.mode,
        "Configuration loaded"
    );

    // Mount before binding so traffic only arrives once the shell is ready.
    let app = match bootstrap(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "Bootstrap failed");
            return Err(e);
        }
    };

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, app);
    let server_shutdown = shutdown.subscribe();
    let serving = tokio::spawn(server.run(listener, server_shutdown));

    lifecycle::signals::ctrl_c().await;
    shutdown.trigger();
    serving.await.map_err(|e| ShellError::Io(std::io::Error::other(e)))??;

    tracing::info!("Shutdown complete");
    Ok(())
}
