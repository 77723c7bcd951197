//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wallet_shell::{bootstrap, HttpServer, ShellConfig, Shutdown};

/// Config bound to `addr` with everything else at defaults.
#[allow(dead_code)]
pub fn config_at(addr: SocketAddr) -> ShellConfig {
    let mut config = ShellConfig::default();
    config.listener.bind_address = addr.to_string();
    config
}

/// Bootstrap and serve the shell in the background.
///
/// The returned `Shutdown` stops the server when triggered or dropped.
#[allow(dead_code)]
pub async fn start_shell(config: ShellConfig) -> Shutdown {
    let app = bootstrap(&config).expect("bootstrap");
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config, app);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown
}

/// Start a mock API backend that answers every request with a fixed JSON body.
#[allow(dead_code)]
pub async fn start_mock_api(addr: SocketAddr, status: u16, body: &'static str) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}
