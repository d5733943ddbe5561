//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use decoupled_frontend::config::{FrontendConfig, MockConfig};
use decoupled_frontend::{mock, HttpServer};

/// Start the mock content API on an ephemeral port, mounted under /ce-api.
pub async fn start_mock_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = MockConfig {
        enabled: true,
        page_delay_ms: 10,
        menu_delay_ms: 5,
    };
    let app = Router::new().nest("/ce-api", mock::router(&config));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Config pointing the front-end at the given backend address.
pub fn frontend_config(backend: SocketAddr) -> FrontendConfig {
    let mut config = FrontendConfig::default();
    config.backend.base_url = format!("http://{backend}");
    config.backend.timeout_secs = 5;
    config.observability.metrics_enabled = false;
    config
}

/// Start the front-end server on an ephemeral port.
#[allow(dead_code)]
pub async fn start_frontend(config: FrontendConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });
    // Give the server a moment to start accepting.
    tokio::time::sleep(Duration::from_millis(200)).await;

    addr
}

/// Start a raw backend that answers every request with a fixed JSON body.
#[allow(dead_code)]
pub async fn start_json_backend(body: &'static str) -> SocketAddr {
    let (addr, _) = start_raw_backend(body).await;
    addr
}

/// Start a raw backend that answers with a fixed JSON body and records
/// the head of the last request it saw.
#[allow(dead_code)]
pub async fn start_raw_backend(body: &'static str) -> (SocketAddr, Arc<Mutex<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured = Arc::new(Mutex::new(String::new()));
    let capture = captured.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let capture = capture.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 4096];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        *capture.lock().unwrap() =
                            String::from_utf8_lossy(&buf[..n]).to_string();

                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
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

    (addr, captured)
}
