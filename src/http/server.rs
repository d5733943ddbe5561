//! HTTP server setup and page handler.
//!
//! # Responsibilities
//! - Create the Axum router (wildcard page route, health probe)
//! - Wire up middleware (request ID, tracing, inbound timeout)
//! - Mount the mock content API when enabled
//! - Map page outcomes to HTTP responses, passing allow-listed backend
//!   headers through to the client

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::SetRequestIdLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::backend::BackendClient;
use crate::config::FrontendConfig;
use crate::http::request_id::MakeRequestUuid;
use crate::mock;
use crate::observability::metrics;
use crate::render::page::{error_html, not_found_html, render_page, PageOutcome};
use crate::render::ComponentRegistry;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<FrontendConfig>,
    pub client: BackendClient,
    pub registry: Arc<ComponentRegistry>,
}

/// HTTP server for the front-end.
pub struct HttpServer {
    router: Router,
    config: FrontendConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: FrontendConfig) -> Result<Self, reqwest::Error> {
        let client = BackendClient::new(&config)?;
        let registry = Arc::new(ComponentRegistry::with_defaults());

        let state = AppState {
            config: Arc::new(config.clone()),
            client,
            registry,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &FrontendConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/healthz", get(healthz))
            .route("/", get(page_handler))
            .route("/{*path}", get(page_handler))
            .with_state(state);

        if config.mock.enabled {
            tracing::info!(
                prefix = %config.backend.api_prefix,
                "mock content API enabled"
            );
            router = router.nest(&config.backend.api_prefix, mock::router(&config.mock));
        }

        router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.listener.request_timeout_secs,
                ))),
        )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }
}

/// Main page handler: run the render pipeline for the request path and
/// translate the outcome into an HTTP response.
async fn page_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let start = Instant::now();
    let path = uri.path().to_string();

    tracing::debug!(path = %path, "rendering page");

    let outcome = render_page(
        &state.client,
        &state.registry,
        &state.config,
        &path,
        &headers,
    )
    .await;

    let response = match outcome {
        PageOutcome::Rendered {
            html,
            status,
            upstream_headers,
        } => {
            let mut response = (status, Html(html)).into_response();
            let response_headers = response.headers_mut();
            for (name, value) in upstream_headers.iter() {
                response_headers.append(name.clone(), value.clone());
            }
            response
        }
        PageOutcome::Redirect(decision) => {
            let mut response = decision.status.into_response();
            match header::HeaderValue::from_str(&decision.url) {
                Ok(location) => {
                    response.headers_mut().insert(header::LOCATION, location);
                }
                Err(_) => {
                    tracing::warn!(target = %decision.url, "redirect target is not a valid header value");
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Html(error_html("invalid redirect target")),
                    )
                        .into_response();
                }
            }
            response.headers_mut().insert(
                "x-redirect-mode",
                header::HeaderValue::from_static(decision.mode.as_str()),
            );
            response
        }
        PageOutcome::NotFound => {
            (StatusCode::NOT_FOUND, Html(not_found_html())).into_response()
        }
        PageOutcome::Error { status, message } => {
            (status, Html(error_html(&message))).into_response()
        }
    };

    metrics::record_page_request("GET", response.status().as_u16(), start);
    response
}

async fn healthz() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
    }
    tracing::info!("shutdown signal received");
}
