//! HTTP client for the content API.
//!
//! # Responsibilities
//! - Fetch one page envelope per request, forwarding allow-listed headers
//! - Fetch raw menus and normalize them for rendering
//! - Enforce the backend request timeout
//! - Normalize transport and HTTP failures into [`FetchError`]
//!
//! # Design Decisions
//! - One `reqwest::Client` built at startup and cloned per request
//!   (clones share the connection pool); no ambient global client
//! - A non-2xx response with an envelope-shaped body is carried through
//!   as renderable content rather than treated as a hard failure
//! - Menu failures degrade to an empty menu; navigation is non-critical

use std::time::Duration;

use axum::http::HeaderMap;

use crate::backend::types::{FetchError, MenuItem, PageEnvelope, RawMenuItem};
use crate::backend::validate::validate;
use crate::config::FrontendConfig;
use crate::http::headers::{filter_request_headers, filter_response_headers};

/// A fetched page: the envelope plus the backend response headers that
/// are allowed to pass through to the client.
#[derive(Debug)]
pub struct FetchedPage {
    pub envelope: PageEnvelope,
    pub headers: HeaderMap,
}

/// Client for the backend content API.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    /// Base URL joined with the API prefix, no trailing slash.
    endpoint: String,
    request_allowlist: Vec<String>,
    response_allowlist: Vec<String>,
}

impl BackendClient {
    /// Build a client from the validated configuration.
    pub fn new(config: &FrontendConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.backend.timeout_secs))
            .build()?;

        let endpoint = format!(
            "{}{}",
            config.backend.base_url.trim_end_matches('/'),
            config.backend.api_prefix.trim_end_matches('/'),
        );

        Ok(Self {
            http,
            endpoint,
            request_allowlist: config.proxy.request_headers.clone(),
            response_allowlist: config.proxy.response_headers.clone(),
        })
    }

    /// Fetch the page envelope for a path.
    ///
    /// A single leading slash is stripped before joining onto the API
    /// endpoint, so `/node/1` and `node/1` address the same resource.
    pub async fn fetch_page(
        &self,
        path: &str,
        inbound: &HeaderMap,
    ) -> Result<FetchedPage, FetchError> {
        let clean_path = path.strip_prefix('/').unwrap_or(path);
        let url = format!("{}/{}", self.endpoint, clean_path);
        let headers = filter_request_headers(inbound, &self.request_allowlist);

        tracing::debug!(url = %url, "fetching page");

        let response = self
            .http
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let upstream_headers =
            filter_response_headers(response.headers(), &self.response_allowlist);

        if status.is_success() {
            let mut envelope: PageEnvelope = response
                .json()
                .await
                .map_err(|e| FetchError::Internal(format!("failed to decode envelope: {e}")))?;
            validate(&envelope)?;
            envelope.status_code = Some(status.as_u16());
            return Ok(FetchedPage {
                envelope,
                headers: upstream_headers,
            });
        }

        // Backend reachable but unhappy. If it supplied its own envelope
        // (e.g. a 404 page), carry it through so the caller can render it.
        let body = response.bytes().await.unwrap_or_default();
        match serde_json::from_slice::<PageEnvelope>(&body) {
            Ok(mut envelope) => {
                envelope.status_code = Some(status.as_u16());
                Err(FetchError::Upstream {
                    status: status.as_u16(),
                    envelope: Some(Box::new(envelope)),
                })
            }
            Err(_) if status == reqwest::StatusCode::NOT_FOUND => Err(FetchError::NotFound),
            Err(_) => Err(FetchError::Upstream {
                status: status.as_u16(),
                envelope: None,
            }),
        }
    }

    /// Fetch a menu by name, normalized for rendering.
    ///
    /// Menus are chrome, not content: every failure is swallowed and an
    /// empty menu returned.
    pub async fn fetch_menu(&self, name: &str, inbound: &HeaderMap) -> Vec<MenuItem> {
        let url = format!("{}/api/menu_items/{}", self.endpoint, name);
        let headers = filter_request_headers(inbound, &self.request_allowlist);

        let response = match self.http.get(&url).headers(headers).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(menu = name, error = %e, "failed to fetch menu");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                menu = name,
                status = response.status().as_u16(),
                "backend refused menu request"
            );
            return Vec::new();
        }

        match response.json::<Vec<RawMenuItem>>().await {
            Ok(items) => items.iter().map(MenuItem::from_raw).collect(),
            Err(e) => {
                tracing::warn!(menu = name, error = %e, "failed to decode menu");
                Vec::new()
            }
        }
    }
}

/// Map a reqwest transport error into the fetch taxonomy.
fn classify_transport_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() || error.is_connect() {
        FetchError::Unavailable(error.to_string())
    } else {
        FetchError::Internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrontendConfig;

    #[test]
    fn test_endpoint_has_no_trailing_slash() {
        let mut config = FrontendConfig::default();
        config.backend.base_url = "https://cms.example.org/".to_string();
        let client = BackendClient::new(&config).unwrap();
        assert_eq!(client.endpoint, "https://cms.example.org/ce-api");
    }
}
