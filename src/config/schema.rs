//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! front-end server. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the decoupled front-end.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FrontendConfig {
    /// Listener configuration (bind address, limits).
    pub listener: ListenerConfig,

    /// Backend content API settings.
    pub backend: BackendConfig,

    /// Header allowlists crossing the proxy boundary.
    pub proxy: ProxyHeadersConfig,

    /// Mock backend settings (development/test fixture).
    pub mock: MockConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Inbound request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            request_timeout_secs: 60,
        }
    }
}

/// Backend content API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the CMS backend (e.g., "https://cms.example.org").
    pub base_url: String,

    /// Path prefix of the custom-elements content API.
    pub api_prefix: String,

    /// Request timeout for backend calls in seconds.
    pub timeout_secs: u64,

    /// Name of the menu fetched for site navigation.
    pub menu: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8888".to_string(),
            api_prefix: "/ce-api".to_string(),
            timeout_secs: 30,
            menu: "main".to_string(),
        }
    }
}

/// Header allowlists for the request/response pipeline.
///
/// Only the names listed here cross the proxy boundary; everything else
/// is dropped in both directions.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProxyHeadersConfig {
    /// Client request headers forwarded to the backend.
    pub request_headers: Vec<String>,

    /// Backend response headers passed through to the client.
    pub response_headers: Vec<String>,
}

impl Default for ProxyHeadersConfig {
    fn default() -> Self {
        Self {
            request_headers: vec![
                "cookie".to_string(),
                "authorization".to_string(),
                "x-csrf-token".to_string(),
                "accept-language".to_string(),
            ],
            response_headers: vec![
                "cache-control".to_string(),
                "content-language".to_string(),
                "set-cookie".to_string(),
                "x-drupal-cache".to_string(),
                "x-drupal-dynamic-cache".to_string(),
                "etag".to_string(),
                "vary".to_string(),
            ],
        }
    }
}

/// Mock backend configuration.
///
/// When enabled, fixture handlers for the content API are mounted under
/// the configured API prefix so the server can run without a real CMS.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MockConfig {
    /// Serve mock fixture data instead of requiring a real backend.
    pub enabled: bool,

    /// Artificial latency for page responses in milliseconds.
    pub page_delay_ms: u64,

    /// Artificial latency for menu responses in milliseconds.
    pub menu_delay_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            page_delay_ms: 100,
            menu_delay_ms: 50,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
