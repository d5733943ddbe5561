//! Configuration validation.
//!
//! Serde handles syntactic validation; this module covers the semantic
//! checks. All errors are collected and reported together rather than
//! stopping at the first one.

use thiserror::Error;
use url::Url;

use crate::config::schema::FrontendConfig;

/// A single semantic validation failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("backend.base_url '{0}' is not an absolute http(s) URL")]
    InvalidBaseUrl(String),

    #[error("backend.api_prefix '{0}' must start with '/'")]
    InvalidApiPrefix(String),

    #[error("backend.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.metrics_address '{0}' is not a valid socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, returning all failures at once.
pub fn validate_config(config: &FrontendConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config
        .listener
        .bind_address
        .parse::<std::net::SocketAddr>()
        .is_err()
    {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.backend.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::InvalidBaseUrl(
            config.backend.base_url.clone(),
        )),
    }

    if !config.backend.api_prefix.starts_with('/') {
        errors.push(ValidationError::InvalidApiPrefix(
            config.backend.api_prefix.clone(),
        ));
    }

    if config.backend.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<std::net::SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&FrontendConfig::default()).is_ok());
    }

    #[test]
    fn test_errors_are_collected() {
        let mut config = FrontendConfig::default();
        config.backend.base_url = "not a url".to_string();
        config.backend.api_prefix = "ce-api".to_string();
        config.backend.timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = FrontendConfig::default();
        config.backend.base_url = "ftp://cms.example.org".to_string();
        assert!(validate_config(&config).is_err());
    }
}
