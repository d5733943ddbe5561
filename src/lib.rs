//! Decoupled CMS front-end.
//!
//! Renders pages served by a headless CMS content API: fetches one JSON
//! envelope per request, forwards an allowlist of request headers
//! upstream, passes backend cache headers back downstream, and resolves
//! each content node's element tag to a renderer at runtime.

pub mod backend;
pub mod config;
pub mod http;
pub mod mock;
pub mod observability;
pub mod render;

pub use config::FrontendConfig;
pub use http::HttpServer;
