//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → server.rs (Axum setup, middleware, page handler)
//!     → headers.rs (request allowlist → backend client)
//!     → [backend + render layers produce a PageOutcome]
//!     → server.rs (outcome → response, response allowlist applied)
//!     → client
//! ```

pub mod headers;
pub mod request_id;
pub mod server;

pub use server::{AppState, HttpServer};
