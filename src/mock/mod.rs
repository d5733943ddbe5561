//! Mock content API.
//!
//! A conforming in-process stand-in for the real backend, used in
//! development and tests. Only mounted when `mock.enabled` is set; the
//! fixtures and artificial latency live in `data.rs` / `handlers.rs`.

pub mod data;
pub mod handlers;

pub use handlers::router;
