//! Observability subsystem.
//!
//! Structured logging goes through `tracing` (initialized in `main`);
//! this module owns the metrics exporter and recording helpers.

pub mod metrics;
