//! Rendering subsystem.
//!
//! # Data Flow
//! ```text
//! PageEnvelope
//!     → page.rs (pipeline: fetch → validate → redirect? → chrome → content)
//!     → registry.rs (tag resolution with deterministic fallback)
//!     → elements.rs (per-tag renderers, re-entrant for nested nodes)
//!     → html.rs (escaping, markup helpers)
//! ```
//!
//! # Design Decisions
//! - The registry is built once and shared read-only; rendering is pure
//!   CPU work, all page data arrives in the single fetch
//! - Unknown tags degrade to placeholders, never abort the page

pub mod elements;
pub mod html;
pub mod page;
pub mod registry;

pub use page::{render_page, PageOutcome};
pub use registry::ComponentRegistry;
