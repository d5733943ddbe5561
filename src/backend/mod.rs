//! Backend content API subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request headers
//!     → http::headers (request allowlist)
//!     → client.rs (GET {base}{prefix}/{path}, fixed timeout)
//!     → types.rs (PageEnvelope / RawMenuItem deserialization)
//!     → validate.rs (contract check, redirect resolution)
//!     → render layer
//! backend response headers
//!     → http::headers (response allowlist)
//!     → outbound response
//! ```
//!
//! # Design Decisions
//! - Errors are values (`FetchError`), never panics; degraded error
//!   envelopes from the backend stay renderable
//! - Menus degrade silently to empty; pages never do

pub mod client;
pub mod types;
pub mod validate;

pub use client::{BackendClient, FetchedPage};
pub use types::{FetchError, MenuItem, PageEnvelope};
pub use validate::{resolve_redirect, validate, NavigationMode, RedirectDecision};
