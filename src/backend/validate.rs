//! Response validation and redirect resolution.
//!
//! # Responsibilities
//! - Reject envelopes that carry neither title, content, nor redirect
//! - Normalize embedded redirect instructions to a valid status code
//! - Classify redirects as history "push" or "replace" navigations
//!
//! # Design Decisions
//! - Invalid redirect status codes are normalized to 302, never rejected
//! - Permanent codes (301, 308) replace the history entry; all others push

use axum::http::StatusCode;

use crate::backend::types::{FetchError, PageEnvelope};

/// Client history semantics of a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Push a new history entry (temporary redirect).
    Push,
    /// Replace the current history entry (permanent redirect).
    Replace,
}

impl NavigationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationMode::Push => "push",
            NavigationMode::Replace => "replace",
        }
    }
}

/// A resolved redirect: target, normalized status, history mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectDecision {
    pub url: String,
    pub status: StatusCode,
    pub mode: NavigationMode,
}

/// Check the envelope contract: a successful response must populate at
/// least one of `title`, `content`, or `redirect`.
pub fn validate(envelope: &PageEnvelope) -> Result<(), FetchError> {
    if envelope.title.is_none() && envelope.content.is_none() && envelope.redirect.is_none() {
        return Err(FetchError::Malformed(
            "envelope has neither title, content, nor redirect; \
             is the custom-elements renderer installed on the backend?"
                .to_string(),
        ));
    }
    Ok(())
}

/// Resolve an embedded redirect instruction, if any.
pub fn resolve_redirect(envelope: &PageEnvelope) -> Option<RedirectDecision> {
    let redirect = envelope.redirect.as_ref()?;

    let code = match redirect.status_code {
        301 | 302 | 303 | 307 | 308 => redirect.status_code,
        // Anything else is normalized, never rejected.
        _ => 302,
    };
    let mode = match code {
        301 | 308 => NavigationMode::Replace,
        _ => NavigationMode::Push,
    };

    Some(RedirectDecision {
        url: redirect.url.clone(),
        status: StatusCode::from_u16(code).unwrap_or(StatusCode::FOUND),
        mode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::{ContentNode, RedirectInstruction};

    fn redirect_envelope(status_code: u16) -> PageEnvelope {
        PageEnvelope {
            redirect: Some(RedirectInstruction {
                url: "/moved".to_string(),
                status_code,
                external: false,
            }),
            ..PageEnvelope::default()
        }
    }

    #[test]
    fn test_empty_envelope_fails_validation() {
        let err = validate(&PageEnvelope::default()).unwrap_err();
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn test_title_alone_passes_validation() {
        let envelope = PageEnvelope {
            title: Some("x".to_string()),
            ..PageEnvelope::default()
        };
        assert!(validate(&envelope).is_ok());
    }

    #[test]
    fn test_content_alone_passes_validation() {
        let envelope = PageEnvelope {
            content: Some(ContentNode {
                element: "node--default".to_string(),
                props: serde_json::Map::new(),
            }),
            ..PageEnvelope::default()
        };
        assert!(validate(&envelope).is_ok());
    }

    #[test]
    fn test_redirect_alone_passes_validation() {
        assert!(validate(&redirect_envelope(302)).is_ok());
    }

    #[test]
    fn test_no_redirect_resolves_to_none() {
        assert_eq!(resolve_redirect(&PageEnvelope::default()), None);
    }

    #[test]
    fn test_permanent_redirect_replaces_history() {
        let decision = resolve_redirect(&redirect_envelope(301)).unwrap();
        assert_eq!(decision.status, StatusCode::MOVED_PERMANENTLY);
        assert_eq!(decision.mode, NavigationMode::Replace);

        let decision = resolve_redirect(&redirect_envelope(308)).unwrap();
        assert_eq!(decision.mode, NavigationMode::Replace);
    }

    #[test]
    fn test_temporary_redirect_pushes_history() {
        let decision = resolve_redirect(&redirect_envelope(302)).unwrap();
        assert_eq!(decision.status, StatusCode::FOUND);
        assert_eq!(decision.mode, NavigationMode::Push);

        let decision = resolve_redirect(&redirect_envelope(307)).unwrap();
        assert_eq!(decision.mode, NavigationMode::Push);
    }

    #[test]
    fn test_invalid_status_normalizes_to_302() {
        let decision = resolve_redirect(&redirect_envelope(999)).unwrap();
        assert_eq!(decision.status, StatusCode::FOUND);
        assert_eq!(decision.mode, NavigationMode::Push);
        assert_eq!(decision.url, "/moved");
    }
}
