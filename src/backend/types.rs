//! Backend API types and error definitions.
//!
//! The wire shapes mirror the custom-elements content API: one JSON
//! envelope per page plus a raw menu-item list. Everything arriving in
//! an envelope is backend-controlled and treated as untrusted input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The full JSON payload for one page.
///
/// A successful envelope must have at least one of `title`, `content`,
/// or `redirect` populated; see [`crate::backend::validate`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PageEnvelope {
    pub title: Option<String>,

    pub metatags: Option<Metatags>,

    pub messages: Option<Messages>,

    pub breadcrumbs: Option<Vec<Breadcrumb>>,

    /// Root of the content tree.
    pub content: Option<ContentNode>,

    /// Stamped from the HTTP status by the client; the backend may also
    /// set it itself on error envelopes.
    #[serde(rename = "statusCode")]
    pub status_code: Option<u16>,

    pub redirect: Option<RedirectInstruction>,
}

/// Page metadata block.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Metatags {
    #[serde(default)]
    pub meta: Vec<MetaTag>,

    #[serde(default)]
    pub link: Vec<LinkTag>,

    pub jsonld: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
}

/// Status messages attached to a page. The backend sends either a bare
/// list or a map keyed by message type ("success", "error", ...).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Messages {
    List(Vec<String>),
    Keyed(BTreeMap<String, Vec<String>>),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Breadcrumb {
    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub url: String,
}

/// A node of the recursive content tree.
///
/// `element` is the dispatch tag. All other fields are renderer-specific
/// props, kept as raw JSON; renderers that understand nested nodes (e.g.
/// a `sections` prop) re-enter the dispatcher themselves.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentNode {
    pub element: String,

    #[serde(flatten)]
    pub props: serde_json::Map<String, Value>,
}

impl ContentNode {
    /// Look up a renderer-specific prop.
    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }
}

/// An embedded redirect instruction.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedirectInstruction {
    pub url: String,

    #[serde(rename = "statusCode")]
    pub status_code: u16,

    #[serde(default)]
    pub external: bool,
}

/// A menu item as the backend serves it, scaffolding fields included.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RawMenuItem {
    pub key: String,
    pub title: String,
    pub description: Option<String>,
    pub uri: String,
    pub alias: String,
    pub external: bool,
    pub absolute: String,
    pub relative: String,
    pub existing: bool,
    pub weight: String,
    pub expanded: bool,
    pub enabled: bool,
    pub uuid: Option<String>,
    pub options: Vec<Value>,
    pub children: Option<Vec<RawMenuItem>>,
}

/// A menu item normalized for rendering: title, one resolved URL, and
/// children. The raw scaffolding (weight, uuid, ...) is dropped here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    pub url: String,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Flatten a raw backend item: `url = relative || alias || uri || "/"`,
    /// where an empty string counts as absent.
    pub fn from_raw(raw: &RawMenuItem) -> Self {
        let url = [&raw.relative, &raw.alias, &raw.uri]
            .into_iter()
            .find(|candidate| !candidate.is_empty())
            .cloned()
            .unwrap_or_else(|| "/".to_string());

        Self {
            title: raw.title.clone(),
            url,
            children: raw
                .children
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(MenuItem::from_raw)
                .collect(),
        }
    }
}

/// Errors from the backend fetch pipeline.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The backend answered 404 without a renderable body.
    #[error("page not found")]
    NotFound,

    /// The backend could not be reached (connect failure or timeout).
    #[error("Service unavailable - could not reach the content backend: {0}")]
    Unavailable(String),

    /// A 2xx response was missing all of title, content, and redirect.
    #[error("malformed API response: {0}")]
    Malformed(String),

    /// The backend answered with an error status. When it supplied an
    /// envelope-shaped body, that body is carried along so the caller can
    /// render the backend's own error page instead of a generic one.
    #[error("backend returned status {status}")]
    Upstream {
        status: u16,
        envelope: Option<Box<PageEnvelope>>,
    },

    /// Anything unexpected on our side of the call.
    #[error("internal error: {0}")]
    Internal(String),
}

impl FetchError {
    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            FetchError::NotFound => 404,
            FetchError::Unavailable(_) => 503,
            FetchError::Malformed(_) => 422,
            FetchError::Upstream { status, .. } => *status,
            FetchError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_deserializes_content_tree() {
        let envelope: PageEnvelope = serde_json::from_value(json!({
            "title": "Page 1",
            "breadcrumbs": [{"label": "Home", "url": "/"}],
            "content": {
                "element": "node--default",
                "body": "<p>hello</p>",
                "sections": {"element": "drupal-markup", "content": "<hr>"}
            }
        }))
        .unwrap();

        let content = envelope.content.unwrap();
        assert_eq!(content.element, "node--default");
        assert_eq!(
            content.prop("sections").and_then(|s| s.get("element")),
            Some(&json!("drupal-markup"))
        );
        assert_eq!(envelope.breadcrumbs.unwrap()[0].label, "Home");
    }

    #[test]
    fn test_messages_accept_both_shapes() {
        let list: Messages = serde_json::from_value(json!(["saved"])).unwrap();
        assert!(matches!(list, Messages::List(ref v) if v.len() == 1));

        let keyed: Messages =
            serde_json::from_value(json!({"error": ["nope"], "success": ["ok"]})).unwrap();
        match keyed {
            Messages::Keyed(map) => assert_eq!(map["error"], vec!["nope".to_string()]),
            Messages::List(_) => panic!("expected keyed messages"),
        }
    }

    #[test]
    fn test_menu_item_url_precedence() {
        let mut raw = RawMenuItem {
            title: "Page 1".to_string(),
            uri: "node/1".to_string(),
            alias: "page-one".to_string(),
            relative: "/node/1".to_string(),
            ..RawMenuItem::default()
        };
        assert_eq!(MenuItem::from_raw(&raw).url, "/node/1");

        raw.relative.clear();
        assert_eq!(MenuItem::from_raw(&raw).url, "page-one");

        raw.alias.clear();
        assert_eq!(MenuItem::from_raw(&raw).url, "node/1");

        raw.uri.clear();
        assert_eq!(MenuItem::from_raw(&raw).url, "/");
    }

    #[test]
    fn test_menu_item_children_are_normalized() {
        let raw = RawMenuItem {
            title: "Parent".to_string(),
            relative: "/parent".to_string(),
            children: Some(vec![RawMenuItem {
                title: "Child".to_string(),
                uri: "parent/child".to_string(),
                ..RawMenuItem::default()
            }]),
            ..RawMenuItem::default()
        };

        let item = MenuItem::from_raw(&raw);
        assert_eq!(item.children.len(), 1);
        assert_eq!(item.children[0].url, "parent/child");
    }

    #[test]
    fn test_fetch_error_status_codes() {
        assert_eq!(FetchError::NotFound.status_code(), 404);
        assert_eq!(FetchError::Unavailable("down".into()).status_code(), 503);
        assert_eq!(FetchError::Malformed("empty".into()).status_code(), 422);
        assert_eq!(
            FetchError::Upstream {
                status: 500,
                envelope: None
            }
            .status_code(),
            500
        );
    }
}
