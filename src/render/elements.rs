//! Element renderers for the known custom-elements tags.
//!
//! Each variant maps one registered tag to HTML output. Renderers that
//! understand nested nodes (the `sections` prop) re-enter the registry
//! dispatch with an incremented depth, so resolution is re-entrant per
//! node.

use serde_json::Value;

use crate::backend::types::ContentNode;
use crate::render::html::{escape_html, join_markup};
use crate::render::registry::ComponentRegistry;

/// The closed set of renderers the registry can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRenderer {
    /// Generic node: image, body markup, optional nested sections.
    NodeDefault,
    /// Full article view: adds a heading over the generic node layout.
    NodeArticleFull,
    /// Raw markup pass-through.
    DrupalMarkup,
}

impl ElementRenderer {
    /// Render a content node's props to HTML.
    pub fn render(
        &self,
        node: &ContentNode,
        registry: &ComponentRegistry,
        depth: usize,
    ) -> String {
        match self {
            ElementRenderer::NodeDefault => render_node_default(node, registry, depth),
            ElementRenderer::NodeArticleFull => render_node_article(node, registry, depth),
            ElementRenderer::DrupalMarkup => render_drupal_markup(node),
        }
    }
}

fn render_node_default(node: &ContentNode, registry: &ComponentRegistry, depth: usize) -> String {
    let mut out = String::from("<div class=\"node\">");
    push_image(&mut out, node);
    if let Some(body) = node.prop("body") {
        out.push_str("<div class=\"prose\">");
        out.push_str(&join_markup(body));
        out.push_str("</div>");
    }
    push_sections(&mut out, node, registry, depth);
    out.push_str("</div>");
    out
}

fn render_node_article(node: &ContentNode, registry: &ComponentRegistry, depth: usize) -> String {
    let mut out = String::from("<div class=\"node node-article\">");
    if let Some(title) = node.prop("title").and_then(Value::as_str) {
        out.push_str("<h2>Article: ");
        out.push_str(&escape_html(title));
        out.push_str("</h2>");
    }
    push_image(&mut out, node);
    if let Some(body) = node.prop("body") {
        out.push_str("<div class=\"prose slot-data\">");
        out.push_str(&join_markup(body));
        out.push_str("</div>");
    }
    push_sections(&mut out, node, registry, depth);
    out.push_str("</div>");
    out
}

fn render_drupal_markup(node: &ContentNode) -> String {
    let content = node.prop("content").and_then(Value::as_str).unwrap_or("");
    format!("<div class=\"drupal-markup\">{content}</div>")
}

/// The `image` prop carries pre-rendered markup under `content`.
fn push_image(out: &mut String, node: &ContentNode) {
    if let Some(image) = node
        .prop("image")
        .and_then(|image| image.get("content"))
        .and_then(Value::as_str)
    {
        out.push_str("<div class=\"node-image\">");
        out.push_str(image);
        out.push_str("</div>");
    }
}

/// A `sections` prop is a nested content node; dispatch it through the
/// registry again.
fn push_sections(out: &mut String, node: &ContentNode, registry: &ComponentRegistry, depth: usize) {
    let Some(sections) = node.prop("sections") else {
        return;
    };
    match serde_json::from_value::<ContentNode>(sections.clone()) {
        Ok(child) => {
            out.push_str("<div class=\"node-sections\">");
            out.push_str(&registry.render_node(&child, depth + 1));
            out.push_str("</div>");
        }
        Err(_) => {
            tracing::warn!(element = %node.element, "sections prop is not a content node");
            out.push_str("<div class=\"component-missing\">Component element is missing</div>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> ContentNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_node_default_renders_body_markup_raw() {
        let registry = ComponentRegistry::with_defaults();
        let html = registry.render_node(
            &node(json!({"element": "node--default", "body": "<p>hello</p>"})),
            0,
        );
        assert!(html.contains("<p>hello</p>"));
    }

    #[test]
    fn test_node_default_joins_body_array() {
        let registry = ComponentRegistry::with_defaults();
        let html = registry.render_node(
            &node(json!({"element": "node--default", "body": ["<p>a</p>", "<p>b</p>"]})),
            0,
        );
        assert!(html.contains("<p>a</p><p>b</p>"));
    }

    #[test]
    fn test_article_escapes_title() {
        let registry = ComponentRegistry::with_defaults();
        let html = registry.render_node(
            &node(json!({"element": "node-article-full", "title": "<b>x</b>"})),
            0,
        );
        assert!(html.contains("Article: &lt;b&gt;x&lt;/b&gt;"));
    }

    #[test]
    fn test_sections_recurse_through_dispatch() {
        let registry = ComponentRegistry::with_defaults();
        let html = registry.render_node(
            &node(json!({
                "element": "node--default",
                "sections": {"element": "drupal-markup", "content": "<hr>"}
            })),
            0,
        );
        assert!(html.contains("<div class=\"drupal-markup\"><hr></div>"));
    }

    #[test]
    fn test_unknown_nested_element_degrades_inline() {
        let registry = ComponentRegistry::with_defaults();
        let html = registry.render_node(
            &node(json!({
                "element": "node--default",
                "body": "<p>still here</p>",
                "sections": {"element": "widget-unknown"}
            })),
            0,
        );
        // Sibling content survives; the nested failure is a placeholder.
        assert!(html.contains("<p>still here</p>"));
        assert!(html.contains("Component \"widget-unknown\" not found"));
    }
}
