//! Component registry and element resolution.
//!
//! # Responsibilities
//! - Hold the immutable tag → renderer map, built once at startup
//! - Resolve arbitrary backend-controlled tags with deterministic fallback
//! - Dispatch content nodes to renderers, guarding recursion depth
//!
//! # Design Decisions
//! - Closed set of renderers (a sum type with an explicit fallback path),
//!   not runtime reflection; unknown tags degrade to a visible placeholder
//! - Exact lower-cased match wins; otherwise the single fallback candidate
//!   is "<first segment>--default" (see resolve for why the loop below
//!   collapses to that)
//! - Registry is read-only after construction, safe for concurrent reads

use std::collections::HashMap;

use crate::backend::types::ContentNode;
use crate::render::elements::ElementRenderer;
use crate::render::html::escape_html;

/// Ceiling for content-tree recursion. The tree is backend-controlled
/// and unbounded in principle; past this depth a placeholder is emitted
/// instead of recursing further.
pub const MAX_DEPTH: usize = 32;

/// Immutable map from lower-cased element tag to renderer.
pub struct ComponentRegistry {
    components: HashMap<String, ElementRenderer>,
}

impl ComponentRegistry {
    /// Build the registry with the known element renderers.
    pub fn with_defaults() -> Self {
        let mut components = HashMap::new();
        components.insert("node--default".to_string(), ElementRenderer::NodeDefault);
        components.insert(
            "node-article-full".to_string(),
            ElementRenderer::NodeArticleFull,
        );
        components.insert("drupal-markup".to_string(), ElementRenderer::DrupalMarkup);
        Self { components }
    }

    /// Exact-match lookup. Callers are expected to lower-case the key;
    /// [`resolve`](Self::resolve) does so.
    pub fn get(&self, tag: &str) -> Option<&ElementRenderer> {
        self.components.get(tag)
    }

    /// Resolve a backend-controlled tag to a registered key.
    ///
    /// The exact lower-cased tag wins. Otherwise the tag is split on `-`
    /// and the trailing parts are dropped one by one while probing
    /// `"{first part}--default"`. Since the first part never changes,
    /// the only candidate this ever probes is the first segment plus
    /// `--default`; the loop shape is kept because it is the established
    /// fallback contract for these tags.
    pub fn resolve(&self, tag: &str) -> Option<&str> {
        let name = tag.to_lowercase();

        if let Some((key, _)) = self.components.get_key_value(name.as_str()) {
            return Some(key.as_str());
        }

        let mut parts: Vec<&str> = name.split('-').collect();
        while !parts.is_empty() {
            let candidate = format!("{}--default", parts[0]);
            if let Some((key, _)) = self.components.get_key_value(candidate.as_str()) {
                return Some(key.as_str());
            }
            parts.pop();
        }

        None
    }

    /// Dispatch one content node to its renderer.
    ///
    /// Resolution failures never propagate: an unknown tag renders as an
    /// inline placeholder so sibling content still appears.
    pub fn render_node(&self, node: &ContentNode, depth: usize) -> String {
        if depth >= MAX_DEPTH {
            tracing::warn!(
                element = %node.element,
                depth,
                "content tree exceeds maximum depth, truncating"
            );
            return "<div class=\"component-missing\">Content nested too deeply</div>"
                .to_string();
        }

        match self.resolve(&node.element) {
            Some(key) => {
                let renderer = &self.components[key];
                renderer.render(node, self, depth)
            }
            None => {
                tracing::warn!(element = %node.element, "no component found for element");
                format!(
                    "<div class=\"component-missing\">Component \"{}\" not found</div>",
                    escape_html(&node.element)
                )
            }
        }
    }

    #[cfg(test)]
    fn insert(&mut self, tag: &str, renderer: ElementRenderer) {
        self.components.insert(tag.to_string(), renderer);
    }
}
