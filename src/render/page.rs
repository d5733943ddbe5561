//! Page rendering orchestration.
//!
//! # Data Flow
//! ```text
//! FETCH (backend client)
//!     → VALIDATE (inside the client, 2xx only)
//!     → REDIRECT? (terminate early, content not rendered)
//!     → RENDER_CHROME (jsonld, messages, breadcrumbs, title)
//!     → RENDER_CONTENT_TREE (registry dispatch, depth-first)
//! ```
//!
//! # Design Decisions
//! - One attempt per request, no retries; failures map straight to views
//! - An upstream error that carries an envelope renders that envelope as
//!   a degraded page under the upstream status code
//! - The menu is fetched per request and degrades to empty chrome

use axum::http::{HeaderMap, StatusCode};
use serde_json::Value;

use crate::backend::types::{Breadcrumb, FetchError, MenuItem, Messages, PageEnvelope};
use crate::backend::validate::resolve_redirect;
use crate::backend::{BackendClient, RedirectDecision};
use crate::config::FrontendConfig;
use crate::render::html::escape_html;
use crate::render::registry::ComponentRegistry;

/// How long the transient success banner stays up, in milliseconds.
/// Presentation only; nothing retries or waits on this.
const MESSAGE_DISMISS_MS: u32 = 3000;

/// Menus deeper than this render flat.
const MENU_MAX_DEPTH: usize = 3;

/// Terminal result of the page pipeline.
#[derive(Debug)]
pub enum PageOutcome {
    /// A full HTML document plus the allow-listed backend headers.
    Rendered {
        html: String,
        status: StatusCode,
        upstream_headers: HeaderMap,
    },
    /// Terminate early with a redirect; content is not rendered.
    Redirect(RedirectDecision),
    /// Dedicated not-found view.
    NotFound,
    /// Generic error view carrying the message.
    Error {
        status: StatusCode,
        message: String,
    },
}

/// Run the pipeline for one request path.
pub async fn render_page(
    client: &BackendClient,
    registry: &ComponentRegistry,
    config: &FrontendConfig,
    path: &str,
    headers: &HeaderMap,
) -> PageOutcome {
    let fetched = match client.fetch_page(path, headers).await {
        Ok(fetched) => fetched,
        Err(FetchError::NotFound) => return PageOutcome::NotFound,
        Err(FetchError::Upstream {
            status,
            envelope: Some(envelope),
        }) => {
            // The backend supplied its own error page; show that instead
            // of a generic view.
            tracing::warn!(path, status, "rendering backend error envelope");
            let menu = client.fetch_menu(&config.backend.menu, headers).await;
            return PageOutcome::Rendered {
                html: render_envelope(&envelope, &menu, registry),
                status: StatusCode::from_u16(status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                upstream_headers: HeaderMap::new(),
            };
        }
        Err(err) => {
            tracing::error!(path, error = %err, "page fetch failed");
            return PageOutcome::Error {
                status: StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message: err.to_string(),
            };
        }
    };

    if let Some(decision) = resolve_redirect(&fetched.envelope) {
        tracing::debug!(path, target = %decision.url, mode = decision.mode.as_str(), "redirecting");
        return PageOutcome::Redirect(decision);
    }

    let menu = client.fetch_menu(&config.backend.menu, headers).await;
    let status = fetched
        .envelope
        .status_code
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::OK);

    PageOutcome::Rendered {
        html: render_envelope(&fetched.envelope, &menu, registry),
        status,
        upstream_headers: fetched.headers,
    }
}

/// Render a validated envelope into a full HTML document.
pub fn render_envelope(
    envelope: &PageEnvelope,
    menu: &[MenuItem],
    registry: &ComponentRegistry,
) -> String {
    let mut main = String::new();

    if let Some(jsonld) = envelope.metatags.as_ref().and_then(|m| m.jsonld.as_ref()) {
        main.push_str(&jsonld_script(jsonld));
    }
    if let Some(Messages::Keyed(messages)) = &envelope.messages {
        // Bare message lists are backend noise; only keyed maps render,
        // matching the page contract.
        for (kind, texts) in messages {
            for text in texts {
                main.push_str(&message_banner(kind, text));
            }
        }
        if messages.contains_key("success") {
            main.push_str(&dismiss_script());
        }
    }
    if let Some(breadcrumbs) = &envelope.breadcrumbs {
        main.push_str(&render_breadcrumbs(breadcrumbs));
    }
    if let Some(title) = &envelope.title {
        main.push_str("<h1 class=\"page-title\">");
        main.push_str(&escape_html(title));
        main.push_str("</h1>");
    }
    if let Some(content) = &envelope.content {
        main.push_str("<div class=\"page-content\">");
        main.push_str(&registry.render_node(content, 0));
        main.push_str("</div>");
    }

    let head_title = meta_content(envelope, "title")
        .or(envelope.title.as_deref())
        .unwrap_or("Untitled");
    let description = meta_content(envelope, "description");

    document(head_title, description, envelope, menu, &main)
}

/// Static not-found view.
pub fn not_found_html() -> String {
    let body = "<h1>404</h1>\
         <h2>Page Not Found</h2>\
         <p>The page you are looking for does not exist or has been moved.</p>\
         <p><a href=\"/\">Go to Homepage</a></p>"
        .to_string();
    shell("Page Not Found", &body)
}

/// Static error view carrying the failure message.
pub fn error_html(message: &str) -> String {
    let body = format!(
        "<h1>Something went wrong</h1><p>{}</p>",
        escape_html(message)
    );
    shell("Error", &body)
}

fn meta_content<'a>(envelope: &'a PageEnvelope, name: &str) -> Option<&'a str> {
    envelope
        .metatags
        .as_ref()?
        .meta
        .iter()
        .find(|tag| tag.name == name)
        .map(|tag| tag.content.as_str())
}

fn jsonld_script(jsonld: &Value) -> String {
    let payload = serde_json::to_string(jsonld)
        .unwrap_or_default()
        // Prevent </script> breakout from backend-controlled data.
        .replace('<', "\\u003c");
    format!("<script type=\"application/ld+json\">{payload}</script>")
}

fn message_banner(kind: &str, text: &str) -> String {
    match kind {
        "success" => format!(
            "<div class=\"message message-success\" data-autodismiss-ms=\"{MESSAGE_DISMISS_MS}\">{}</div>",
            escape_html(text)
        ),
        "error" => format!(
            "<div class=\"message message-error\">{}</div>",
            escape_html(text)
        ),
        _ => format!(
            "<div class=\"message message-status\">{}</div>",
            escape_html(text)
        ),
    }
}

fn dismiss_script() -> String {
    format!(
        "<script>setTimeout(function(){{\
         document.querySelectorAll('[data-autodismiss-ms]').forEach(function(m){{m.remove();}});\
         }},{MESSAGE_DISMISS_MS});</script>"
    )
}

fn render_breadcrumbs(breadcrumbs: &[Breadcrumb]) -> String {
    if breadcrumbs.is_empty() {
        return String::new();
    }
    let mut out = String::from("<nav aria-label=\"breadcrumb\"><ol class=\"breadcrumbs\">");
    for (index, crumb) in breadcrumbs.iter().enumerate() {
        out.push_str("<li><a href=\"");
        out.push_str(&escape_html(&crumb.url));
        out.push_str("\">");
        out.push_str(&escape_html(&crumb.label));
        out.push_str("</a>");
        if index + 1 < breadcrumbs.len() {
            out.push_str("<span class=\"separator\">/</span>");
        }
        out.push_str("</li>");
    }
    out.push_str("</ol></nav>");
    out
}

fn render_menu(items: &[MenuItem], depth: usize) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ul class=\"menu\">");
    for item in items {
        let url = if item.url.is_empty() { "#" } else { &item.url };
        let title = if item.title.is_empty() {
            "Untitled"
        } else {
            &item.title
        };
        out.push_str("<li><a href=\"");
        out.push_str(&escape_html(url));
        out.push_str("\">");
        out.push_str(&escape_html(title));
        out.push_str("</a>");
        if !item.children.is_empty() && depth < MENU_MAX_DEPTH {
            out.push_str(&render_menu(&item.children, depth + 1));
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    out
}

/// Full document for a backend-sourced page.
fn document(
    head_title: &str,
    description: Option<&str>,
    envelope: &PageEnvelope,
    menu: &[MenuItem],
    main: &str,
) -> String {
    let mut head = String::new();
    head.push_str("<title>");
    head.push_str(&escape_html(head_title));
    head.push_str("</title>");
    if let Some(description) = description {
        head.push_str("<meta name=\"description\" content=\"");
        head.push_str(&escape_html(description));
        head.push_str("\">");
    }
    if let Some(metatags) = &envelope.metatags {
        for link in &metatags.link {
            head.push_str("<link rel=\"");
            head.push_str(&escape_html(&link.rel));
            head.push_str("\" href=\"");
            head.push_str(&escape_html(&link.href));
            head.push_str("\">");
        }
    }

    let mut body = String::new();
    let menu_html = render_menu(menu, 0);
    if !menu_html.is_empty() {
        body.push_str("<header><nav class=\"site-menu\">");
        body.push_str(&menu_html);
        body.push_str("</nav></header>");
    }
    body.push_str("<main class=\"page\">");
    body.push_str(main);
    body.push_str("</main>");

    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">{head}</head>\
         <body>{body}</body></html>"
    )
}

/// Minimal document for the static views.
fn shell(head_title: &str, main: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{}</title></head>\
         <body><main class=\"page\">{main}</main></body></html>",
        escape_html(head_title)
    )
}
