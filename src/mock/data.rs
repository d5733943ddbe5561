//! Fixture data for the mock content API.

use serde_json::{json, Value};

/// Envelope fixture for a page path (without leading slash), if known.
pub fn page_fixture(path: &str) -> Option<Value> {
    match path {
        "" | "/" => Some(json!({
            "title": "Welcome",
            "messages": [],
            "breadcrumbs": [],
            "metatags": {
                "meta": [
                    {"name": "title", "content": "Home | Decoupled Demo"},
                    {"name": "description", "content": "Demo front page served by the mock content API"}
                ],
                "link": [
                    {"rel": "canonical", "href": "http://localhost:3000/"}
                ]
            },
            "content": {
                "element": "node--default",
                "title": "Welcome",
                "body": "<p>This is the front page served by the mock content API.</p>"
            }
        })),
        "node/1" => Some(page("Page 1", "node/1", "This is the first example page.")),
        "node/2" => Some(page("Page 2", "node/2", "This is the second example page.")),
        "node/3" => Some(page("Page 3", "node/3", "This is the third example page.")),
        _ => None,
    }
}

fn page(title: &str, path: &str, description: &str) -> Value {
    json!({
        "title": title,
        "messages": [],
        "breadcrumbs": [
            {"frontpage": true, "url": "/", "label": "Home"}
        ],
        "metatags": {
            "meta": [
                {"name": "title", "content": format!("{title} | Decoupled Demo")},
                {"name": "description", "content": description}
            ],
            "link": [
                {"rel": "canonical", "href": format!("http://localhost:3000/{path}")}
            ]
        },
        "content": {
            "element": "node--default",
            "title": title,
            "body": format!("<p>{description}</p><p>Fetched from the mock content API.</p>")
        }
    })
}

/// The fixed 404 error envelope.
pub fn not_found_fixture() -> Value {
    json!({
        "title": "Page not found",
        "messages": {
            "error": ["The requested page could not be found."]
        },
        "content": {
            "element": "node--default",
            "title": "Page not found",
            "body": "<p>The page you are looking for does not exist.</p>"
        },
        "statusCode": 404
    })
}

/// Raw menu fixture for a menu name; unknown names get an empty menu.
pub fn menu_fixture(name: &str) -> Value {
    if name != "main" {
        return json!([]);
    }
    json!([
        {
            "key": "standard.front_page",
            "title": "Home",
            "description": "",
            "uri": "",
            "alias": "",
            "external": false,
            "absolute": "http://localhost:3000/",
            "relative": "/",
            "existing": true,
            "weight": "0",
            "expanded": false,
            "enabled": true,
            "uuid": null,
            "options": []
        },
        {
            "key": "node-1-menu-item",
            "title": "Page 1",
            "description": null,
            "uri": "node/1",
            "alias": "node/1",
            "external": false,
            "absolute": "http://localhost:3000/node/1",
            "relative": "/node/1",
            "existing": true,
            "weight": "1",
            "expanded": false,
            "enabled": true,
            "uuid": "aa9f3167-a1b0-4f5b-b088-33cf753a9331",
            "options": []
        },
        {
            "key": "node-2-menu-item",
            "title": "Page 2",
            "description": null,
            "uri": "node/2",
            "alias": "node/2",
            "external": false,
            "absolute": "http://localhost:3000/node/2",
            "relative": "/node/2",
            "existing": true,
            "weight": "2",
            "expanded": false,
            "enabled": true,
            "uuid": "c7b2e697-e61c-4787-870f-4d3622355382",
            "options": []
        },
        {
            "key": "node-3-menu-item",
            "title": "Page 3",
            "description": null,
            "uri": "node/3",
            "alias": "node/3",
            "external": false,
            "absolute": "http://localhost:3000/node/3",
            "relative": "/node/3",
            "existing": true,
            "weight": "3",
            "expanded": false,
            "enabled": true,
            "uuid": "d8a3f789-b2c1-4d56-9012-45ef67890abc",
            "options": []
        }
    ])
}
