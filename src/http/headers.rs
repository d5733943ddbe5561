//! Header allowlist filtering.
//!
//! # Responsibilities
//! - Project client request headers onto the backend-bound allowlist
//! - Project backend response headers onto the client-bound allowlist
//!
//! # Design Decisions
//! - Matching is case-insensitive (allowlist entries are lower-cased)
//! - Absent allow-listed names are silently omitted, never defaulted
//! - Multi-valued headers (e.g. `set-cookie`) keep all their values
//! - Pure functions: no side effects beyond the returned map

use axum::http::header::HeaderName;
use axum::http::HeaderMap;

/// Copy the allow-listed entries of `source` into a new map.
fn filter_headers(source: &HeaderMap, allowlist: &[String]) -> HeaderMap {
    let mut filtered = HeaderMap::new();
    for name in allowlist {
        let Ok(name) = name.to_ascii_lowercase().parse::<HeaderName>() else {
            continue;
        };
        for value in source.get_all(&name) {
            filtered.append(name.clone(), value.clone());
        }
    }
    filtered
}

/// Filter inbound client headers down to the set forwarded upstream.
pub fn filter_request_headers(source: &HeaderMap, allowlist: &[String]) -> HeaderMap {
    filter_headers(source, allowlist)
}

/// Filter backend response headers down to the set passed to the client.
pub fn filter_response_headers(source: &HeaderMap, allowlist: &[String]) -> HeaderMap {
    filter_headers(source, allowlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn allowlist(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_only_allowlisted_headers_pass() {
        let mut source = HeaderMap::new();
        source.insert("cookie", HeaderValue::from_static("session=abc"));
        source.insert("x-internal-secret", HeaderValue::from_static("hunter2"));

        let filtered = filter_request_headers(&source, &allowlist(&["cookie"]));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.get("cookie").unwrap(), "session=abc");
        assert!(filtered.get("x-internal-secret").is_none());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let mut source = HeaderMap::new();
        source.insert("accept-language", HeaderValue::from_static("de"));

        let filtered = filter_request_headers(&source, &allowlist(&["Accept-Language"]));
        assert_eq!(filtered.get("accept-language").unwrap(), "de");
    }

    #[test]
    fn test_absent_names_are_omitted_silently() {
        let source = HeaderMap::new();
        let filtered =
            filter_request_headers(&source, &allowlist(&["cookie", "authorization"]));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let mut source = HeaderMap::new();
        source.insert("etag", HeaderValue::from_static("\"v1\""));
        source.insert("x-powered-by", HeaderValue::from_static("gremlins"));

        let names = allowlist(&["etag", "vary"]);
        let once = filter_response_headers(&source, &names);
        let twice = filter_response_headers(&once, &names);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_multi_valued_headers_keep_all_values() {
        let mut source = HeaderMap::new();
        source.append("set-cookie", HeaderValue::from_static("a=1"));
        source.append("set-cookie", HeaderValue::from_static("b=2"));

        let filtered = filter_response_headers(&source, &allowlist(&["set-cookie"]));
        assert_eq!(filtered.get_all("set-cookie").iter().count(), 2);
    }

    #[test]
    fn test_allowlist_order_does_not_matter() {
        let mut source = HeaderMap::new();
        source.insert("cookie", HeaderValue::from_static("s=1"));
        source.insert("authorization", HeaderValue::from_static("Bearer t"));

        let a = filter_request_headers(&source, &allowlist(&["cookie", "authorization"]));
        let b = filter_request_headers(&source, &allowlist(&["authorization", "cookie"]));
        assert_eq!(a, b);
    }
}
