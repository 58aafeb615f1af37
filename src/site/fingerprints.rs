//! Technology fingerprint markers.
//!
//! Detection is presence-of-marker-substring over the response body and a
//! few identifying headers, matched case-insensitively. The marker table is
//! deliberately small and static; community rulesets are out of scope here.

use std::collections::BTreeSet;

use reqwest::header::HeaderMap;

/// Label emitted when no fingerprint matches. The technology set is never
/// empty.
pub const UNKNOWN_TECHNOLOGY: &str = "Unknown";

/// Body markers: (marker substring, technology label). Markers are matched
/// against the lowercased body.
const BODY_MARKERS: &[(&str, &str)] = &[
    ("wp-content", "WordPress"),
    ("wp-includes", "WordPress"),
    ("/sites/default/files", "Drupal"),
    ("joomla", "Joomla"),
    ("cdn.shopify.com", "Shopify"),
    ("__next_data__", "Next.js"),
    ("data-reactroot", "React"),
    ("ng-version", "Angular"),
    ("data-v-app", "Vue.js"),
    ("static.parastorage.com", "Wix"),
];

/// Header markers: (header name, marker substring, technology label).
const HEADER_MARKERS: &[(&str, &str, &str)] = &[
    ("server", "cloudflare", "Cloudflare"),
    ("server", "nginx", "Nginx"),
    ("server", "apache", "Apache"),
    ("server", "microsoft-iis", "IIS"),
    ("server", "litespeed", "LiteSpeed"),
    ("x-powered-by", "php", "PHP"),
    ("x-powered-by", "express", "Express"),
    ("x-powered-by", "asp.net", "ASP.NET"),
    ("x-generator", "drupal", "Drupal"),
];

/// Detects technology labels from response headers and body.
///
/// Returns a set (order-insensitive, no duplicates); `{"Unknown"}` when
/// nothing matched.
pub fn detect_technologies(headers: &HeaderMap, body: &str) -> BTreeSet<String> {
    let mut technologies = BTreeSet::new();
    let body_lower = body.to_lowercase();

    for (marker, label) in BODY_MARKERS {
        if body_lower.contains(marker) {
            technologies.insert(label.to_string());
        }
    }

    for (header, marker, label) in HEADER_MARKERS {
        let value = headers
            .get(*header)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if value.to_lowercase().contains(marker) {
            technologies.insert(label.to_string());
        }
    }

    if technologies.is_empty() {
        technologies.insert(UNKNOWN_TECHNOLOGY.to_string());
    }
    technologies
}
