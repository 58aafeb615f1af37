//! Canonical provider classification.
//!
//! Maps a free-text network-organization string (typically the `org` field of
//! an IP lookup, e.g. "AS16509 Amazon.com, Inc.") to one canonical provider
//! label. Matching is case-insensitive substring containment evaluated in a
//! fixed priority order; the first matching rule wins, so the table order is
//! part of the contract.

/// Catch-all label returned when no rule matches.
pub const OTHER: &str = "Other";

/// Ordered rule table: (keyword, canonical label). First match wins.
const PROVIDER_RULES: &[(&str, &str)] = &[
    ("INET", "INET"),
    ("VNPT", "VNPT"),
    ("VIETTEL", "Viettel"),
    ("FPT", "FPT"),
    ("CLOUDFLARE", "Cloudflare"),
    ("AMAZON", "AWS"),
    ("GOOGLE", "Google"),
    ("MICROSOFT", "Azure"),
];

/// Classifies a free-text organization string into a canonical provider label.
///
/// Pure, total, deterministic. Empty or unrecognized input yields [`OTHER`].
pub fn detect_provider(org: &str) -> &'static str {
    let upper = org.to_uppercase();
    for (keyword, label) in PROVIDER_RULES {
        if upper.contains(keyword) {
            return label;
        }
    }
    OTHER
}
