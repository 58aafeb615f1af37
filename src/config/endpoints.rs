//! TLD → RDAP endpoint routing.
//!
//! Process-wide read-only configuration: built once, never mutated per
//! request. Registries with dedicated RDAP services are matched exactly on
//! the domain's top-level label; everything else goes to a generic aggregator
//! endpoint.

use std::collections::HashMap;

/// Generic RDAP aggregator used for TLDs without a dedicated route.
pub const FALLBACK_RDAP_BASE: &str = "https://rdap.org/domain";

/// Built-in routes: (TLD, endpoint base). The domain is appended as the last
/// path segment.
const BUILTIN_ROUTES: &[(&str, &str)] = &[
    ("com", "https://rdap.verisign.com/com/v1/domain"),
    ("net", "https://rdap.verisign.com/net/v1/domain"),
    ("org", "https://rdap.publicinterestregistry.org/rdap/domain"),
    ("info", "https://rdap.identitydigital.services/rdap/domain"),
    ("dev", "https://pubapi.registry.google/rdap/domain"),
    ("app", "https://pubapi.registry.google/rdap/domain"),
];

/// Immutable TLD → RDAP endpoint mapping.
#[derive(Debug, Clone)]
pub struct RdapRoutes {
    table: HashMap<String, String>,
    fallback: String,
}

impl Default for RdapRoutes {
    fn default() -> Self {
        RdapRoutes {
            table: BUILTIN_ROUTES
                .iter()
                .map(|(tld, base)| (tld.to_string(), base.to_string()))
                .collect(),
            fallback: FALLBACK_RDAP_BASE.to_string(),
        }
    }
}

impl RdapRoutes {
    /// A routing table that sends every TLD to one base URL. Used by tests to
    /// point the registration adapter at a mock server.
    pub fn single(base: &str) -> Self {
        RdapRoutes {
            table: HashMap::new(),
            fallback: base.to_string(),
        }
    }

    /// Resolves the full RDAP URL for a domain by its top-level label.
    /// Unmatched TLDs fall back to the generic endpoint.
    pub fn endpoint_for(&self, domain: &str) -> String {
        let tld = domain
            .trim_end_matches('.')
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        let base = self.table.get(&tld).unwrap_or(&self.fallback);
        format!("{}/{}", base.trim_end_matches('/'), domain)
    }
}
