//! Registration (WHOIS/RDAP) lookup adapter.
//!
//! Resolves the upstream registry endpoint from the domain's top-level label
//! (with a generic fallback), fetches the registration record, and normalizes
//! whichever format comes back. Total from the caller's perspective: every
//! failure mode downgrades to the absent record, never an error.

pub mod parse;
pub mod types;

pub use parse::normalize;
pub use types::{RawRegistration, RdapResponse};

use std::time::Duration;

use reqwest::Client;

use crate::config::endpoints::RdapRoutes;
use crate::models::RegistrationRecord;

/// Fetches and normalizes registration data for a domain.
pub async fn fetch_registration(
    client: &Client,
    routes: &RdapRoutes,
    domain: &str,
    timeout: Duration,
) -> RegistrationRecord {
    let raw = match tokio::time::timeout(timeout, fetch_raw(client, routes, domain)).await {
        Ok(raw) => raw,
        Err(_) => {
            log::warn!("Registration lookup timed out for {domain}");
            RawRegistration::Absent
        }
    };
    normalize(&raw)
}

async fn fetch_raw(client: &Client, routes: &RdapRoutes, domain: &str) -> RawRegistration {
    let url = routes.endpoint_for(domain);
    log::debug!("Registration lookup for {domain} via {url}");

    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Registration lookup failed for {domain}: {e}");
            return RawRegistration::Absent;
        }
    };

    if !response.status().is_success() {
        // 404 here just means the registry has no record; normal outcome.
        log::debug!(
            "Registration lookup for {domain} returned {}",
            response.status()
        );
        return RawRegistration::Absent;
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("Failed to read registration response for {domain}: {e}");
            return RawRegistration::Absent;
        }
    };

    tag_body(domain, &body)
}

/// Tags a response body as structured RDAP or legacy free text.
fn tag_body(domain: &str, body: &str) -> RawRegistration {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return RawRegistration::Absent;
    }

    if trimmed.starts_with('{') {
        match serde_json::from_str::<RdapResponse>(trimmed) {
            Ok(rdap) => return RawRegistration::Structured(rdap),
            Err(e) => {
                log::warn!("Malformed RDAP payload for {domain}: {e}");
                return RawRegistration::Absent;
            }
        }
    }

    RawRegistration::LegacyText(trimmed.to_string())
}
