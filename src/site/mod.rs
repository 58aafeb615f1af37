//! Site profile adapter.
//!
//! Issues one HTTP GET to the domain, then derives a profile from the
//! response: status, server identification, technology fingerprints, security
//! header posture and a penalty-based score. Any fetch failure yields `None`.

pub mod fingerprints;

pub use fingerprints::{detect_technologies, UNKNOWN_TECHNOLOGY};

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Client;

use crate::config::{
    HEADER_CONTENT_SECURITY_POLICY, HEADER_SERVER, HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_X_CONTENT_TYPE_OPTIONS, HEADER_X_FRAME_OPTIONS, SCORE_PENALTY_CONTENT_TYPE_OPTIONS,
    SCORE_PENALTY_CSP, SCORE_PENALTY_FRAME_OPTIONS, SCORE_PENALTY_HSTS,
};
use crate::models::SiteProfile;

/// Fetches the site at `url` and derives its profile, or `None` when the
/// request fails or times out.
pub async fn fetch_site_profile(client: &Client, url: &str, timeout: Duration) -> Option<SiteProfile> {
    match tokio::time::timeout(timeout, fetch(client, url)).await {
        Ok(profile) => profile,
        Err(_) => {
            log::warn!("Site fetch timed out for {url}");
            None
        }
    }
}

async fn fetch(client: &Client, url: &str) -> Option<SiteProfile> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Site fetch failed for {url}: {e}");
            return None;
        }
    };

    let https = response.url().scheme() == "https";
    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("Failed to read site body for {url}: {e}");
            // Headers alone are still a usable profile.
            String::new()
        }
    };

    Some(profile_from_response(status, &headers, &body, https))
}

/// Derives a profile from response parts. Pure; the adapter's testable core.
pub fn profile_from_response(
    status: u16,
    headers: &HeaderMap,
    body: &str,
    https: bool,
) -> SiteProfile {
    let server = headers
        .get(HEADER_SERVER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let hsts = headers.contains_key(HEADER_STRICT_TRANSPORT_SECURITY);
    let frame_options = headers.contains_key(HEADER_X_FRAME_OPTIONS);
    let csp = headers.contains_key(HEADER_CONTENT_SECURITY_POLICY);
    let content_type_options = headers.contains_key(HEADER_X_CONTENT_TYPE_OPTIONS);

    let mut score: i32 = 100;
    if !hsts {
        score -= SCORE_PENALTY_HSTS;
    }
    if !frame_options {
        score -= SCORE_PENALTY_FRAME_OPTIONS;
    }
    if !csp {
        score -= SCORE_PENALTY_CSP;
    }
    if !content_type_options {
        score -= SCORE_PENALTY_CONTENT_TYPE_OPTIONS;
    }

    SiteProfile {
        status,
        server,
        technologies: detect_technologies(headers, body),
        https,
        hsts,
        frame_options,
        csp,
        content_type_options,
        score: score.max(0) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn all_controls_present_scores_100() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_STRICT_TRANSPORT_SECURITY, HeaderValue::from_static("max-age=63072000"));
        headers.insert(HEADER_X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
        headers.insert(HEADER_CONTENT_SECURITY_POLICY, HeaderValue::from_static("default-src 'self'"));
        headers.insert(HEADER_X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));

        let profile = profile_from_response(200, &headers, "", true);
        assert_eq!(profile.score, 100);
        assert!(profile.hsts && profile.frame_options && profile.csp && profile.content_type_options);
    }

    #[test]
    fn missing_controls_subtract_fixed_penalties() {
        let profile = profile_from_response(200, &HeaderMap::new(), "", true);
        // 100 - 10 (HSTS) - 5 - 5 - 5
        assert_eq!(profile.score, 75);
    }

    #[test]
    fn only_hsts_missing() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
        headers.insert(HEADER_CONTENT_SECURITY_POLICY, HeaderValue::from_static("default-src 'self'"));
        headers.insert(HEADER_X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));

        let profile = profile_from_response(200, &headers, "", true);
        assert_eq!(profile.score, 90);
    }

    #[test]
    fn server_header_and_fingerprints_captured() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_SERVER, HeaderValue::from_static("nginx/1.24.0"));

        let profile = profile_from_response(200, &headers, "<div id=\"wp-content\"></div>", true);
        assert_eq!(profile.server.as_deref(), Some("nginx/1.24.0"));
        assert!(profile.technologies.contains("Nginx"));
        assert!(profile.technologies.contains("WordPress"));
    }
}
