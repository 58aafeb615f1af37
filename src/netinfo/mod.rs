//! IP network/organization lookup adapter.
//!
//! Queries an ipinfo.io-style JSON endpoint for one resolved IP and
//! classifies the organization string into a canonical provider label. A
//! failed lookup yields a record with every field absent — absence is not a
//! provider and must not feed the mismatch rule downstream.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::models::NetworkInfo;
use crate::provider::detect_provider;

#[derive(Debug, Deserialize)]
struct IpinfoPayload {
    #[serde(default)]
    org: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    city: Option<String>,
}

/// Looks up organization and location data for one IP address.
pub async fn lookup_network(
    client: &Client,
    base_url: &str,
    ip: &str,
    timeout: Duration,
) -> NetworkInfo {
    match tokio::time::timeout(timeout, fetch(client, base_url, ip)).await {
        Ok(Some(info)) => info,
        Ok(None) => NetworkInfo::absent(ip),
        Err(_) => {
            log::warn!("IP lookup timed out for {ip}");
            NetworkInfo::absent(ip)
        }
    }
}

async fn fetch(client: &Client, base_url: &str, ip: &str) -> Option<NetworkInfo> {
    let url = format!("{}/{}/json", base_url.trim_end_matches('/'), ip);
    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("IP lookup failed for {ip}: {e}");
            return None;
        }
    };
    if !response.status().is_success() {
        log::warn!("IP lookup for {ip} returned {}", response.status());
        return None;
    }
    let payload: IpinfoPayload = match response.json().await {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("Malformed IP lookup payload for {ip}: {e}");
            return None;
        }
    };

    // The lookup succeeded; an empty org string still classifies (to "Other").
    let provider = detect_provider(payload.org.as_deref().unwrap_or("")).to_string();

    Some(NetworkInfo {
        ip: ip.to_string(),
        asn: payload.org,
        provider: Some(provider),
        country: payload.country,
        region: payload.region,
        city: payload.city,
    })
}
