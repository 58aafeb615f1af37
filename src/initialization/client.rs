//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

/// Initializes the shared HTTP client used by the registration, geolocation
/// and site adapters.
///
/// The client-level timeout backstops the per-adapter timeouts; redirects are
/// followed so the site adapter profiles the final response.
pub fn init_client(timeout_seconds: u64) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(concat!("domainscope/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(Arc::new(client))
}
