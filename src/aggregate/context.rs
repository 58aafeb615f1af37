//! Shared lookup context.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

use crate::config::endpoints::RdapRoutes;
use crate::config::{ADAPTER_TIMEOUT_SECS, DEFAULT_IPINFO_BASE, DNS_TYPE_TIMEOUT_SECS};

/// Handles and configuration shared by every aggregation request.
///
/// Carries only clients and read-only configuration — never per-request
/// state. Components are stateless and request-scoped; concurrent adapter
/// invocations write to disjoint fields of the eventual report, so nothing
/// here needs locking.
#[derive(Clone)]
pub struct Sources {
    /// Shared HTTP client for the registration, geolocation and site adapters.
    pub http: Arc<reqwest::Client>,
    /// Shared DNS resolver.
    pub resolver: Arc<TokioAsyncResolver>,
    /// TLD → RDAP endpoint routing.
    pub rdap_routes: Arc<RdapRoutes>,
    /// Base URL of the IP organization/geolocation service.
    pub ipinfo_base: String,
    /// Timeout applied to each adapter call independently.
    pub adapter_timeout: Duration,
    /// Timeout applied to each DNS record-type query.
    pub dns_type_timeout: Duration,
}

impl Sources {
    /// Builds a context with the default upstreams and timeouts.
    pub fn new(http: Arc<reqwest::Client>, resolver: Arc<TokioAsyncResolver>) -> Self {
        Sources {
            http,
            resolver,
            rdap_routes: Arc::new(RdapRoutes::default()),
            ipinfo_base: DEFAULT_IPINFO_BASE.to_string(),
            adapter_timeout: Duration::from_secs(ADAPTER_TIMEOUT_SECS),
            dns_type_timeout: Duration::from_secs(DNS_TYPE_TIMEOUT_SECS),
        }
    }

    /// Overrides the RDAP routing table (tests point this at a mock server).
    pub fn with_rdap_routes(mut self, routes: RdapRoutes) -> Self {
        self.rdap_routes = Arc::new(routes);
        self
    }

    /// Overrides the IP lookup base URL.
    pub fn with_ipinfo_base(mut self, base: &str) -> Self {
        self.ipinfo_base = base.to_string();
        self
    }

    /// Overrides the per-adapter timeout.
    pub fn with_adapter_timeout(mut self, timeout: Duration) -> Self {
        self.adapter_timeout = timeout;
        self
    }

    /// Overrides the per-record-type DNS timeout.
    pub fn with_dns_type_timeout(mut self, timeout: Duration) -> Self {
        self.dns_type_timeout = timeout;
        self
    }
}
