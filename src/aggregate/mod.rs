//! Report aggregation.
//!
//! Fans out to every source adapter concurrently and joins the results into
//! one composite report. The only ordering dependency is DNS before the
//! per-IP geolocation lookups, which consume the resolved addresses. Each
//! adapter carries its own timeout and downgrades its failures to an absent
//! value, so no single slow or broken source can fail — or stall — the whole
//! request.

mod context;

pub use context::Sources;

use futures::future::join_all;

use crate::models::DomainReport;
use crate::{dns, netinfo, registration, site, tls};

/// Aggregates every signal source for one domain into a composite report.
///
/// Always returns a structurally complete report; fields whose source
/// produced nothing are set to their unknown/absent representation. Alerts
/// are left empty — correlation is a separate, pure pass
/// ([`crate::correlate::correlate`]).
pub async fn aggregate(sources: &Sources, domain: &str) -> DomainReport {
    log::info!("Aggregating report for domain: {domain}");

    // DNS must complete (or exhaust its per-type timeouts) before the
    // IP-dependent lookups run; everything else is independent.
    let dns_then_networks = async {
        let dns = dns::resolve_all(&sources.resolver, domain, sources.dns_type_timeout).await;
        let ips = dns.resolved_ips();
        // Zero resolved IPs skips geolocation entirely; that is not a failure.
        let lookups = ips.iter().map(|ip| {
            netinfo::lookup_network(&sources.http, &sources.ipinfo_base, ip, sources.adapter_timeout)
        });
        let ip_networks = join_all(lookups).await;
        (dns, ip_networks)
    };

    let site_url = format!("https://{domain}/");
    let ((dns, ip_networks), whois, ssl, website) = tokio::join!(
        dns_then_networks,
        registration::fetch_registration(
            &sources.http,
            &sources.rdap_routes,
            domain,
            sources.adapter_timeout,
        ),
        tls::fetch_certificate(domain, sources.adapter_timeout),
        site::fetch_site_profile(
            &sources.http,
            &site_url,
            sources.adapter_timeout,
        ),
    );

    DomainReport {
        domain: domain.to_string(),
        whois,
        dns,
        ip_networks,
        ssl,
        website,
        alerts: Vec::new(),
    }
}
