//! Alert correlation rules.
//!
//! A deterministic, pure pass over a finished report. Rules run in a fixed
//! order — the order of the rules is the order of the alerts — and never
//! short-circuit one another.

use chrono::{NaiveDate, Utc};

use crate::config::EXPIRY_ALERT_DAYS;
use crate::models::DomainReport;
use crate::provider::OTHER;

/// Runs all correlation rules against the report, relative to today.
pub fn correlate(report: &DomainReport) -> Vec<String> {
    correlate_at(report, Utc::now().date_naive())
}

/// Deterministic core of [`correlate`]: rules evaluated against a fixed
/// reference date.
pub fn correlate_at(report: &DomainReport, today: NaiveDate) -> Vec<String> {
    let mut alerts = Vec::new();

    // Rule 1: expiration proximity. Only a successfully parsed date
    // participates; already-expired (negative) day counts are still surfaced.
    if let Some(expires) = report.whois.expires.known() {
        let days = (expires - today).num_days();
        if days < EXPIRY_ALERT_DAYS {
            alerts.push(format!("Domain sắp hết hạn ({days} ngày)"));
        }
    }

    // Rule 2: registrar/hosting mismatch, one alert per mismatching IP. An
    // unknown registrar suppresses the rule; an IP with no provider label
    // (failed lookup) or the "Other" catch-all is skipped.
    if let Some(registrar) = &report.whois.registrar {
        let registrar_upper = registrar.to_uppercase();
        for network in &report.ip_networks {
            let Some(provider) = network.provider.as_deref() else {
                continue;
            };
            if provider != OTHER && !registrar_upper.contains(&provider.to_uppercase()) {
                alerts.push(format!(
                    "Domain đăng ký tại {registrar} nhưng IP thuộc {provider}"
                ));
            }
        }
    }

    alerts
}
