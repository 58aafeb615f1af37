//! Report data model.
//!
//! Everything here is constructed fresh per request and discarded after
//! serialization; there is no persistent store and no cross-request sharing.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

use crate::dns::DnsRecordSet;

/// Sentinel rendered for unknown values in the serialized report.
pub const UNKNOWN_SENTINEL: &str = "Không rõ";

/// A calendar date extracted from a registration record.
///
/// `Unknown` (the source had no value) is distinct from `Unparsed` (the source
/// had a value we could not interpret). Only `Known` dates participate in
/// correlation; an unparsable date must not throw the rest of the record away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateField {
    /// The source carried no value for this date.
    #[default]
    Unknown,
    /// The source carried a value we could not interpret; preserved verbatim.
    Unparsed(String),
    /// A successfully normalized calendar date.
    Known(NaiveDate),
}

impl DateField {
    /// Returns the date if it was successfully normalized.
    pub fn known(&self) -> Option<NaiveDate> {
        match self {
            DateField::Known(date) => Some(*date),
            _ => None,
        }
    }
}

impl Serialize for DateField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DateField::Unknown => serializer.serialize_str(UNKNOWN_SENTINEL),
            DateField::Unparsed(raw) => serializer.serialize_str(raw),
            // dd/mm/yyyy, matching the vi-VN rendering used elsewhere in the report
            DateField::Known(date) => {
                serializer.serialize_str(&date.format("%d/%m/%Y").to_string())
            }
        }
    }
}

/// Serializes an optional string, rendering `None` as the unknown sentinel.
fn ser_or_unknown<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_str(v),
        None => serializer.serialize_str(UNKNOWN_SENTINEL),
    }
}

/// Normalized domain registration data (RDAP or legacy WHOIS text).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationRecord {
    /// Registrar display name; `None` when the source had no usable value.
    #[serde(serialize_with = "ser_or_unknown")]
    pub registrar: Option<String>,
    /// Registration (creation) date.
    pub created: DateField,
    /// Expiration date.
    pub expires: DateField,
    /// Status codes, in source order.
    pub status: Vec<String>,
}

/// Network/organization data for one resolved IP address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInfo {
    /// The IP literal this record describes.
    pub ip: String,
    /// Raw organization/ASN string as reported by the geolocation service.
    #[serde(serialize_with = "ser_or_unknown")]
    pub asn: Option<String>,
    /// Canonical provider label derived from `asn`; `None` when the lookup
    /// failed (absence is not a provider and must not trigger alerts).
    pub provider: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
}

impl NetworkInfo {
    /// A record for an IP whose geolocation lookup produced no data.
    pub fn absent(ip: &str) -> Self {
        NetworkInfo {
            ip: ip.to_string(),
            asn: None,
            provider: None,
            country: None,
            region: None,
            city: None,
        }
    }
}

/// TLS certificate metadata from a completed handshake.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CertificateInfo {
    /// Issuer organization (falls back to the full issuer DN).
    pub issuer: Option<String>,
    pub valid_from: Option<NaiveDateTime>,
    pub valid_to: Option<NaiveDateTime>,
}

/// HTTP response fingerprint of the site served at the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteProfile {
    /// HTTP status code of the response.
    pub status: u16,
    /// `Server` header value, if any.
    pub server: Option<String>,
    /// Detected technology labels. A set: order is insignificant and
    /// duplicates must not appear. Never empty (`"Unknown"` when nothing
    /// matched).
    pub technologies: BTreeSet<String>,
    /// Whether the fetch completed over HTTPS.
    pub https: bool,
    pub hsts: bool,
    pub frame_options: bool,
    pub csp: bool,
    pub content_type_options: bool,
    /// Security score in [0, 100]: 100 minus fixed per-missing-control
    /// penalties, floored at 0.
    pub score: u8,
}

/// The composite report for one domain: every per-source result plus the
/// correlated alerts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainReport {
    pub domain: String,
    pub whois: RegistrationRecord,
    pub dns: DnsRecordSet,
    /// One entry per distinct resolved IP, in first-seen DNS answer order.
    pub ip_networks: Vec<NetworkInfo>,
    pub ssl: Option<CertificateInfo>,
    pub website: Option<SiteProfile>,
    pub alerts: Vec<String>,
}

impl DomainReport {
    /// A structurally complete report with every source absent.
    pub fn empty(domain: &str) -> Self {
        DomainReport {
            domain: domain.to_string(),
            whois: RegistrationRecord::default(),
            dns: DnsRecordSet::default(),
            ip_networks: Vec::new(),
            ssl: None,
            website: None,
            alerts: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_field_serializes_sentinel_and_formats() {
        let unknown = serde_json::to_string(&DateField::Unknown).unwrap();
        assert_eq!(unknown, format!("\"{}\"", UNKNOWN_SENTINEL));

        let raw = serde_json::to_string(&DateField::Unparsed("soonish".into())).unwrap();
        assert_eq!(raw, "\"soonish\"");

        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let known = serde_json::to_string(&DateField::Known(date)).unwrap();
        assert_eq!(known, "\"07/03/2026\"");
    }

    #[test]
    fn registrar_none_renders_sentinel() {
        let record = RegistrationRecord::default();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["registrar"], UNKNOWN_SENTINEL);
        assert_eq!(json["status"], serde_json::json!([]));
    }

    #[test]
    fn empty_report_has_all_top_level_fields() {
        let report = DomainReport::empty("example.com");
        let json = serde_json::to_value(&report).unwrap();
        for field in [
            "domain",
            "whois",
            "dns",
            "ip_networks",
            "ssl",
            "website",
            "alerts",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
        assert!(json["ssl"].is_null());
        assert!(json["website"].is_null());
    }
}
