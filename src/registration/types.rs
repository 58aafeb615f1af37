//! Raw registration payloads.

use serde::Deserialize;
use serde_json::Value;

/// Raw registration data as returned by an upstream registry, tagged by
/// format. Normalization dispatches on the tag rather than probing optional
/// fields.
#[derive(Debug, Clone)]
pub enum RawRegistration {
    /// Structured RDAP JSON.
    Structured(RdapResponse),
    /// Unstructured legacy WHOIS text.
    LegacyText(String),
    /// The upstream produced no usable data. Absence is data, not a failure.
    Absent,
}

/// The subset of an RDAP domain response the normalizer consumes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RdapResponse {
    #[serde(default)]
    pub entities: Vec<RdapEntity>,
    #[serde(default)]
    pub events: Vec<RdapEvent>,
    #[serde(default)]
    pub status: Vec<String>,
}

/// An RDAP entity; the registrar is the one whose roles contain "registrar".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RdapEntity {
    #[serde(default)]
    pub roles: Vec<String>,
    /// jCard payload; left loosely typed since we only need the "fn"
    /// (formatted name) entry.
    #[serde(rename = "vcardArray", default)]
    pub vcard_array: Value,
}

/// An RDAP event; registration/expiration dates are events by action label.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RdapEvent {
    #[serde(rename = "eventAction", default)]
    pub event_action: String,
    /// ISO-8601 string in practice, but some registries emit epoch seconds.
    #[serde(rename = "eventDate", default)]
    pub event_date: Value,
}
