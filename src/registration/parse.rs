//! Registration record normalization.
//!
//! Translates both raw registration formats — structured RDAP and legacy
//! free-text WHOIS — into one [`RegistrationRecord`] shape. Missing fields
//! resolve to the unknown sentinel, never to an error.

use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;
use serde_json::Value;

use super::types::{RawRegistration, RdapResponse};
use crate::models::{DateField, RegistrationRecord};

/// Registrar name, with label synonyms seen across legacy registries.
static REGISTRAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:Registrar Name|Registrar)[ \t]*:[ \t]*(.+?)[ \t\r]*$").unwrap()
});

static CREATED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:Creation Date|Created On|Registered On)[ \t]*:[ \t]*(.+?)[ \t\r]*$")
        .unwrap()
});

static EXPIRES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?:Registry Expiry Date|Expiration Date|Expiry Date)[ \t]*:[ \t]*(.+?)[ \t\r]*$",
    )
    .unwrap()
});

static STATUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:Domain Status|Status)[ \t]*:[ \t]*(.+?)[ \t\r]*$").unwrap()
});

/// Normalizes a raw registration payload, dispatching on its format tag.
pub fn normalize(raw: &RawRegistration) -> RegistrationRecord {
    match raw {
        RawRegistration::Structured(rdap) => normalize_structured(rdap),
        RawRegistration::LegacyText(text) => normalize_legacy_text(text),
        RawRegistration::Absent => RegistrationRecord::default(),
    }
}

fn normalize_structured(rdap: &RdapResponse) -> RegistrationRecord {
    let registrar = rdap
        .entities
        .iter()
        .find(|entity| entity.roles.iter().any(|role| role == "registrar"))
        .and_then(|entity| vcard_formatted_name(&entity.vcard_array));

    RegistrationRecord {
        registrar,
        created: event_date(rdap, "registration"),
        expires: event_date(rdap, "expiration"),
        status: rdap.status.clone(),
    }
}

fn normalize_legacy_text(text: &str) -> RegistrationRecord {
    let registrar = REGISTRAR_RE
        .captures(text)
        .map(|cap| cap[1].to_string())
        .filter(|name| !name.is_empty());

    let created = match CREATED_RE.captures(text) {
        Some(cap) => parse_date_value(&cap[1]),
        None => DateField::Unknown,
    };
    let expires = match EXPIRES_RE.captures(text) {
        Some(cap) => parse_date_value(&cap[1]),
        None => DateField::Unknown,
    };

    // Every status-labeled line, verbatim, in source order.
    let status = STATUS_RE
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect();

    RegistrationRecord {
        registrar,
        created,
        expires,
        status,
    }
}

fn event_date(rdap: &RdapResponse, action: &str) -> DateField {
    match rdap
        .events
        .iter()
        .find(|event| event.event_action == action)
    {
        Some(event) => date_from_value(&event.event_date),
        None => DateField::Unknown,
    }
}

/// Extracts the formatted display name ("fn") from a jCard payload.
///
/// Shape: `["vcard", [["fn", {}, "text", "Example Registrar LLC"], ...]]`.
fn vcard_formatted_name(vcard: &Value) -> Option<String> {
    let entries = vcard.get(1)?.as_array()?;
    entries
        .iter()
        .find(|entry| entry.get(0).and_then(Value::as_str) == Some("fn"))
        .and_then(|entry| entry.get(3))
        .and_then(Value::as_str)
        .map(str::to_string)
        .filter(|name| !name.is_empty())
}

fn date_from_value(value: &Value) -> DateField {
    match value {
        Value::String(raw) => parse_date_value(raw),
        Value::Number(n) => match n.as_i64() {
            Some(secs) => epoch_seconds_to_date(secs)
                .unwrap_or_else(|| DateField::Unparsed(n.to_string())),
            None => DateField::Unparsed(n.to_string()),
        },
        Value::Null => DateField::Unknown,
        other => DateField::Unparsed(other.to_string()),
    }
}

fn epoch_seconds_to_date(secs: i64) -> Option<DateField> {
    DateTime::from_timestamp(secs, 0).map(|dt| DateField::Known(dt.date_naive()))
}

/// Normalizes one raw date value to a calendar date.
///
/// Accepts ISO-8601 timestamps, a handful of legacy WHOIS formats, and epoch
/// seconds. Epoch input is distinguished from ISO strings by format
/// heuristic: exactly ten ASCII digits. A non-empty value that matches no
/// format is preserved as `Unparsed`, never dropped.
pub(crate) fn parse_date_value(raw: &str) -> DateField {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DateField::Unknown;
    }

    if trimmed.len() == 10 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(secs) = trimmed.parse::<i64>() {
            if let Some(date) = epoch_seconds_to_date(secs) {
                return date;
            }
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return DateField::Known(dt.date_naive());
    }

    // Common WHOIS date formats
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
        "%d-%b-%Y",
        "%d/%m/%Y",
    ];
    for format in &formats {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, format) {
            return DateField::Known(dt.date());
        }
        if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, format) {
            return DateField::Known(date);
        }
    }

    DateField::Unparsed(trimmed.to_string())
}
