//! DNS resolution fan-out.
//!
//! Queries a fixed, enumerable set of record types for a domain using
//! `hickory-resolver`. Each type's lookup is independent: a failure or empty
//! answer for one type never blocks the others, and always yields an empty
//! sequence rather than an error.

mod records;

pub use records::lookup_records;

use std::time::Duration;

use futures::future::join_all;
use hickory_resolver::TokioAsyncResolver;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::{Display as DisplayMacro, EnumIter as EnumIterMacro};

/// The fixed set of record types queried for every domain.
///
/// The enum order is the serialization order of the report's `dns` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayMacro, EnumIterMacro)]
pub enum DnsRecordType {
    A,
    AAAA,
    CNAME,
    NS,
    MX,
    TXT,
    PTR,
    SRV,
    SOA,
    CAA,
    DS,
    DNSKEY,
}

impl DnsRecordType {
    /// The wire record type for this label.
    pub(crate) fn wire_type(self) -> hickory_resolver::proto::rr::RecordType {
        use hickory_resolver::proto::rr::RecordType as RT;
        match self {
            DnsRecordType::A => RT::A,
            DnsRecordType::AAAA => RT::AAAA,
            DnsRecordType::CNAME => RT::CNAME,
            DnsRecordType::NS => RT::NS,
            DnsRecordType::MX => RT::MX,
            DnsRecordType::TXT => RT::TXT,
            DnsRecordType::PTR => RT::PTR,
            DnsRecordType::SRV => RT::SRV,
            DnsRecordType::SOA => RT::SOA,
            DnsRecordType::CAA => RT::CAA,
            DnsRecordType::DS => RT::DS,
            DnsRecordType::DNSKEY => RT::DNSKEY,
        }
    }
}

/// Answer values for every record type in the fixed set.
///
/// Every type is always present; absence of answers is an empty sequence,
/// never a missing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecordSet {
    entries: Vec<(DnsRecordType, Vec<String>)>,
}

impl Default for DnsRecordSet {
    fn default() -> Self {
        DnsRecordSet {
            entries: DnsRecordType::iter().map(|rt| (rt, Vec::new())).collect(),
        }
    }
}

impl DnsRecordSet {
    /// Answer values for one record type (empty slice when none).
    pub fn get(&self, record_type: DnsRecordType) -> &[String] {
        self.entries
            .iter()
            .find(|(rt, _)| *rt == record_type)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// Replaces the answer values for one record type.
    pub fn set(&mut self, record_type: DnsRecordType, values: Vec<String>) {
        if let Some(entry) = self.entries.iter_mut().find(|(rt, _)| *rt == record_type) {
            entry.1 = values;
        }
    }

    /// Distinct resolved IP addresses from the A and AAAA answers, in
    /// first-seen answer order.
    pub fn resolved_ips(&self) -> Vec<String> {
        let mut ips: Vec<String> = Vec::new();
        for rt in [DnsRecordType::A, DnsRecordType::AAAA] {
            for value in self.get(rt) {
                if !ips.iter().any(|seen| seen == value) {
                    ips.push(value.clone());
                }
            }
        }
        ips
    }
}

impl Serialize for DnsRecordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (rt, values) in &self.entries {
            map.serialize_entry(&rt.to_string(), values)?;
        }
        map.end()
    }
}

/// Queries every record type in the fixed set concurrently.
///
/// Each lookup carries its own timeout; a slow or failed type yields an empty
/// sequence without delaying the others beyond `per_type_timeout`.
pub async fn resolve_all(
    resolver: &TokioAsyncResolver,
    domain: &str,
    per_type_timeout: Duration,
) -> DnsRecordSet {
    let lookups = DnsRecordType::iter().map(|rt| async move {
        let values =
            match tokio::time::timeout(per_type_timeout, lookup_records(resolver, domain, rt))
                .await
            {
                Ok(values) => values,
                Err(_) => {
                    log::warn!("{rt} lookup timed out for {domain}");
                    Vec::new()
                }
            };
        (rt, values)
    });

    let mut set = DnsRecordSet::default();
    for (rt, values) in join_all(lookups).await {
        set.set(rt, values);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_every_type_empty() {
        let set = DnsRecordSet::default();
        for rt in DnsRecordType::iter() {
            assert!(set.get(rt).is_empty());
        }
    }

    #[test]
    fn serializes_as_map_in_fixed_order() {
        let mut set = DnsRecordSet::default();
        set.set(DnsRecordType::A, vec!["192.0.2.1".into()]);
        let json = serde_json::to_string(&set).unwrap();
        // A must come first and every type must be present.
        assert!(json.starts_with("{\"A\":[\"192.0.2.1\"]"));
        for rt in DnsRecordType::iter() {
            assert!(json.contains(&format!("\"{rt}\":")));
        }
    }

    #[test]
    fn resolved_ips_dedupe_in_first_seen_order() {
        let mut set = DnsRecordSet::default();
        set.set(
            DnsRecordType::A,
            vec!["192.0.2.1".into(), "192.0.2.2".into(), "192.0.2.1".into()],
        );
        set.set(DnsRecordType::AAAA, vec!["2001:db8::1".into()]);
        assert_eq!(
            set.resolved_ips(),
            vec!["192.0.2.1", "192.0.2.2", "2001:db8::1"]
        );
    }
}
