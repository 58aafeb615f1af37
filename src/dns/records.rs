//! Per-type DNS record queries.

use hickory_resolver::TokioAsyncResolver;

use super::DnsRecordType;

/// Queries one record type for a domain.
///
/// Returns the answer values as strings, in answer order. Every failure mode
/// — no records, NXDOMAIN, timeout, network error — yields an empty vector:
/// absence of a type is data, not an error, and one type's failure must not
/// affect its siblings.
pub async fn lookup_records(
    resolver: &TokioAsyncResolver,
    domain: &str,
    record_type: DnsRecordType,
) -> Vec<String> {
    match resolver.lookup(domain, record_type.wire_type()).await {
        Ok(lookup) => lookup
            .iter()
            .map(|rdata| rdata.to_string())
            .collect(),
        Err(e) => {
            let error_msg = e.to_string();
            // "no records found" / NXDomain is the expected empty case; only
            // log real failures.
            if !error_msg.contains("no records found") && !error_msg.contains("NXDomain") {
                if error_msg.contains("timeout") || error_msg.contains("timed out") {
                    log::warn!("{record_type} record lookup timed out for {domain}: {e}");
                } else {
                    log::warn!("Failed to lookup {record_type} records for {domain}: {e}");
                }
            }
            Vec::new()
        }
    }
}
