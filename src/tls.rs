//! TLS certificate probe.
//!
//! Opens a TLS connection to the domain on port 443, reads the peer
//! certificate's issuer and validity window, and closes the connection. Any
//! failure along the way — resolution, connect, handshake, parsing — yields
//! `None`, never an error: a domain without a working TLS endpoint is a
//! normal observation.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::models::CertificateInfo;

/// Retrieves certificate metadata for a domain, or `None` when the handshake
/// cannot complete within the timeout.
pub async fn fetch_certificate(domain: &str, timeout: Duration) -> Option<CertificateInfo> {
    log::debug!("Attempting TLS probe for domain: {domain}");

    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    let server_name = match ServerName::try_from(domain.to_string()) {
        Ok(name) => name,
        Err(e) => {
            log::warn!("Invalid server name {domain}: {e}");
            return None;
        }
    };

    let sock = match tokio::time::timeout(timeout, TcpStream::connect((domain, 443))).await {
        Ok(Ok(sock)) => sock,
        Ok(Err(e)) => {
            log::warn!("Failed to connect to {domain}:443 - {e}");
            return None;
        }
        Err(_) => {
            log::warn!("TCP connection timeout for {domain}:443");
            return None;
        }
    };

    let connector = TlsConnector::from(Arc::new(config));
    let tls_stream = match tokio::time::timeout(timeout, connector.connect(server_name, sock)).await
    {
        Ok(Ok(stream)) => stream,
        Ok(Err(e)) => {
            log::warn!("TLS handshake failed for {domain}: {e}");
            return None;
        }
        Err(_) => {
            log::warn!("TLS handshake timeout for {domain}");
            return None;
        }
    };

    let (_, session) = tls_stream.get_ref();
    let cert_der = session.peer_certificates().and_then(|certs| certs.first())?;

    let (_, cert) = match x509_parser::parse_x509_certificate(cert_der.as_ref()) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("Failed to parse peer certificate for {domain}: {e}");
            return None;
        }
    };

    let issuer = issuer_organization(&cert);
    let valid_from = asn1_to_naive(&cert.tbs_certificate.validity.not_before);
    let valid_to = asn1_to_naive(&cert.tbs_certificate.validity.not_after);

    log::debug!("TLS certificate info extracted for domain: {domain}");

    Some(CertificateInfo {
        issuer,
        valid_from,
        valid_to,
    })
}

/// Issuer organization name, falling back to the full issuer DN.
fn issuer_organization(cert: &x509_parser::certificate::X509Certificate<'_>) -> Option<String> {
    let issuer = cert.issuer();
    if let Some(org) = issuer
        .iter_organization()
        .next()
        .and_then(|attr| attr.as_str().ok())
    {
        return Some(org.to_string());
    }
    let dn = issuer.to_string();
    if dn.is_empty() {
        None
    } else {
        Some(dn)
    }
}

/// Converts an ASN.1 validity time to a naive datetime via its RFC 2822
/// rendering.
fn asn1_to_naive(time: &x509_parser::time::ASN1Time) -> Option<NaiveDateTime> {
    let rendered = time.to_rfc2822().ok()?;
    NaiveDateTime::parse_from_str(&rendered, "%a, %d %b %Y %H:%M:%S %z").ok()
}
