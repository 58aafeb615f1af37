//! domainscope library: domain signal aggregation and correlation
//!
//! Answers one question for an operator investigating a domain: what is it,
//! who runs it, where does its traffic go, and is anything about it
//! suspicious? Independent signal sources — registration data (RDAP/WHOIS),
//! DNS records, IP-to-organization mapping, TLS certificate metadata and
//! HTTP response fingerprinting — are fanned out to concurrently, normalized
//! into one composite [`DomainReport`], and cross-referenced by a
//! deterministic rule pass that surfaces human-readable alerts.
//!
//! Partial failure of any subset of sources is normal: every adapter
//! downgrades its own failures to an explicit absent value, and the report is
//! always structurally complete.
//!
//! # Example
//!
//! ```no_run
//! use domainscope::{aggregate, correlate, initialization, Sources};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = initialization::init_client(6)?;
//! let resolver = initialization::init_resolver();
//! let sources = Sources::new(client, resolver);
//!
//! let mut report = aggregate(&sources, "example.com").await;
//! report.alerts = correlate(&report);
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

pub mod aggregate;
pub mod config;
pub mod correlate;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod netinfo;
pub mod provider;
pub mod registration;
pub mod server;
pub mod site;
pub mod tls;

// Re-export the public API surface
pub use aggregate::{aggregate, Sources};
pub use correlate::{correlate, correlate_at};
pub use models::{
    CertificateInfo, DateField, DomainReport, NetworkInfo, RegistrationRecord, SiteProfile,
};
pub use provider::detect_provider;
pub use server::start_server;
