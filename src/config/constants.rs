//! Configuration constants.

/// Default port for the report API.
pub const DEFAULT_PORT: u16 = 3000;
/// Default bind address for the report API.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

// Network operation timeouts
/// Per-adapter timeout in seconds. Each adapter carries its own timeout so a
/// hung provider cannot stall its siblings.
pub const ADAPTER_TIMEOUT_SECS: u64 = 6;
/// Per-record-type DNS query timeout in seconds. Most DNS queries complete in
/// under a second; failing fast keeps the twelve-type fan-out cheap.
pub const DNS_TYPE_TIMEOUT_SECS: u64 = 3;
/// DNS resolver-level timeout in seconds.
pub const DNS_RESOLVER_TIMEOUT_SECS: u64 = 3;
/// TCP connection timeout in seconds (certificate probe).
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// TLS handshake timeout in seconds (certificate probe).
pub const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 5;

// Correlation
/// Expiration alerts fire when fewer than this many days remain.
pub const EXPIRY_ALERT_DAYS: i64 = 30;

// Site security score penalties (subtracted from 100, floored at 0)
/// Penalty for a missing Strict-Transport-Security header.
pub const SCORE_PENALTY_HSTS: i32 = 10;
/// Penalty for a missing X-Frame-Options header.
pub const SCORE_PENALTY_FRAME_OPTIONS: i32 = 5;
/// Penalty for a missing Content-Security-Policy header.
pub const SCORE_PENALTY_CSP: i32 = 5;
/// Penalty for a missing X-Content-Type-Options header.
pub const SCORE_PENALTY_CONTENT_TYPE_OPTIONS: i32 = 5;

/// Default base URL of the IP organization/geolocation service.
pub const DEFAULT_IPINFO_BASE: &str = "https://ipinfo.io";
