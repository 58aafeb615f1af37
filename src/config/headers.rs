//! HTTP header name constants.

// Security header names checked by the site adapter
/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "strict-transport-security";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "x-frame-options";
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "content-security-policy";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "x-content-type-options";

/// Server header (identifies server software)
pub const HEADER_SERVER: &str = "server";
