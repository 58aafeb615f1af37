//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, score penalties, defaults)
//! - HTTP security header name constants
//! - The TLD → RDAP endpoint routing table
//! - CLI option types and parsing

mod constants;
pub mod endpoints;
mod headers;
mod types;

pub use constants::*;
pub use headers::*;
pub use types::{LogLevel, Opt};
