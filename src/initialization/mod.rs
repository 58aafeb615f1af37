//! Process startup: logger, HTTP client and DNS resolver construction.

mod client;
mod logger;
mod resolver;

pub use client::init_client;
pub use logger::init_logger;
pub use resolver::init_resolver;
