//! DNS resolver initialization.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver used for the record-type fan-out.
///
/// Uses the default resolver configuration with aggressive timeouts so slow
/// or unresponsive DNS servers fail fast instead of stalling a request.
pub fn init_resolver() -> Arc<TokioAsyncResolver> {
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(crate::config::DNS_RESOLVER_TIMEOUT_SECS);
    opts.attempts = 2;
    // Prevent search-domain appending; queries are for exact names only.
    opts.ndots = 0;

    Arc::new(TokioAsyncResolver::tokio(ResolverConfig::default(), opts))
}
