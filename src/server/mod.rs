//! HTTP report endpoint.
//!
//! Exposes one route, `GET /check?domain=<name>`, which runs the aggregation
//! and correlation passes and serializes the composite report.

mod handlers;

use axum::routing::get;
use axum::Router;

use crate::aggregate::Sources;
use handlers::check_handler;

/// Builds the report router. Split out so tests can drive it without a
/// listener.
pub fn report_router(sources: Sources) -> Router {
    Router::new()
        .route("/check", get(check_handler))
        .with_state(sources)
}

/// Binds the report endpoint and serves it until the process exits.
pub async fn start_server(bind: &str, port: u16, sources: Sources) -> Result<(), anyhow::Error> {
    let app = report_router(sources);

    let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}"))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind report server to {bind}:{port}: {e}"))?;

    log::info!("Domain report API listening on http://{bind}:{port}/check");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Report server error: {e}"))?;

    Ok(())
}
