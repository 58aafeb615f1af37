//! Report endpoint handlers.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::aggregate::{aggregate, Sources};
use crate::correlate::correlate;

#[derive(Debug, Deserialize)]
pub(crate) struct CheckParams {
    #[serde(default)]
    domain: Option<String>,
}

/// `GET /check?domain=<name>`
///
/// A missing or empty domain is the only client error; no adapters run for
/// it. Partial source failures never surface here — they are already folded
/// into the report as absent fields.
pub(crate) async fn check_handler(
    State(sources): State<Sources>,
    Query(params): Query<CheckParams>,
) -> Response {
    let domain = params.domain.as_deref().map(str::trim).unwrap_or("");
    if domain.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Thiếu domain" })))
            .into_response();
    }

    let mut report = aggregate(&sources, domain).await;
    report.alerts = correlate(&report);

    (StatusCode::OK, Json(report)).into_response()
}
