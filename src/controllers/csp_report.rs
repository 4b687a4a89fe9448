use axum::{body::Bytes, http::StatusCode};
use serde_json::Value;

/// POST /report-violation - Log CSP reports sent by browsers
///
/// Reports arrive as `application/csp-report` or `application/json`, so the
/// body is parsed by hand instead of through the `Json` extractor.
pub async fn report_violation(body: Bytes) -> StatusCode {
    match serde_json::from_slice::<Value>(&body) {
        Ok(report) if !report.is_null() => {
            tracing::warn!(report = %report, "CSP Violation");
        }
        _ => {
            tracing::warn!("CSP Violation: No data received!");
        }
    }

    StatusCode::NO_CONTENT
}
