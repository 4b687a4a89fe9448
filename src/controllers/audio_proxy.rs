use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, AppResult};

/// Upstream headers passed back to the client.
const PASSTHROUGH_HEADERS: &[&str] = &[
    "content-type",
    "content-length",
    "content-range",
    "accept-ranges",
    "last-modified",
    "etag",
];

#[derive(Debug, Deserialize)]
pub struct AudioProxyQuery {
    #[serde(default)]
    pub url: Option<String>,
}

/// Streams episode audio through this origin so players are not blocked by
/// mixed-content or CORS rules on the podcast host.
pub struct AudioProxyController {
    http_client: reqwest::Client,
}

impl AudioProxyController {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    /// GET /audioproxy/?url=... - Stream upstream audio, forwarding `Range`
    pub async fn stream(
        State(controller): State<Arc<AudioProxyController>>,
        Query(query): Query<AudioProxyQuery>,
        headers: HeaderMap,
    ) -> AppResult<Response> {
        let target = parse_target(query.url.as_deref())?;

        let mut upstream_request = controller.http_client.get(target.clone());
        if let Some(range) = headers.get(header::RANGE) {
            upstream_request = upstream_request.header(reqwest::header::RANGE, range.as_bytes());
        }

        let upstream = upstream_request.send().await.map_err(|e| {
            tracing::warn!(url = %target, error = %e, "Audio upstream request failed");
            AppError::ExternalService(format!("Audio request failed: {}", e))
        })?;

        let status = StatusCode::from_u16(upstream.status().as_u16())
            .map_err(|e| AppError::ExternalService(e.to_string()))?;

        tracing::debug!(url = %target, status = status.as_u16(), "Proxying audio");

        let mut response_headers = HeaderMap::new();
        for &name in PASSTHROUGH_HEADERS {
            let value = upstream
                .headers()
                .get(name)
                .and_then(|v| HeaderValue::from_bytes(v.as_bytes()).ok());
            if let Some(value) = value {
                response_headers.insert(HeaderName::from_static(name), value);
            }
        }
        response_headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );

        let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
        *response.status_mut() = status;
        *response.headers_mut() = response_headers;

        Ok(response)
    }
}

fn parse_target(raw: Option<&str>) -> AppResult<reqwest::Url> {
    let raw = raw
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing audio url".to_string()))?;

    let url = reqwest::Url::parse(raw)
        .map_err(|e| AppError::BadRequest(format!("Invalid audio url: {}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(AppError::BadRequest(format!(
            "Unsupported audio url scheme: {}",
            scheme
        ))),
    }
}
