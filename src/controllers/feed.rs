use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use super::flag_is_set;
use crate::{
    domain::{
        feed::{decode_feed_url, FeedRequest, FeedService, FeedServiceApi, FeedView, INVALID_RSS_URL},
        shared::ErrorView,
    },
    error::{AppError, AppResult},
    infrastructure::views::ViewRenderer,
};

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub debug: Option<String>,
    #[serde(default)]
    pub json: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

pub struct FeedController {
    feed_service: Arc<FeedService>,
    views: Arc<ViewRenderer>,
}

impl FeedController {
    pub fn new(feed_service: Arc<FeedService>, views: Arc<ViewRenderer>) -> Self {
        Self {
            feed_service,
            views,
        }
    }

    /// GET /:version/feed - Render a feed, its debug view, or its JSON
    pub async fn show(
        State(controller): State<Arc<FeedController>>,
        Path(version): Path<String>,
        Query(query): Query<FeedQuery>,
    ) -> AppResult<Response> {
        // JSON output has no layout; only HTML responses need a known one.
        let json = flag_is_set(&query.json);
        if !json {
            controller.views.ensure_layout(&version)?;
        }

        let Some(raw_url) = query.url.filter(|url| !url.is_empty()) else {
            return controller
                .views
                .render_error(&ErrorView::new(INVALID_RSS_URL, version));
        };

        let request = FeedRequest {
            url: decode_feed_url(&raw_url).into_owned(),
            size: query.size,
            debug: flag_is_set(&query.debug),
            json,
            version,
        };

        let result = controller.feed_service.load_feed(&request).await;
        match result {
            Ok(view) if request.json => json_response(&view),
            Ok(view) => {
                let template = if request.debug { "feed-debug" } else { "feed" };
                let page = controller.views.render(template, &request.version, &view)?;
                Ok(Html(page).into_response())
            }
            Err(e) => controller.views.render_error(
                &ErrorView::new(e.to_string(), request.version).with_url(request.url),
            ),
        }
    }
}

/// Pretty-printed (two-space) JSON body.
fn json_response(view: &FeedView) -> AppResult<Response> {
    let body = serde_json::to_string_pretty(view)
        .map_err(|e| AppError::Internal(format!("Failed to serialize feed: {}", e)))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        body,
    )
        .into_response())
}
