use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use super::flag_is_set;
use crate::{
    domain::{
        search::{SearchRequest, SearchService, SearchServiceApi},
        shared::ErrorView,
    },
    error::AppResult,
    infrastructure::views::ViewRenderer,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub debug: Option<String>,
}

pub struct SearchController {
    search_service: Arc<SearchService>,
    views: Arc<ViewRenderer>,
}

impl SearchController {
    pub fn new(search_service: Arc<SearchService>, views: Arc<ViewRenderer>) -> Self {
        Self {
            search_service,
            views,
        }
    }

    /// GET /:version/search - Search the podcast directory
    pub async fn show(
        State(controller): State<Arc<SearchController>>,
        Path(version): Path<String>,
        Query(query): Query<SearchQuery>,
    ) -> AppResult<Response> {
        controller.views.ensure_layout(&version)?;

        let request = SearchRequest {
            term: query.term.unwrap_or_default(),
            debug: flag_is_set(&query.debug),
            version,
        };

        let result = controller.search_service.search(&request).await;
        match result {
            Ok(listing) => {
                let template = if request.debug { "search-debug" } else { "search" };
                let page = controller.views.render(template, &request.version, &listing)?;
                Ok(Html(page).into_response())
            }
            Err(e) => controller
                .views
                .render_error(&ErrorView::new(e.to_string(), request.version)),
        }
    }
}
