use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
};
use serde_json::json;
use std::sync::Arc;

use crate::{error::AppResult, infrastructure::views::ViewRenderer};

/// Version every bare `/` request lands on.
pub const DEFAULT_VERSION_PATH: &str = "/v4/";

/// GET / - Always 302 to the default version
pub async fn redirect_to_default_version() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, DEFAULT_VERSION_PATH)])
}

/// GET /:version - Landing page in the requested layout
pub async fn show(
    State(views): State<Arc<ViewRenderer>>,
    Path(version): Path<String>,
) -> AppResult<Html<String>> {
    let page = views.render("index", &version, &json!({ "layout": &version }))?;
    Ok(Html(page))
}
