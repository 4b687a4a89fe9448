pub mod helpers;

use crate::domain::shared::ErrorView;
use crate::error::{AppError, AppResult};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use handlebars::{Handlebars, TemplateError};
use serde::Serialize;

const LAYOUTS: &[(&str, &str)] = &[
    ("v1", include_str!("../../../templates/layouts/v1.hbs")),
    ("v2", include_str!("../../../templates/layouts/v2.hbs")),
    ("v3", include_str!("../../../templates/layouts/v3.hbs")),
    ("v4", include_str!("../../../templates/layouts/v4.hbs")),
];

const VIEWS: &[(&str, &str)] = &[
    ("index", include_str!("../../../templates/index.hbs")),
    ("feed", include_str!("../../../templates/feed.hbs")),
    ("feed-debug", include_str!("../../../templates/feed-debug.hbs")),
    ("search", include_str!("../../../templates/search.hbs")),
    ("search-debug", include_str!("../../../templates/search-debug.hbs")),
    ("error", include_str!("../../../templates/error.hbs")),
];

/// Data handed to a layout: the view's own data plus the rendered view.
#[derive(Serialize)]
struct LayoutContext<'a, T: Serialize> {
    body: &'a str,
    #[serde(flatten)]
    data: &'a T,
}

/// Renders views inside a versioned layout (`v1` .. `v4`).
pub struct ViewRenderer {
    registry: Handlebars<'static>,
}

impl ViewRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        helpers::register(&mut registry);

        for (name, source) in VIEWS {
            registry.register_template_string(name, source)?;
        }
        for (name, source) in LAYOUTS {
            registry.register_template_string(&layout_template(name), source)?;
        }

        Ok(Self { registry })
    }

    pub fn has_layout(&self, layout: &str) -> bool {
        self.registry.has_template(&layout_template(layout))
    }

    /// Fail with 404 for path segments that are not a known layout.
    pub fn ensure_layout(&self, layout: &str) -> AppResult<()> {
        if self.has_layout(layout) {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Unknown layout {}", layout)))
        }
    }

    /// Render `view` with `data`, wrapped in `layout`.
    pub fn render<T: Serialize>(&self, view: &str, layout: &str, data: &T) -> AppResult<String> {
        self.ensure_layout(layout)?;

        let body = self.registry.render(view, data)?;
        let page = self.registry.render(
            &layout_template(layout),
            &LayoutContext { body: &body, data },
        )?;

        Ok(page)
    }

    /// Render the error view with status 400.
    pub fn render_error(&self, view: &ErrorView) -> AppResult<Response> {
        let page = self.render("error", &view.layout, view)?;
        Ok((StatusCode::BAD_REQUEST, Html(page)).into_response())
    }
}

fn layout_template(layout: &str) -> String {
    format!("layouts/{}", layout)
}
