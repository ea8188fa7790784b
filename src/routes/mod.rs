//! HTTP handlers and the helpers they share for rendering views.

use actix_web::error::BlockingError;
use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use tera::{Context, Tera};

use crate::dto::references::ViewBinding;
use crate::services::ServiceError;

pub mod references;

/// Builds the context every page template expects.
pub fn base_context(current_page: &str, home_url: &str) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context.insert("home_url", home_url);
    context
}

/// Renders `template` into an HTML response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Renders the view of `binding`, exposing its model as `model`.
pub fn render_view<M: Serialize>(
    tera: &Tera,
    binding: &ViewBinding<M>,
    mut context: Context,
) -> HttpResponse {
    if let Some(model) = &binding.model {
        context.insert("model", model);
    }
    render_template(tera, binding.view, &context)
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

impl From<BlockingError> for ServiceError {
    fn from(err: BlockingError) -> Self {
        log::error!("Blocking task failed: {err}");
        ServiceError::Internal(err.to_string())
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unavailable(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).finish()
    }
}
