use actix_web::{HttpRequest, HttpResponse};
use minijinja::context;

use crate::infrastructure::rendering::templates::render_page;
use crate::utils::errors::ApiError;

pub async fn welcome() -> Result<HttpResponse, ApiError> {
    render_page("welcome.html", context! {})
}

/// Fallback for paths no route matches.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound(format!("No page at {}", req.path())))
}
