use actix_web::{http::{header::ContentType, StatusCode}, HttpResponse, ResponseError};
use minijinja::context;
use mongodb::{bson, error::Error as MongoError};
use thiserror::Error;
use bson::ser::Error as BsonError;
use bson::de::Error as BsonDeError;

use crate::infrastructure::rendering::templates::Templates;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    MongoError(#[from] MongoError),

    #[error("Serialization error")]
    SerializationError(#[from] BsonError),

    #[error("Deserialization error")]
    DeserializationError(#[from] BsonDeError),

    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),
}

impl ApiError {

    /// The text shown to the visitor. Server-side details stay in the log.
    fn public_message(&self) -> String {
        match self {
            ApiError::BadRequest(message)
            | ApiError::InvalidData(message)
            | ApiError::NotFound(message) => message.clone(),
            ApiError::SerializationError(_) | ApiError::DeserializationError(_) => {
                "Invalid data format".to_string()
            }
            ApiError::InternalServerError(_)
            | ApiError::MongoError(_)
            | ApiError::TemplateError(_) => "Something went wrong on our side".to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_)
            | ApiError::InvalidData(_)
            | ApiError::SerializationError(_)
            | ApiError::DeserializationError(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalServerError(_)
            | ApiError::MongoError(_)
            | ApiError::TemplateError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let message = self.public_message();
        let page = Templates::shared().and_then(|templates| {
            templates.render("error.html", context! {
                status => status.as_u16(),
                reason => status.canonical_reason().unwrap_or("Error"),
                message => &message,
            })
        });

        error_page(status, &message, page)
    }
}

/// Wraps a rendered error page, or falls back to plain text when the page
/// could not be rendered.
fn error_page(status: StatusCode, message: &str, page: Result<String, ApiError>) -> HttpResponse {
    match page {
        Ok(html) => HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(html),
        Err(e) => {
            log::error!("Failed to render error page: {}", e);
            HttpResponse::build(status)
                .content_type(ContentType::plaintext())
                .body(format!("{} {}", status.as_u16(), message))
        }
    }
}

// ----------------------------- TESTS --------------------------------
