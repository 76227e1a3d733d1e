use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use askama::Template;
use serde_json::json;
use std::fmt;

/// HTTP-facing error. Internal causes are logged where they happen; the
/// client only ever sees these flat messages.
#[derive(Debug)]
pub enum AppError {
    Validation(Vec<String>),
    InvalidFilename,
    NotFound,
    /// Model or rendering failure, carrying the user-facing summary.
    Generation(&'static str),
    Internal(&'static str),
    Template(askama::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(details) => write!(f, "Validation failed: {}", details.join("; ")),
            AppError::InvalidFilename => write!(f, "Invalid filename"),
            AppError::NotFound => write!(f, "File not found"),
            AppError::Generation(msg) => write!(f, "{msg}"),
            AppError::Internal(msg) => write!(f, "{msg}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidFilename => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Generation(_) | AppError::Internal(_) | AppError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(details) => json!({
                "error": "Validation failed",
                "details": details,
            }),
            AppError::InvalidFilename => json!({ "error": "Invalid filename" }),
            AppError::NotFound => json!({ "error": "File not found" }),
            AppError::Generation(msg) => json!({
                "error": msg,
                "message": "Please try again later",
            }),
            AppError::Internal(msg) => json!({ "error": msg }),
            AppError::Template(_) => {
                log::error!("{self}");
                json!({ "error": "Internal server error" })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an askama page into an HTML response.
pub fn render<T: Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(body))
}
