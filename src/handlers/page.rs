use actix_web::HttpResponse;

use crate::errors::{AppError, render};
use crate::handlers::chat_handlers::SUGGESTIONS;
use crate::handlers::realtime::MAX_RECONNECT_ATTEMPTS;
use crate::templates_structs::IndexTemplate;

pub const APP_NAME: &str = "MagicSlides";

/// GET /
pub async fn index() -> Result<HttpResponse, AppError> {
    render(IndexTemplate {
        app_name: APP_NAME,
        suggestions: SUGGESTIONS.to_vec(),
        max_reconnect_attempts: MAX_RECONNECT_ATTEMPTS,
    })
}
