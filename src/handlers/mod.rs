pub mod chat_handlers;
pub mod page;
pub mod ppt_handlers;
pub mod realtime;

use actix_web::{HttpResponse, web};

use crate::errors::AppError;

/// Request bodies above this size are rejected before deserialization.
pub const JSON_LIMIT: usize = 10 * 1024 * 1024;

/// JSON extractor settings: malformed or oversized bodies become validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| AppError::Validation(vec![err.to_string()]).into())
}

/// GET /health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Route not found" }))
}

/// Register every route. Shared state (`PresentationService`, `PresentationStore`,
/// `Relay`) is expected as `web::Data` on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(page::index))
        .route("/health", web::get().to(health))
        .route("/ws", web::get().to(realtime::ws::ws_connect))
        .service(
            web::scope("/api/chat")
                .route("/generate", web::post().to(chat_handlers::generate))
                .route("/edit", web::post().to(chat_handlers::edit))
                .route("/suggestions", web::get().to(chat_handlers::suggestions)),
        )
        .service(
            web::scope("/api/ppt")
                .route("/list", web::get().to(ppt_handlers::list))
                .route("/download/{filename}", web::get().to(ppt_handlers::download))
                .route("/info/{filename}", web::get().to(ppt_handlers::info))
                .route("/{filename}", web::delete().to(ppt_handlers::delete)),
        );
}
