use actix_web::{HttpResponse, web};

use crate::errors::AppError;
use crate::llm::PresentationService;
use crate::models::presentation::GenerationResult;
use crate::storage::PresentationStore;
use crate::templates_structs::{ApiSuccess, EditRequest, GenerateRequest, SessionResult, SuggestionsData};

pub const SUGGESTIONS: [&str; 6] = [
    "Create a presentation about renewable energy with 5 slides",
    "Build a marketing strategy presentation for a new product launch",
    "Make a educational presentation about artificial intelligence",
    "Create slides about project management best practices",
    "Design a presentation about healthy lifestyle tips",
    "Build a business plan presentation for startups",
];

/// POST /api/chat/generate
pub async fn generate(
    service: web::Data<PresentationService>,
    store: web::Data<PresentationStore>,
    body: web::Json<GenerateRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner().validate().map_err(AppError::Validation)?;
    log::info!("Generate request for session {}", req.session_id);

    const FAILED: &str = "Failed to generate presentation";
    let doc = service.generate(&req.prompt).await.map_err(|e| {
        log::error!("Error generating presentation: {e}");
        AppError::Generation(FAILED)
    })?;
    let filename = store.save_off_thread(doc.clone()).await.map_err(|e| {
        log::error!("Error writing presentation: {e}");
        AppError::Generation(FAILED)
    })?;

    Ok(HttpResponse::Ok().json(ApiSuccess::new(SessionResult {
        result: GenerationResult::new(doc, filename),
        session_id: req.session_id,
    })))
}

/// POST /api/chat/edit
pub async fn edit(
    service: web::Data<PresentationService>,
    store: web::Data<PresentationStore>,
    body: web::Json<EditRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner().validate().map_err(AppError::Validation)?;
    log::info!("Edit request for session {}", req.session_id);

    const FAILED: &str = "Failed to edit presentation";
    let doc = service.edit(&req.current, &req.edit_prompt).await.map_err(|e| {
        log::error!("Error editing presentation: {e}");
        AppError::Generation(FAILED)
    })?;
    let filename = store.save_off_thread(doc.clone()).await.map_err(|e| {
        log::error!("Error writing presentation: {e}");
        AppError::Generation(FAILED)
    })?;

    Ok(HttpResponse::Ok().json(ApiSuccess::new(SessionResult {
        result: GenerationResult::new(doc, filename),
        session_id: req.session_id,
    })))
}

/// GET /api/chat/suggestions
pub async fn suggestions() -> HttpResponse {
    HttpResponse::Ok().json(ApiSuccess::new(SuggestionsData {
        suggestions: SUGGESTIONS.to_vec(),
    }))
}
