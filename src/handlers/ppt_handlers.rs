use actix_files::NamedFile;
use actix_web::http::header::{
    self, ContentDisposition, DispositionParam, DispositionType, HeaderValue,
};
use actix_web::{HttpRequest, HttpResponse, web};

use crate::errors::AppError;
use crate::pptx::PPTX_CONTENT_TYPE;
use crate::storage::PresentationStore;
use crate::templates_structs::{ApiSuccess, FileListItem, MessageResponse, PresentationList};

/// GET /api/ppt/download/{filename}
pub async fn download(
    req: HttpRequest,
    store: web::Data<PresentationStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let filename = path.into_inner();
    let file_path = store.resolve(&filename).ok_or(AppError::InvalidFilename)?;

    let file = NamedFile::open_async(&file_path).await.map_err(|e| {
        log::error!("Error downloading file {filename}: {e}");
        AppError::NotFound
    })?;

    let mut resp = file
        .set_content_disposition(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename.clone())],
        })
        .into_response(&req);
    resp.headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(PPTX_CONTENT_TYPE));

    log::info!("File downloaded: {filename}");
    Ok(resp)
}

/// GET /api/ppt/info/{filename}
pub async fn info(
    store: web::Data<PresentationStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let filename = path.into_inner();
    store.resolve(&filename).ok_or(AppError::InvalidFilename)?;

    let info = store.info(&filename).map_err(|e| {
        log::error!("Error getting file info for {filename}: {e}");
        AppError::NotFound
    })?;
    Ok(HttpResponse::Ok().json(ApiSuccess::new(info)))
}

/// DELETE /api/ppt/{filename}. A missing file still counts as deleted.
pub async fn delete(
    store: web::Data<PresentationStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let filename = path.into_inner();
    store.resolve(&filename).ok_or(AppError::InvalidFilename)?;

    store.delete(&filename);
    Ok(HttpResponse::Ok().json(MessageResponse {
        success: true,
        message: "Presentation deleted successfully".to_string(),
    }))
}

/// GET /api/ppt/list
pub async fn list(store: web::Data<PresentationStore>) -> Result<HttpResponse, AppError> {
    let files = store.list().map_err(|e| {
        log::error!("Error listing presentations: {e}");
        AppError::Internal("Failed to list presentations")
    })?;
    let presentations = files.into_iter().map(FileListItem::from).collect();
    Ok(HttpResponse::Ok().json(ApiSuccess::new(PresentationList { presentations })))
}
