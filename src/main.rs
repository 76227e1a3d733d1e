use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, middleware, web};

use magicslides::config::AppConfig;
use magicslides::handlers::{self, realtime::Relay};
use magicslides::llm::{GeminiClient, ModelClient, PresentationService};
use magicslides::storage::PresentationStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {e}");
        std::io::Error::other(e)
    })?;

    let store = PresentationStore::new(&config.upload_path);
    store.ensure_dir()?;

    let mut gemini = GeminiClient::new(config.gemini_api_key.clone())
        .with_base_url(&config.gemini_base_url);
    if let Some(model) = &config.gemini_model {
        log::info!("Using Gemini model {model}");
        gemini = gemini.with_model(model);
    }
    let model: Arc<dyn ModelClient> = Arc::new(gemini);
    let service = PresentationService::new(model);
    let relay = Relay::new(service.clone(), store.clone());

    let uploads_dir = store.root().to_path_buf();
    let client_url = config.client_url.clone();
    let (host, port) = config.bind_addr();
    log::info!("Starting server at http://{host}:{port}");
    log::info!("Output directory: {}", uploads_dir.display());

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&client_url)
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .supports_credentials();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(service.clone()))
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(relay.clone()))
            .service(actix_files::Files::new("/static", "./static"))
            .service(actix_files::Files::new("/uploads", uploads_dir.clone()))
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found))
    })
    .bind((host, port))?
    .run()
    .await
}
