use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, middleware, web};

use deckgen::config::Config;
use deckgen::export::{HttpImageFetcher, ImageFetcher};
use deckgen::generator::{ContentGenerator, OpenRouterClient, OutlineGenerator};
use deckgen::handlers;
use deckgen::rate_limit::RateLimiter;
use deckgen::storage::{LocalBackend, S3Backend, Storage, StorageBackend};
use deckgen::store::PresentationStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    // Local disk is the write floor and must exist before anything else.
    let local = LocalBackend::new(&config.data_dir).expect("Failed to create data directory");
    log::info!("local storage at {}", config.data_dir.display());

    // The remote mirror participates only if its startup probe passes.
    let remote: Option<Arc<dyn StorageBackend>> = if config.remote_storage_configured() {
        let backend = S3Backend::connect(
            config.r2_endpoint_url.as_deref().unwrap_or_default(),
            config.r2_access_key_id.as_deref().unwrap_or_default(),
            config.r2_secret_access_key.as_deref().unwrap_or_default(),
            &config.r2_bucket,
        )
        .await;
        match backend.probe().await {
            Ok(()) => {
                log::info!("remote storage available (bucket {})", backend.bucket());
                Some(Arc::new(backend))
            }
            Err(e) => {
                log::warn!("remote storage probe failed, continuing local-only: {e}");
                None
            }
        }
    } else {
        log::info!("remote storage not configured, running local-only");
        None
    };
    let storage = Arc::new(Storage::new(local, remote));

    let generator: Arc<dyn ContentGenerator> = match config.openrouter_api_key.clone() {
        Some(api_key) => {
            log::info!("content generation via OpenRouter ({})", config.openrouter_model);
            Arc::new(
                OpenRouterClient::new(api_key, config.openrouter_model.clone())
                    .expect("Failed to build OpenRouter client"),
            )
        }
        None => {
            log::warn!("no OPENROUTER_API_KEY set, using the offline outline generator");
            Arc::new(OutlineGenerator)
        }
    };
    let fetcher: Arc<dyn ImageFetcher> = Arc::new(HttpImageFetcher::new(
        storage.clone(),
        config.pexels_api_key.clone(),
    ));

    let store = web::Data::new(PresentationStore::new(storage));
    let limiter = web::Data::new(RateLimiter::new(config.rate_limit_per_minute));
    let generator = web::Data::from(generator);
    let fetcher = web::Data::from(fetcher);

    let allowed_origins = config.allowed_origins.clone();
    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        let cors = if allowed_origins.trim() == "*" {
            Cors::permissive()
        } else {
            allowed_origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
                .allow_any_method()
                .allow_any_header()
                .max_age(3600)
        };

        // Malformed JSON bodies get the same {"error": ...} shape as every
        // other failure.
        let json_cfg = web::JsonConfig::default().limit(64 * 1024).error_handler(
            |err, _req| {
                let body = serde_json::json!({ "error": err.to_string() });
                actix_web::error::InternalError::from_response(
                    err,
                    HttpResponse::BadRequest().json(body),
                )
                .into()
            },
        );

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(json_cfg)
            .app_data(store.clone())
            .app_data(limiter.clone())
            .app_data(generator.clone())
            .app_data(fetcher.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
