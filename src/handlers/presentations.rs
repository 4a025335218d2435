use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::errors::AppError;
use crate::generator::ContentGenerator;
use crate::rate_limit::RateLimiter;
use crate::store::PresentationStore;

#[derive(Deserialize)]
pub struct CreateRequest {
    topic: String,
    #[serde(default = "default_slide_count")]
    slides: i64,
}

fn default_slide_count() -> i64 {
    5
}

/// POST /create_presentation - Generate a new presentation for a topic.
pub async fn create(
    req: HttpRequest,
    store: web::Data<PresentationStore>,
    generator: web::Data<dyn ContentGenerator>,
    limiter: web::Data<RateLimiter>,
    body: web::Json<CreateRequest>,
) -> Result<HttpResponse, AppError> {
    // Rate-limit check before any generation work
    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or_else(|| std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED));
    if !limiter.try_acquire(ip) {
        return Err(AppError::RateLimited);
    }

    let slide_count = usize::try_from(body.slides)
        .map_err(|_| AppError::Validation("slides must be between 1 and 20".into()))?;

    let presentation = store
        .create(&body.topic, slide_count, generator.get_ref())
        .await?;
    log::info!(
        "created presentation {} with {} slides",
        presentation.id,
        presentation.slides.len()
    );
    Ok(HttpResponse::Created().json(presentation))
}

/// GET /get_presentation_json/{id} - Fetch the full presentation state.
pub async fn get_json(
    store: web::Data<PresentationStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let presentation = store.get(&path).await?;
    Ok(HttpResponse::Ok().json(presentation))
}

/// DELETE /delete_presentation/{id} - Remove a presentation and its artifacts.
pub async fn delete(
    store: web::Data<PresentationStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    store.delete(&id).await?;
    log::info!("deleted presentation {id}");
    Ok(HttpResponse::Ok().json(serde_json::json!({ "deleted": id })))
}
