use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::generator::ContentGenerator;
use crate::store::PresentationStore;

/// GET /health - Liveness plus the state of the optional integrations.
pub async fn health(
    store: web::Data<PresentationStore>,
    generator: web::Data<dyn ContentGenerator>,
) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "s3_available": store.storage().remote_available(),
        "openrouter_configured": generator.is_remote(),
    }))
}

/// GET / - Service index with the endpoint map.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "AI Presentation Generator API",
        "endpoints": {
            "create": "/create_presentation",
            "json": "/get_presentation_json/{id}",
            "update": "/update_slide",
            "operations": "/slide_operations",
            "export": "/export_ppt",
            "file": "/get_file/{presentation_id}/{filename}",
            "delete": "/delete_presentation/{id}",
            "health": "/health"
        }
    }))
}
