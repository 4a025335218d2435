pub mod exports;
pub mod files;
pub mod health;
pub mod presentations;
pub mod slides;

use actix_web::web;

/// Register every route on the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::index))
        .route("/health", web::get().to(health::health))
        .route(
            "/create_presentation",
            web::post().to(presentations::create),
        )
        .route(
            "/get_presentation_json/{id}",
            web::get().to(presentations::get_json),
        )
        .route(
            "/delete_presentation/{id}",
            web::delete().to(presentations::delete),
        )
        .route("/update_slide", web::put().to(slides::update_slide))
        .route("/slide_operations", web::post().to(slides::slide_operations))
        .route("/export_ppt", web::post().to(exports::export))
        .route(
            "/get_file/{presentation_id}/{filename}",
            web::get().to(files::get_file),
        );
}
