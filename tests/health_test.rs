/// Health endpoint tests: liveness response shape, integration flags in
/// local-only mode, and that the service keeps creating presentations on
/// local storage when no remote backend is configured.

use std::sync::Arc;

use actix_web::{App, test, web};

use deckgen::generator::ContentGenerator;
use deckgen::handlers;
use deckgen::rate_limit::RateLimiter;

mod common;
use common::{StubGenerator, TEST_TOPIC, setup_store};

#[actix_web::test]
async fn health_reports_local_only_mode() {
    let (_dir, _storage, store) = setup_store();
    let store = web::Data::new(store);
    let generator: Arc<dyn ContentGenerator> = Arc::new(StubGenerator);
    let generator = web::Data::from(generator);
    let limiter = web::Data::new(RateLimiter::new(30));

    let app = test::init_service(
        App::new()
            .app_data(store.clone())
            .app_data(generator.clone())
            .app_data(limiter.clone())
            .configure(handlers::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["s3_available"], false);
    assert_eq!(body["openrouter_configured"], false);
    assert!(body["timestamp"].is_string());

    // Local-only mode still serves the expensive path.
    let req = test::TestRequest::post()
        .uri("/create_presentation")
        .set_json(serde_json::json!({ "topic": TEST_TOPIC, "slides": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["topic"], TEST_TOPIC);
    assert_eq!(body["slides"].as_array().expect("slides array").len(), 3);
}
