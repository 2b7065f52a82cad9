#[path = "../../common/mod.rs"]
mod common;

use actix_web::{http::StatusCode, test, web, App};
use blog_generator::routes::configure;
use blog_generator::service::ModelStatus;
use common::{service_with, CountingProvider};
use serde_json::json;
use std::sync::Arc;

#[actix_web::test]
async fn test_model_status_reflects_lazy_loading() {
    let provider = Arc::new(CountingProvider::new());
    let app = test::init_service(
        App::new().app_data(web::Data::new(service_with(provider.clone()))).configure(configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/models").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let status: ModelStatus = test::read_body_json(resp).await;
    assert_eq!(status.model_id, "stub/llama");
    assert!(!status.is_loaded);
    assert_eq!(status.in_flight, 0);

    let req = test::TestRequest::post()
        .uri("/api/generate-blog")
        .set_json(json!({ "topic": "rust", "word_count": 50 }))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::get().uri("/api/models").to_request();
    let status: ModelStatus = test::call_and_read_body_json(&app, req).await;
    assert!(status.is_loaded);
    assert_eq!(status.in_flight, 0);
}
