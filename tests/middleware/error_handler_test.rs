use actix_web::body::to_bytes;
use actix_web::dev::ServiceResponse;
use actix_web::{error, http::StatusCode, test, web, App, HttpResponse};
use blog_generator::error::ErrorResponse;
use blog_generator::middleware::{error_handler, Logging};
use futures::future;

#[actix_web::test]
async fn test_error_handler_renders_json_for_service_errors() {
    let app = test::init_service(
        App::new()
            .wrap_fn(|_req, _srv| {
                future::ready(Err::<ServiceResponse, _>(error::ErrorNotFound("gone")))
            })
            .wrap(error_handler())
            .route("/", web::get().to(HttpResponse::Ok)),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let err = test::try_call_service(&app, req).await.err().unwrap();
    let resp = err.error_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let bytes = to_bytes(resp.into_body()).await.unwrap();
    let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.code, 404);
    assert_eq!(body.status, "Not Found");
}

#[actix_web::test]
async fn test_error_handler_maps_bad_request() {
    let app = test::init_service(
        App::new()
            .wrap_fn(|_req, _srv| {
                future::ready(Err::<ServiceResponse, _>(error::ErrorBadRequest("broken body")))
            })
            .wrap(error_handler())
            .route("/", web::get().to(HttpResponse::Ok)),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let err = test::try_call_service(&app, req).await.err().unwrap();
    let resp = err.error_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(resp.into_body()).await.unwrap();
    let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.data.unwrap()["field"], "request");
}

#[actix_web::test]
async fn test_error_handler_passes_through_handler_errors() {
    let app = test::init_service(
        App::new()
            .wrap(error_handler())
            .route("/", web::get().to(|| async { Err::<HttpResponse, _>(error::ErrorConflict("busy")) })),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_routed_requests_survive_both_middlewares() {
    let app = test::init_service(
        App::new()
            .wrap(error_handler())
            .wrap(Logging)
            .route("/items/{id}", web::get().to(|path: web::Path<u32>| async move {
                HttpResponse::Ok().body(path.into_inner().to_string())
            })),
    )
    .await;

    let req = test::TestRequest::get().uri("/items/7").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "7");
}
