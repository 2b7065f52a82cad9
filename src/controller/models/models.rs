use crate::service::BlogService;
use actix_web::{get, web, HttpResponse};

#[get("/models")]
pub async fn model_status(service: web::Data<BlogService>) -> HttpResponse {
    HttpResponse::Ok().json(service.models().status())
}
