use crate::entities::BlogForm;
use crate::error::AppError;
use crate::service::BlogService;
use actix_web::{post, web, HttpResponse};

/// JSON 版本的表单操作：有结果返回 `BlogPost`，主题为空返回 204
#[post("/generate-blog")]
pub async fn generate_blog(
    service: web::Data<BlogService>,
    req: web::Json<BlogForm>,
) -> Result<HttpResponse, AppError> {
    let form = req.into_inner();
    let service = service.into_inner();

    match web::block(move || service.generate(&form)).await?? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Ok(HttpResponse::NoContent().finish()),
    }
}
