use crate::controller::{blog, models};
use crate::error::AppError;
use actix_web::{web, Error};

pub fn api_routes() -> actix_web::Scope {
    web::scope("/api").service(blog::generate_blog).service(models::model_status)
}

fn body_error(err: impl std::fmt::Display) -> Error {
    AppError::validation("body", err.to_string()).into()
}

/// 注册页面与 API 路由；`BlogService` 需由调用方通过 `app_data` 注入
///
/// 请求体解析失败统一转为 400 `ErrorResponse`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| body_error(err)))
        .app_data(web::FormConfig::default().error_handler(|err, _req| body_error(err)))
        .service(blog::index)
        .service(blog::submit)
        .service(api_routes());
}
