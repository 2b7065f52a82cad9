use crate::entities::{BlogForm, BlogPost};
use crate::error::AppError;
use crate::service::BlogService;
use crate::view::render_page;
use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{get, post, web, HttpResponse, ResponseError};

fn page(
    status: StatusCode,
    form: &BlogForm,
    post: Option<&BlogPost>,
    error: Option<&str>,
) -> Result<HttpResponse, AppError> {
    let html = render_page(form, post, error)?;
    Ok(HttpResponse::build(status).content_type(ContentType::html()).body(html))
}

#[get("/")]
pub async fn index() -> Result<HttpResponse, AppError> {
    page(StatusCode::OK, &BlogForm::default(), None, None)
}

/// 表单提交：在阻塞线程池中执行生成，然后带着结果重新渲染页面
///
/// 失败时同样返回页面，错误信息显示在输出位置，状态码沿用错误本身的
#[post("/")]
pub async fn submit(
    service: web::Data<BlogService>,
    form: Result<web::Form<BlogForm>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let form = match form {
        Ok(form) => form.into_inner(),
        Err(err) => {
            log::warn!("Unreadable form submission: {}", err);
            let status = err.as_response_error().status_code();
            return page(status, &BlogForm::default(), None, Some(&err.to_string()));
        }
    };
    let submitted = form.clone();
    let service = service.into_inner();

    let outcome = match web::block(move || service.generate(&submitted)).await {
        Ok(outcome) => outcome,
        Err(err) => Err(AppError::from(err)),
    };
    match outcome {
        Ok(post) => page(StatusCode::OK, &form, post.as_ref(), None),
        Err(err) => {
            log::error!("Blog generation for {:?} failed: {}", form.topic, err);
            page(err.status_code(), &form, None, Some(&err.to_string()))
        }
    }
}
