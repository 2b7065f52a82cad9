use crate::error::AppError;
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::StatusCode,
    ResponseError,
    Error as ActixError,
};
use std::{future::Future, pin::Pin};

impl From<ActixError> for AppError {
    fn from(err: ActixError) -> Self {
        let status = err.as_response_error().status_code();
        let error_str = err.to_string();
        let context = format!("Status: {}, Error: {}", status, error_str);

        log::error!("{}", t!("logs.error_occurred", context = context));

        let app_error = match status {
            StatusCode::NOT_FOUND => AppError::NotFound,
            StatusCode::BAD_REQUEST => AppError::validation("request", error_str),
            _ => AppError::Generic(format!("Unexpected error occurred: {}", error_str)),
        };

        log::debug!("Converted error to: {:?}", app_error);
        app_error
    }
}

/// 记录失败请求，并把框架层错误统一为 `ErrorResponse` JSON
pub struct ErrorHandlerMiddleware;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandlerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = ActixError;
    type Transform = ErrorHandlerService<S>;
    type InitError = ();
    type Future = Pin<Box<dyn Future<Output = Result<Self::Transform, Self::InitError>>>>;

    fn new_transform(&self, service: S) -> Self::Future {
        Box::pin(async move { Ok(ErrorHandlerService { service }) })
    }
}

pub struct ErrorHandlerService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = ActixError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(
        &self,
        ctx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // 只保留字符串，路由匹配要求请求没有其他引用
        let method = req.method().to_string();
        let uri = req.uri().to_string();
        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => {
                    if let Some(err) = res.response().error() {
                        log::error!(
                            "{}",
                            t!("logs.request_failed", method = method.as_str(), uri = uri.as_str())
                        );
                        log::debug!("Error details: {:?}", err);
                    }
                    Ok(res.map_into_boxed_body())
                }
                Err(err) => {
                    log::error!(
                        "{}",
                        t!("logs.request_failed", method = method.as_str(), uri = uri.as_str())
                    );
                    // 由框架用 AppError 的 ResponseError 渲染
                    Err(AppError::from(err).into())
                }
            }
        })
    }
}

pub fn error_handler() -> ErrorHandlerMiddleware {
    ErrorHandlerMiddleware
}
