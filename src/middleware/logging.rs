use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures::future::{ok, Ready};
use std::future::Future;
use std::pin::Pin;
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求标识，放在 request extensions 中供 handler 读取
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// 请求日志：沿用或生成 `x-request-id`，写回响应头，并按状态码分级记录耗时
///
/// # 示例
/// ```
/// use actix_web::App;
/// use blog_generator::middleware::Logging;
///
/// let app = App::new().wrap(Logging);
/// ```
pub struct Logging;

impl<S, B> Transform<S, ServiceRequest> for Logging
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = LoggingMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(LoggingMiddleware { service })
    }
}

pub struct LoggingMiddleware<S> {
    service: S,
}

fn incoming_request_id(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| !id.is_empty() && id.len() <= 128)
        .map(str::to_string)
}

impl<S, B> Service<ServiceRequest> for LoggingMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let id = incoming_request_id(&req).unwrap_or_else(|| Uuid::new_v4().to_string());
        req.extensions_mut().insert(RequestId(id.clone()));
        let line = format!("{} {}", req.method(), req.path());
        let start = Instant::now();

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            let status = res.status();
            let elapsed = start.elapsed().as_millis();
            if status.is_server_error() {
                log::warn!("[{}] {} -> {} ({}ms)", id, line, status.as_u16(), elapsed);
            } else {
                log::info!("[{}] {} -> {} ({}ms)", id, line, status.as_u16(), elapsed);
            }
            if let Ok(value) = HeaderValue::from_str(&id) {
                res.headers_mut().insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
            }
            Ok(res)
        })
    }
}
