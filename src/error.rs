use crate::entities::models::ModelError;
use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("Validation error: {0}")]
    Validation(ValidationDetails),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Not Found")]
    NotFound,
    #[error("Generic error: {0}")]
    Generic(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationDetails {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field: {}, Message: {}", self.field, self.message)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub status: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl AppError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation(ValidationDetails { field: field.to_string(), message: message.into() })
    }

    fn status_text(&self) -> String {
        match self.status_code() {
            StatusCode::BAD_REQUEST => t!("errors.http.bad_request"),
            StatusCode::NOT_FOUND => t!("errors.http.not_found"),
            StatusCode::SERVICE_UNAVAILABLE => t!("errors.http.service_unavailable"),
            _ => t!("errors.http.internal_server_error"),
        }
        .to_string()
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Model(ModelError::AcquisitionFailed(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Model(ModelError::GenerationFailed(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Io(_)
            | AppError::Anyhow(_)
            | AppError::Template(_)
            | AppError::Config(_)
            | AppError::Generic(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let response = ErrorResponse::from(self);
        HttpResponse::build(self.status_code()).content_type(ContentType::json()).json(response)
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        let data = match error {
            AppError::Validation(details) => serde_json::to_value(details)
                .map_err(|err| {
                    log::error!("{}", t!("logs.serialization_failed", msg = err.to_string()));
                })
                .ok(),
            _ => None,
        };

        ErrorResponse {
            code: error.status_code().as_u16(),
            status: error.status_text(),
            message: error.to_string(),
            data,
        }
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        AppError::Generic(format!("blocking task failed: {}", err))
    }
}

impl From<AppError> for std::io::Error {
    fn from(err: AppError) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
