use crate::service::PreprocessError;
use axum::{
    extract::{rejection::JsonRejection, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// 请求处理错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 缺少必填字段
    #[error("Missing required field: {0}")]
    MissingInput(&'static str),
    /// 请求体或图片无法解析
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// 请求体超过 max_body_bytes
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("{0}")]
    Unexpected(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingInput(_) | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::InvalidInput(rejection.body_text())
        }
    }
}

impl From<PreprocessError> for ApiError {
    fn from(err: PreprocessError) -> Self {
        match err {
            PreprocessError::Decode(_) => ApiError::InvalidInput(err.to_string()),
            PreprocessError::Encode(_) => ApiError::Unexpected(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::info!("Rejected request: {}", self);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
