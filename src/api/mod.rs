pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::*;

use crate::service::{OcrService, ReceiptExtractor};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// 共享状态: 抽取器 + 可选的 OCR 服务 (未配置 key 时为 None)
#[derive(Clone)]
pub struct AppState {
    pub extractor: ReceiptExtractor,
    pub ocr: Option<Arc<dyn OcrService>>,
}

/// 构建路由
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/parser", post(parse_text))
        .route("/api/ocr", post(parse_image))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
}
