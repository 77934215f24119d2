use crate::api::error::ApiError;
use crate::api::AppState;
use crate::models::ParsedReceipt;
use crate::service::enhance_for_ocr;
use axum::extract::{rejection::JsonRejection, Json, State};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

/// 请求体: OCR 后的小票文本
#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub text: Option<String>,
}

/// 请求体: base64 编码的小票图片
#[derive(Debug, Deserialize)]
pub struct ParseImageRequest {
    #[serde(alias = "imageBase64")]
    pub image: Option<String>,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 文本解析接口
pub async fn parse_text(
    State(state): State<AppState>,
    payload: Result<Json<ParseTextRequest>, JsonRejection>,
) -> Result<Json<ParsedReceipt>, ApiError> {
    let Json(req) = payload?;
    let text = req.text.ok_or(ApiError::MissingInput("text"))?;

    tracing::info!("Parsing receipt text ({} bytes)", text.len());
    Ok(Json(state.extractor.extract(&text)))
}

/// 图片解析接口: 预处理 -> OCR -> 文本抽取
///
/// OCR 失败不算错误，按空文本抽取，返回全空结果。
pub async fn parse_image(
    State(state): State<AppState>,
    payload: Result<Json<ParseImageRequest>, JsonRejection>,
) -> Result<Json<ParsedReceipt>, ApiError> {
    let Json(req) = payload?;
    let encoded = req
        .image
        .filter(|s| !s.trim().is_empty())
        .ok_or(ApiError::MissingInput("image"))?;

    let Some(ocr) = state.ocr.clone() else {
        return Err(ApiError::Unexpected("OCR service is not configured".to_string()));
    };

    let image = STANDARD
        .decode(strip_data_url(encoded.trim()))
        .map_err(|e| ApiError::InvalidInput(format!("image is not valid base64: {}", e)))?;
    tracing::info!("Received receipt image ({} bytes)", image.len());

    let processed = tokio::task::spawn_blocking(move || enhance_for_ocr(&image))
        .await
        .map_err(|e| ApiError::Unexpected(format!("Image preprocessing aborted: {}", e)))??;

    let text = match ocr.recognize(&processed).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("OCR via {} failed, using empty text: {}", ocr.provider_name(), e);
            String::new()
        }
    };
    if text.trim().is_empty() {
        tracing::warn!("OCR via {} returned no text", ocr.provider_name());
    }

    Ok(Json(state.extractor.extract(&text)))
}

/// 去掉 `data:image/png;base64,` 前缀
fn strip_data_url(s: &str) -> &str {
    match s.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => s,
    }
}
