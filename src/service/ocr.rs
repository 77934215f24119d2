use crate::config::OcrConfig;
use crate::models::{AnnotateRequest, AnnotateResponse};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("OCR request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("OCR service returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// OCR 服务: 输入图片字节，输出识别出的纯文本
#[async_trait]
pub trait OcrService: Send + Sync {
    async fn recognize(&self, image: &[u8]) -> Result<String, OcrError>;

    fn provider_name(&self) -> &str;
}

/// Google Cloud Vision TEXT_DETECTION 客户端
pub struct GoogleVisionClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl GoogleVisionClient {
    /// 未配置 API key 时返回 `None`
    pub fn from_config(config: &OcrConfig) -> Result<Option<Self>, OcrError> {
        let Some(api_key) = config.api_key.clone().filter(|k| !k.is_empty()) else {
            return Ok(None);
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Some(Self {
            client,
            api_url: config.api_url.clone(),
            api_key,
        }))
    }
}

#[async_trait]
impl OcrService for GoogleVisionClient {
    async fn recognize(&self, image: &[u8]) -> Result<String, OcrError> {
        let body = AnnotateRequest::text_detection(STANDARD.encode(image));

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let annotated: AnnotateResponse = response.json().await?;
        Ok(annotated.into_text())
    }

    fn provider_name(&self) -> &str {
        "google-vision"
    }
}
