use serde::{Deserialize, Serialize};

/// Vision `images:annotate` 请求体
#[derive(Debug, Serialize)]
pub struct AnnotateRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
pub struct AnnotateImageRequest {
    pub image: ImageContent,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub struct ImageContent {
    /// base64 编码的图片
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
}

impl AnnotateRequest {
    /// 单张图片的文字检测请求
    pub fn text_detection(content: String) -> Self {
        Self {
            requests: vec![AnnotateImageRequest {
                image: ImageContent { content },
                features: vec![Feature {
                    kind: "TEXT_DETECTION".to_string(),
                }],
            }],
        }
    }
}

/// Vision `images:annotate` 响应体 (只保留用到的字段)
#[derive(Debug, Default, Deserialize)]
pub struct AnnotateResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    pub full_text_annotation: Option<TextAnnotation>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TextAnnotation {
    #[serde(default)]
    pub text: String,
}

impl AnnotateResponse {
    /// 取第一张图片的全文，缺失时返回空串
    pub fn into_text(self) -> String {
        self.responses
            .into_iter()
            .next()
            .and_then(|r| r.full_text_annotation)
            .map(|a| a.text)
            .unwrap_or_default()
    }
}
