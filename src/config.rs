use crate::models::StoreNamePolicy;
use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use std::fmt;

const ENV_PREFIX: &str = "RECEIPT";
const DEFAULT_VISION_URL: &str = "https://vision.googleapis.com/v1/images:annotate";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 请求体上限 (base64 图片)
    pub max_body_bytes: usize,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub store_name_policy: StoreNamePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                max_body_bytes: 10 * 1024 * 1024,
            },
            ocr: OcrConfig::default(),
            extraction: ExtractionConfig {
                store_name_policy: StoreNamePolicy::default(),
            },
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_VISION_URL.to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

// API key 不写入日志
impl fmt::Debug for OcrConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OcrConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AppConfig {
    /// 从环境变量加载配置 (RECEIPT_SERVER__PORT, RECEIPT_OCR__API_KEY, ...)
    pub fn from_env() -> Self {
        match Self::load(Environment::with_prefix(ENV_PREFIX)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid configuration ({}), falling back to defaults", e);
                Self::default()
            }
        }
    }

    fn load(env: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.max_body_bytes", defaults.server.max_body_bytes as i64)?
            .set_default("ocr.api_url", defaults.ocr.api_url)?
            .set_default("ocr.timeout_secs", defaults.ocr.timeout_secs as i64)?
            .set_default("extraction.store_name_policy", "pattern")?
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
