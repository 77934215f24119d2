pub mod api;
pub mod config;
pub mod models;
pub mod service;

pub use api::{router, AppState};
pub use config::AppConfig;
pub use models::{LineItem, ParsedReceipt, StoreNamePolicy};
pub use service::{extract_receipt, GoogleVisionClient, OcrService, ReceiptExtractor};
