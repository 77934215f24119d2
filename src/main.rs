use receipt_parser_rust::{
    router, AppConfig, AppState, GoogleVisionClient, OcrService, ReceiptExtractor,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env();
    info!("Starting server with config: {:?}", config);

    // 创建 OCR 客户端
    let ocr: Option<Arc<dyn OcrService>> = match GoogleVisionClient::from_config(&config.ocr)? {
        Some(client) => {
            info!("OCR provider: {}", client.provider_name());
            Some(Arc::new(client))
        }
        None => {
            warn!("RECEIPT_OCR__API_KEY not set, /api/ocr will return 500");
            None
        }
    };

    let state = AppState {
        extractor: ReceiptExtractor::new(config.extraction.store_name_policy),
        ocr,
    };
    info!("Store name policy: {:?}", state.extractor.store_name_policy());

    let app = router(state, config.server.max_body_bytes);

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /api/parser  - parse OCR text");
    info!("  POST /api/ocr     - preprocess + OCR + parse image");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
