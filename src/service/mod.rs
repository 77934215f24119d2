pub mod extractor;
pub mod ocr;
pub mod patterns;
pub mod preprocess;

pub use extractor::{extract_receipt, ReceiptExtractor};
pub use ocr::{GoogleVisionClient, OcrError, OcrService};
pub use preprocess::{enhance_for_ocr, PreprocessError};
