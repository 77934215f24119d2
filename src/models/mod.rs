pub mod ocr;
pub mod receipt;

pub use ocr::{AnnotateRequest, AnnotateResponse};
pub use receipt::{LineItem, ParsedReceipt, StoreNamePolicy};
