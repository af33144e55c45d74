pub mod document;
pub mod ocr;
pub mod server;
pub mod utils;

pub use document::{
    clean_text, extract_fields, keyword_match_count, verify_document_type, DocumentType,
};
pub use ocr::{OcrClient, OcrError, VisionOcrClient};
pub use server::{create_app, start_server, AppState};
