pub mod client;
pub mod error;

pub use client::{OcrClient, VisionOcrClient, EXTRACTION_PROMPT};
pub use error::OcrError;
