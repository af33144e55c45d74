//! Shared application state.

use std::sync::Arc;

use crate::ocr::OcrClient;

/// Immutable per-process state handed to every handler. Holding the OCR
/// client behind a trait object lets tests substitute a double.
#[derive(Clone)]
pub struct AppState {
    pub ocr: Arc<dyn OcrClient>,
}

impl AppState {
    pub fn new(ocr: Arc<dyn OcrClient>) -> Self {
        Self { ocr }
    }
}
