use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Successful processing result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Echo of the caller-supplied document type label
    pub document_type: String,

    /// Normalized text extracted by the vision-language model
    pub extracted_text: String,

    /// Extracted field values; absent fields carry the "Not Found" sentinel
    pub important_data: BTreeMap<String, String>,
}

impl ProcessResponse {
    pub fn new(
        document_type: String,
        extracted_text: String,
        important_data: BTreeMap<String, String>,
    ) -> Self {
        Self {
            document_type,
            extracted_text,
            important_data,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
