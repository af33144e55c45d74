use axum::extract::{Multipart, State};
use axum::response::Json;

use super::error::AppError;
use super::models::{HealthResponse, ProcessResponse};
use super::state::AppState;
use crate::document::{extract_fields, verify_document_type, DocumentType};
use crate::utils::config::AppConfig;

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Main document processing endpoint.
///
/// Accepts a multipart form with an `image` file part and a `document_type`
/// text part, delegates OCR to the configured vision-language model, verifies
/// the claimed type against the extracted text, and extracts the type's named
/// fields.
pub async fn process_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResponse>, AppError> {
    let mut image: Option<Vec<u8>> = None;
    let mut document_type: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("image") => {
                image = Some(field.bytes().await?.to_vec());
            }
            Some("document_type") => {
                document_type = Some(field.text().await?);
            }
            _ => {}
        }
    }

    // Both validation failures are rejected before any remote call.
    let image = match image {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return Err(AppError::MissingImage),
    };
    let document_type = match document_type {
        Some(label) if !label.trim().is_empty() => label,
        _ => return Err(AppError::MissingDocumentType),
    };

    if image.len() as u64 > AppConfig::get().max_image_size {
        return Err(AppError::ImageTooLarge);
    }

    tracing::info!(
        document_type = %document_type,
        image_size = image.len(),
        "Received document processing request"
    );

    let extracted_text = state.ocr.extract_text(&image).await?;

    if !verify_document_type(&document_type, &extracted_text) {
        return Err(AppError::TypeMismatch);
    }

    // Verification only passes for one of the recognized labels.
    let doc_type =
        DocumentType::from_label(&document_type).ok_or(AppError::TypeMismatch)?;
    let important_data = extract_fields(doc_type, &extracted_text);

    tracing::info!(fields = important_data.len(), "Document processed successfully");

    Ok(Json(ProcessResponse::new(
        document_type,
        extracted_text,
        important_data,
    )))
}
