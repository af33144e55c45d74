use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use super::models::ErrorResponse;
use crate::ocr::OcrError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No image provided.")]
    MissingImage,

    #[error("Document type not provided.")]
    MissingDocumentType,

    #[error("Image exceeds the maximum allowed size.")]
    ImageTooLarge,

    #[error("Malformed multipart request.")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Document type mismatch. Provided document type does not match extracted text.")]
    TypeMismatch,

    #[error("Failed to extract text from document.")]
    Ocr {
        #[from]
        source: OcrError,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, details) = match &self {
            AppError::MissingImage
            | AppError::MissingDocumentType
            | AppError::ImageTooLarge
            | AppError::TypeMismatch => (StatusCode::BAD_REQUEST, None),
            AppError::Multipart(source) => (StatusCode::BAD_REQUEST, Some(source.to_string())),
            AppError::Ocr { source } => {
                (StatusCode::UNPROCESSABLE_ENTITY, Some(source.to_string()))
            }
        };

        let mut error_response = ErrorResponse::new(self.to_string());
        if let Some(details) = details {
            error_response = error_response.with_details(details);
        }

        (status, Json(error_response)).into_response()
    }
}
