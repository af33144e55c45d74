use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("OCR request failed")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    #[error("OCR request timed out")]
    Timeout,

    #[error("OCR provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("OCR provider returned no content")]
    EmptyResponse,

    #[error("Model reported an illegitimate document")]
    IllegitimateDocument,

    #[error("API key environment variable {0} is not set")]
    MissingApiKey(&'static str),
}

impl OcrError {
    /// Classify a transport error, surfacing timeouts distinctly.
    pub(crate) fn from_reqwest(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            OcrError::Timeout
        } else {
            OcrError::Network { source }
        }
    }
}
