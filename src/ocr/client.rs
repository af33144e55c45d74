//! OCR delegate: a single chat-completions round trip to a hosted
//! vision-language model.

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use super::error::OcrError;
use crate::document::normalize::clean_text;
use crate::utils::config::{OcrConfig, API_KEY_ENV};

/// Fixed instruction sent with every image. The model must transcribe, not
/// classify.
pub const EXTRACTION_PROMPT: &str = "Extract all readable text from this document while preserving the table or column structure. \
If the document contains tabular data, format it clearly using commas or JSON-like format. \
Return important info in KEY: VALUE PAIRS: \
Name, Aadhar Number, DOB, Address, Mobile, PAN Number, Father's Name, Seat Number, Percentage, Divisional Board, Reg. No., GATE Score as keys. \
Do not classify it. Just return text as it appears, maintaining its structure.";

/// Reply the model is instructed to give for documents it considers forged.
const ILLEGITIMATE_REPLY: &str = "illegitimate doc";

/// Text extraction from a document image. The production implementation talks
/// to a remote model; tests substitute a double.
#[async_trait]
pub trait OcrClient: Send + Sync {
    /// Extract readable text from the image, normalized by
    /// [`clean_text`](crate::document::clean_text).
    async fn extract_text(&self, image: &[u8]) -> Result<String, OcrError>;
}

/// Client for an OpenAI-compatible chat-completions endpoint with vision
/// support.
pub struct VisionOcrClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl VisionOcrClient {
    pub fn new(config: &OcrConfig, api_key: String) -> Result<Self, OcrError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| OcrError::Network { source })?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.to_string(),
            temperature: config.temperature,
        })
    }

    /// Construct a client with the API key read from `VERIDOC_API_KEY`.
    pub fn from_env(config: &OcrConfig) -> Result<Self, OcrError> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| OcrError::MissingApiKey(API_KEY_ENV))?;
        Self::new(config, api_key)
    }
}

#[async_trait]
impl OcrClient for VisionOcrClient {
    async fn extract_text(&self, image: &[u8]) -> Result<String, OcrError> {
        let encoded = STANDARD.encode(image);

        let request = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            stream: false,
            messages: vec![RequestMessage {
                role: "user",
                content: vec![
                    ContentPart::Text {
                        text: EXTRACTION_PROMPT,
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:image/jpeg;base64,{encoded}"),
                        },
                    },
                ],
            }],
        };

        tracing::debug!(
            model = %self.model,
            image_size = image.len(),
            "Sending OCR request"
        );

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(OcrError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(OcrError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: ChatResponse = response.json().await.map_err(OcrError::from_reqwest)?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(OcrError::EmptyResponse)?;

        let text = clean_text(content.trim());
        if text == ILLEGITIMATE_REPLY {
            return Err(OcrError::IllegitimateDocument);
        }

        tracing::debug!(text_len = text.len(), "OCR extraction complete");

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    stream: bool,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
