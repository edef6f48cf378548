//! Vision model client
//!
//! Issues exactly one chat-completions request per analysis: the fixed
//! assessment prompt plus the image as an inline base64 data URI with
//! high-detail analysis requested. No retry, no backoff, no streaming. The
//! call is wrapped in a bounded wait so a stalled provider surfaces as a
//! distinct timeout error instead of hanging the request.

use std::time::Duration;

use base64::Engine;
use crashsight_core::{AppError, Config};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extract::extract_report;
use crate::prompt::ASSESSMENT_PROMPT;

// Sampling parameters are fixed per deployment.
const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f64 = 0.8;
const TOP_P: f64 = 0.4;

/// Client for the external vision-capable language model.
#[derive(Clone)]
pub struct VisionClient {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout_secs: u64,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<MessageParam>,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
}

#[derive(Debug, Serialize)]
struct MessageParam {
    role: String,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
    detail: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

impl VisionClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.vision_timeout_secs,
        })
    }

    /// Analyze one accident photo, already encoded as a data URI. Returns
    /// the extracted report; an unparseable reply degrades to the fallback
    /// report rather than an error.
    pub async fn analyze(&self, data_uri: String) -> Result<Value, AppError> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![MessageParam {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        text: ASSESSMENT_PROMPT.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: data_uri,
                            detail: "high".to_string(),
                        },
                    },
                ],
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        };

        let reply = tokio::time::timeout(
            Duration::from_secs(self.timeout_secs),
            self.request_completion(&body),
        )
        .await
        .map_err(|_| AppError::UpstreamTimeout(self.timeout_secs))??;

        tracing::debug!(reply_len = reply.len(), "Received model reply");
        Ok(extract_report(&reply))
    }

    async fn request_completion(&self, body: &ChatRequest) -> Result<String, AppError> {
        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Model request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Upstream(format!(
                "Model request failed: {} - {}",
                status, error_text
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse model response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AppError::Upstream("Model reply contained no content".to_string()))
    }
}

/// Detect media type from image bytes using magic numbers. Falls back to
/// JPEG when the signature is unrecognized.
pub fn detect_media_type(data: &[u8]) -> &'static str {
    if data.len() < 4 {
        return "image/jpeg";
    }

    // JPEG: FF D8 FF
    if data[0] == 0xFF && data[1] == 0xD8 && data[2] == 0xFF {
        return "image/jpeg";
    }

    // PNG: 89 50 4E 47
    if data[0] == 0x89 && data[1] == 0x50 && data[2] == 0x4E && data[3] == 0x47 {
        return "image/png";
    }

    "image/jpeg"
}

/// Encode image bytes as a `data:<media-type>;base64,<payload>` URI.
pub fn to_data_uri(data: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(data);
    format!("data:{};base64,{}", detect_media_type(data), payload)
}
