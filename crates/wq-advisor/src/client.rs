//! Blocking chat-completion client.
//!
//! One POST per analysis request; the comparison report never waits on it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AdvisorConfig;
use crate::error::AdvisorError;
use crate::prompt::{AdvisoryRequest, SYSTEM_PROMPT, build_prompt};

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Send the advisory request and return the narrative text verbatim.
pub fn request_advisory(
    config: &AdvisorConfig,
    request: &AdvisoryRequest<'_>,
) -> Result<String, AdvisorError> {
    let api_key = config.api_key.as_ref().ok_or(AdvisorError::MissingKey)?;
    let user_prompt = build_prompt(request);
    debug!(model = %config.model, prompt_chars = user_prompt.len(), "requesting advisory");

    let client = reqwest::blocking::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|error| AdvisorError::Network(error.to_string()))?;

    let body = ChatRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_prompt,
            },
        ],
    };

    let response = client
        .post(&config.endpoint)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .map_err(|error| AdvisorError::Network(error.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().unwrap_or_default();
        let message = match serde_json::from_str::<ApiError>(&text) {
            Ok(parsed) => parsed.error.message,
            Err(_) => text,
        };
        return Err(AdvisorError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let text = response
        .text()
        .map_err(|error| AdvisorError::Network(error.to_string()))?;
    extract_narrative(&text)
}

/// Pull the first choice's content out of a chat-completion response body.
fn extract_narrative(body: &str) -> Result<String, AdvisorError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|error| AdvisorError::Parse(error.to_string()))?;
    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(AdvisorError::EmptyResponse)
}
