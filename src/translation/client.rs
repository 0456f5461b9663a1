use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Sampling temperature for every completion request.
const TEMPERATURE: f32 = 0.5;

/// Output budget for translation requests.
pub const TRANSLATION_MAX_TOKENS: u32 = 500;

/// Output budget for historical-analysis requests.
pub const ANALYSIS_MAX_TOKENS: u32 = 700;

/// One completion request: a system/user message pair plus the model
/// and output budget. Request-scoped; nothing is stored after the
/// response is rendered.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub model: String,
    pub max_tokens: u32,
}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Client for OpenAI-compatible chat-completion endpoints.
///
/// The API key is an explicit constructor argument; nothing here reads
/// the environment.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl CompletionClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Issues one completion call and returns the first choice's text,
    /// trimmed. Transport errors, non-success statuses, and malformed
    /// responses all surface as a single error kind carrying the
    /// underlying message. No retry.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let body = ChatCompletionBody {
            model: &request.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(&request.system),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(&request.user),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: request.max_tokens,
            stream: false,
        };

        let mut http_request = self.client.post(&url).json(&body);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        let body = response
            .text()
            .await
            .context("Failed to read API response")?;

        parse_completion(&body)
    }
}

/// Extracts the first choice's message content from a chat-completion
/// response body, trimmed of surrounding whitespace.
fn parse_completion(body: &str) -> Result<String> {
    let response: ChatCompletionResponse =
        serde_json::from_str(body).context("Malformed API response")?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .context("API response contained no choices")?;

    Ok(choice.message.content.trim().to_string())
}
