use crate::core::insight::{InsightBackend, InsightError, InsightRequest};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat<'a>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'a str,
    json_schema: JsonSchemaFormat<'a>,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat<'a> {
    name: &'a str,
    strict: bool,
    schema: &'a Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Chat Completions client producing schema-constrained JSON
///
/// Handles the transport to an OpenAI-compatible endpoint. Validation of
/// the returned JSON is left to the insight generator.
#[derive(Clone)]
pub struct OpenAiBackend {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    client: Client,
}

impl OpenAiBackend {
    /// Create a new backend client
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        temperature: f32,
        request_timeout: Duration,
    ) -> Result<Self, InsightError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            base_url,
            api_key,
            model,
            temperature,
            client,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

fn transport_error(e: reqwest::Error) -> InsightError {
    InsightError::Transport(e.to_string())
}

#[async_trait]
impl InsightBackend for OpenAiBackend {
    async fn complete(&self, request: &InsightRequest) -> Result<String, InsightError> {
        let body = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: &request.schema_name,
                    strict: true,
                    schema: &request.schema,
                },
            },
        };

        let url = self.completions_url();
        tracing::debug!("Requesting insight from: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(InsightError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                InsightError::InvalidResponse(format!("Failed to decode completion: {}", e))
            } else {
                transport_error(e)
            }
        })?;

        let message = chat
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or(InsightError::EmptyContent)?;

        if let Some(refusal) = message.refusal {
            return Err(InsightError::InvalidResponse(format!("Model refused: {}", refusal)));
        }

        message
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or(InsightError::EmptyContent)
    }
}
