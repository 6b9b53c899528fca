//! Generative-language assistant client
//!
//! Sends farming questions to a `generateContent` endpoint and extracts the
//! first candidate's text.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{assistant_prompt, EMPTY_ANSWER};

use crate::error::{AppError, AppResult};

const SERVICE: &str = "Assistant";

/// Client for the primary chat backend
#[derive(Clone)]
pub struct AssistantClient {
    http_client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

impl AssistantClient {
    pub fn new(http_client: Client, endpoint: String, model: String, api_key: String) -> Self {
        Self {
            http_client,
            endpoint,
            model,
            api_key,
        }
    }

    /// Whether an API key is configured; without one the primary path is skipped
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Ask the assistant a question and return its answer text
    pub async fn ask(&self, question: &str) -> AppResult<String> {
        if !self.is_configured() {
            return Err(AppError::Configuration(
                "assistant API key is not set".to_string(),
            ));
        }

        let url = format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(assistant_prompt(question)),
                }],
            }],
            generation_config: GenerationConfig::default(),
        };

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::from_reqwest(SERVICE, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("Assistant API returned {}: {}", status, body);
            return Err(AppError::UpstreamStatus {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        let result: GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|e| AppError::MalformedResponse {
                    service: SERVICE,
                    detail: e.to_string(),
                })?;

        Ok(result
            .first_text()
            .unwrap_or_else(|| EMPTY_ANSWER.to_string()))
    }
}
