//! Companion ecoclime-api backend client
//!
//! The companion service answers chat questions when the primary assistant
//! is unavailable and serves crop and vegetation suggestions per location.
//! It also keeps the recent alerts feed.

use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use shared::{Recommendation, RecentAlerts};

use crate::error::{AppError, AppResult};

const SERVICE: &str = "Companion backend";

#[derive(Clone)]
pub struct CompanionClient {
    http_client: Client,
    base_url: String,
    chat_timeout: Duration,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct LocationRequest<'a> {
    location: &'a str,
}

/// Chat answer; deployed versions use either field name
#[derive(Debug, Deserialize)]
struct ChatResponse {
    reply: Option<String>,
    response: Option<String>,
}

/// Crop payload; `crops` may hold names, cards or free text
#[derive(Debug, Default, Deserialize)]
pub struct CropsPayload {
    #[serde(default)]
    pub crops: serde_json::Value,
    #[serde(default, rename = "recommendationText", alias = "recommendation_text")]
    pub recommendation_text: Option<String>,
}

/// Vegetation result for a named location
#[derive(Debug, Deserialize)]
pub struct VegetationPayload {
    pub score: f64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub recommendations: Option<Recommendation>,
}

impl VegetationPayload {
    /// Non-empty recommendation lines
    pub fn recommendation_lines(&self) -> Vec<String> {
        self.recommendations
            .as_ref()
            .map(|r| {
                r.lines()
                    .into_iter()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl CompanionClient {
    pub fn new(http_client: Client, base_url: String, chat_timeout: Duration) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            chat_timeout,
        }
    }

    /// Fallback chat: POST /api/chat
    pub async fn chat(&self, message: &str) -> AppResult<String> {
        let response: ChatResponse = self
            .post_json("/api/chat", &ChatRequest { message }, Some(self.chat_timeout))
            .await?;

        response
            .reply
            .or(response.response)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| AppError::MalformedResponse {
                service: SERVICE,
                detail: "chat response has no reply".to_string(),
            })
    }

    /// Crop suggestions for a location: POST /api/crops
    pub async fn crops(&self, location: &str) -> AppResult<CropsPayload> {
        self.post_json("/api/crops", &LocationRequest { location }, None)
            .await
    }

    /// Vegetation assessment for a location: POST /api/vegetation
    pub async fn vegetation(&self, location: &str) -> AppResult<VegetationPayload> {
        self.post_json("/api/vegetation", &LocationRequest { location }, None)
            .await
    }

    /// Seasonal crop recommendations: GET /api/crop-recommendations
    pub async fn crop_recommendations(&self) -> AppResult<CropsPayload> {
        self.get_json("/api/crop-recommendations").await
    }

    /// Alerts logged today and yesterday: GET /api/alerts/recent
    pub async fn recent_alerts(&self) -> AppResult<RecentAlerts> {
        self.get_json("/api/alerts/recent").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::from_reqwest(SERVICE, e))?;

        Self::read_json(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        timeout: Option<Duration>,
    ) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http_client.post(&url).json(body);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::from_reqwest(SERVICE, e))?;

        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("Companion backend returned {}: {}", status, body);
            return Err(AppError::UpstreamStatus {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse {
                service: SERVICE,
                detail: e.to_string(),
            })
    }
}
