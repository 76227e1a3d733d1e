use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::RwLock;

use super::{LlmError, ModelClient};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Tried in order until one answers for the configured API key.
pub const CANDIDATE_MODELS: &[&str] = &[
    "gemini-2.5-flash",
    "gemini-2.5-pro",
    "gemini-pro",
    "gemini-1.0-pro",
];

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// Google Gemini `generateContent` client.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    candidates: Vec<String>,
    resolved_model: RwLock<Option<String>>,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        GeminiClient {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            candidates: CANDIDATE_MODELS.iter().map(|m| m.to_string()).collect(),
            resolved_model: RwLock::new(None),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Pin a single model, skipping candidate discovery.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.candidates = vec![model.into()];
        self
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// The model that answered first, if any call has succeeded yet.
    pub async fn resolved_model(&self) -> Option<String> {
        self.resolved_model.read().await.clone()
    }

    async fn generate_with(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(self.endpoint(model))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        if let Some(model) = self.resolved_model().await {
            return self.generate_with(&model, prompt).await;
        }

        // A pinned model reports its own failure instead of a generic one.
        if let [model] = self.candidates.as_slice() {
            let text = self.generate_with(model, prompt).await?;
            *self.resolved_model.write().await = Some(model.clone());
            return Ok(text);
        }

        for model in &self.candidates {
            log::info!("Trying Gemini model: {model}");
            match self.generate_with(model, prompt).await {
                Ok(text) => {
                    log::info!("Using Gemini model: {model}");
                    *self.resolved_model.write().await = Some(model.clone());
                    return Ok(text);
                }
                Err(e) => log::warn!("Gemini model {model} not available: {e}"),
            }
        }

        Err(LlmError::NoModelAvailable)
    }
}
