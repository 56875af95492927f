//! OpenAI chat-completions client for recommendation generation

use crate::config::ApiConfig;
use crate::error::{Result, ResumeOptimizerError};
use crate::llm::prompts::{PromptParams, PromptTemplates, SYSTEM_PROMPT};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Returned in place of recommendations when no API key was resolved.
pub const NOT_INITIALIZED_SENTINEL: &str = "OpenAI client not initialized";

/// Returned in place of recommendations when the request fails.
pub const GENERATION_FAILED_SENTINEL: &str = "Unable to generate improvements";

#[derive(Debug, Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

pub struct RecommendationClient {
    http: Option<reqwest::Client>,
    api_key: String,
    api: ApiConfig,
    templates: PromptTemplates,
}

impl RecommendationClient {
    /// Build a client from an explicitly resolved credential. `None` yields
    /// an uninitialized client whose requests fail fast without touching the
    /// network; scoring still works in that mode.
    pub fn new(api_key: Option<String>, api: ApiConfig) -> Result<Self> {
        let (http, api_key) = match api_key {
            Some(key) => {
                let client = reqwest::Client::builder()
                    .timeout(Duration::from_secs(api.request_timeout_secs))
                    .build()
                    .map_err(|e| {
                        ResumeOptimizerError::Configuration(format!(
                            "Failed to build HTTP client: {}",
                            e
                        ))
                    })?;
                (Some(client), key)
            }
            None => (None, String::new()),
        };

        Ok(Self {
            http,
            api_key,
            api,
            templates: PromptTemplates::default(),
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.http.is_some()
    }

    /// Request improvement recommendations for the resume against the job
    /// description. Returns the trimmed text of the first completion.
    pub async fn recommend(&self, resume_text: &str, job_text: &str) -> Result<String> {
        let http = self.http.as_ref().ok_or_else(|| {
            ResumeOptimizerError::Credential("No API key configured".to_string())
        })?;

        let params = PromptParams {
            resume_content: resume_text.to_string(),
            job_content: job_text.to_string(),
        };

        let request = ChatCompletionRequest {
            model: self.api.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: self.templates.render_improvement(&params),
                },
            ],
            max_tokens: self.api.max_tokens,
            temperature: self.api.temperature,
        };

        info!("Requesting recommendations from model {}", self.api.model);
        debug!(
            "Prompt sizes: resume {} chars, job description {} chars",
            resume_text.len(),
            job_text.len()
        );

        let url = format!(
            "{}/chat/completions",
            self.api.base_url.trim_end_matches('/')
        );
        let response = http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            // Keep the API's own error detail (quota, invalid model) for the
            // user-visible message.
            let detail: String = response
                .text()
                .await
                .unwrap_or_default()
                .trim()
                .chars()
                .take(300)
                .collect();
            return Err(ResumeOptimizerError::Generation(if detail.is_empty() {
                format!("API request failed with status {}", status)
            } else {
                format!("API request failed with status {}: {}", status, detail)
            }));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            ResumeOptimizerError::Generation(format!("Malformed API response: {}", e))
        })?;

        let text = completion
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| {
                ResumeOptimizerError::Generation("API response contained no choices".to_string())
            })?;

        Ok(text)
    }

    fn map_request_error(&self, err: reqwest::Error) -> ResumeOptimizerError {
        if err.is_timeout() {
            ResumeOptimizerError::GenerationTimeout(self.api.request_timeout_secs)
        } else if err.is_connect() {
            ResumeOptimizerError::Network(err.to_string())
        } else {
            ResumeOptimizerError::Generation(err.to_string())
        }
    }
}
