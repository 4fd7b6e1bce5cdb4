use crate::advice::AdviceProvider;
use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::llm::types::*;
use log::debug;
use reqwest::Client;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    pub fn from_config(config: &PlannerConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        Ok(Self::new(api_key, config.model.clone()))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let payload = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            system_instruction: None,
            generation_config: None,
        };

        debug!("Sending {} char prompt to {}", prompt.len(), self.model);
        let res = self.client.post(&url).json(&payload).send().await?;
        let status = res.status();

        if !status.is_success() {
            let err_text = res.text().await?;
            return Err(PlannerError::AdviceFailed(format!(
                "Gemini API Error (status {}): {}",
                status, err_text
            )));
        }

        let body: GenerateContentResponse = res.json().await?;
        extract_text(body)
    }
}

impl AdviceProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let text = self.generate_text(prompt).await?;
        Ok(text.trim().to_string())
    }
}

/// Concatenates the text parts of the first candidate.
pub fn extract_text(body: GenerateContentResponse) -> Result<String> {
    let candidate = body
        .candidates
        .ok_or_else(|| PlannerError::AdviceFailed("No candidates returned".to_string()))?
        .into_iter()
        .next()
        .ok_or_else(|| PlannerError::AdviceFailed("Empty candidates list".to_string()))?;

    let content = candidate.content.ok_or_else(|| {
        PlannerError::AdviceFailed(format!(
            "Candidate has no content (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        ))
    })?;

    let text: Vec<String> = content
        .parts
        .into_iter()
        .filter_map(|part| match part {
            Part::Text { text } => Some(text),
            Part::Other(_) => None,
        })
        .collect();

    if text.is_empty() {
        return Err(PlannerError::AdviceFailed(
            "Model returned non-text content".to_string(),
        ));
    }

    Ok(text.concat())
}
