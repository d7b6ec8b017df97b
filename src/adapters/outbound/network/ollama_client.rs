use crate::ports::outbound::AdviceClient;
use crate::shared::error::CompatError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Timeout for advice requests; local model generation can take a while
const ADVICE_TIMEOUT_SECS: u64 = 30;

/// OllamaAdviceClient adapter for natural-language build advice.
///
/// Implements the AdviceClient port against a local Ollama endpoint using
/// the non-streaming generate API. Pure pass-through: the only logic here is
/// framing the question with a hardware-expert instruction and extracting
/// the answer field.
pub struct OllamaAdviceClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaAdviceClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let user_agent = format!("pc-compat/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(ADVICE_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }

    fn build_prompt(question: &str) -> String {
        format!(
            "You are an expert on PC hardware compatibility. {} Answer briefly (2-3 sentences).",
            question
        )
    }

    fn error(&self, details: impl Into<String>) -> anyhow::Error {
        CompatError::AdviceUnavailable {
            model: self.model.clone(),
            details: details.into(),
        }
        .into()
    }
}

#[async_trait]
impl AdviceClient for OllamaAdviceClient {
    async fn advise(&self, question: &str) -> Result<String> {
        let body = serde_json::json!({
            "model": self.model,
            "prompt": Self::build_prompt(question),
            "stream": false,
        });

        let response = self
            .client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(self.error(format!("status code {}", response.status())));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| self.error(e.to_string()))?;

        match json.get("response").and_then(|r| r.as_str()) {
            Some(answer) if !answer.is_empty() => Ok(answer.to_string()),
            _ => Err(self.error("response field missing or empty")),
        }
    }
}
