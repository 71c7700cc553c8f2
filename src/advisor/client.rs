use anyhow::{Error, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::core::AppConfig;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// Client for the remote advisor, an OpenAI compatible chat
/// completion proxy. One request per call, no retries and no
/// streaming.
#[derive(Clone, Debug)]
pub struct AdvisorClient {
    client: reqwest::Client,
    url: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl AdvisorClient {
    pub fn new(url: &str, model: &str, temperature: f64, max_tokens: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_string(),
            model: model.to_string(),
            temperature,
            max_tokens,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.advisor_url,
            &config.advisor_model,
            config.temperature,
            config.max_tokens,
        )
    }

    pub fn payload(&self, messages: &[Message]) -> Value {
        json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        })
    }

    /// Send `messages` and return the text of the first choice. Any
    /// non-2xx status is an error.
    pub async fn completion(&self, messages: &[Message]) -> Result<String, Error> {
        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&self.payload(messages))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Advisor request failed: {}", status));
        }

        let body: Value = response.json().await?;
        first_choice_content(&body)
    }
}

fn first_choice_content(body: &Value) -> Result<String, Error> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(String::from)
        .ok_or(anyhow!("Advisor response missing message content: {}", body))
}
