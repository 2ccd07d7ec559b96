use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{HumanizeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  System,
  User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
  pub role: Role,
  pub content: String,
}

impl ChatMessage {
  pub fn system(content: impl Into<String>) -> Self {
    Self { role: Role::System, content: content.into() }
  }

  pub fn user(content: impl Into<String>) -> Self {
    Self { role: Role::User, content: content.into() }
  }
}

/// Body of an OpenAI-compatible `/chat/completions` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
  pub model: String,
  pub temperature: f64,
  pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
  #[serde(default)]
  choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
  message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
  content: Option<String>,
}

/// A remote text-generation capability. Returns the raw assistant content.
#[async_trait]
pub trait ChatClient: Send + Sync {
  async fn complete(&self, request: &ChatRequest) -> Result<String>;
}

/// Chat-completions client for Groq and other OpenAI-compatible endpoints.
#[derive(Clone)]
pub struct HttpChatClient {
  http: reqwest::Client,
  url: String,
  api_key: String,
}

impl HttpChatClient {
  pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
    // No timeout: long-form rewrites routinely take many seconds
    let http = reqwest::Client::builder().build()?;
    Ok(Self { http, url: url.into(), api_key: api_key.into() })
  }
}

#[async_trait]
impl ChatClient for HttpChatClient {
  async fn complete(&self, request: &ChatRequest) -> Result<String> {
    tracing::debug!(model = %request.model, temperature = request.temperature, url = %self.url, "sending chat completion");

    let resp = self
      .http
      .post(&self.url)
      .header("content-type", "application/json")
      .header("authorization", format!("Bearer {}", self.api_key))
      .json(request)
      .send()
      .await?;

    let status = resp.status();
    let text_body = resp.text().await?;
    if !status.is_success() {
      return Err(HumanizeError::Status { status, body: text_body });
    }

    parse_completion(&text_body)
  }
}

fn parse_completion(body: &str) -> Result<String> {
  let parsed: ChatResponse =
    serde_json::from_str(body).map_err(|e| HumanizeError::MalformedResponse(e.to_string()))?;
  parsed
    .choices
    .into_iter()
    .next()
    .and_then(|c| c.message.content)
    .ok_or_else(|| HumanizeError::MalformedResponse("no message content in response".into()))
}
