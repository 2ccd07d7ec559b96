use serde::Serialize;

use crate::client::{ChatClient, ChatMessage, ChatRequest, HttpChatClient};
use crate::config::{self, HumanizerConfig, Model};
use crate::error::{HumanizeError, Result};
use crate::prompt;
use crate::style::Style;

/// One user action: the text to rewrite and how to rewrite it.
#[derive(Debug, Clone, PartialEq)]
pub struct HumanizationRequest {
  pub text: String,
  pub style: String,
  pub temperature: f64,
}

impl HumanizationRequest {
  pub fn new(text: impl Into<String>, style: impl Into<String>, temperature: f64) -> Self {
    Self { text: text.into(), style: style.into(), temperature }
  }

  /// Empty or whitespace-only text never reaches the remote model.
  pub fn validate(&self) -> Result<()> {
    if self.text.trim().is_empty() {
      return Err(HumanizeError::EmptyInput);
    }
    Ok(())
  }

  pub fn resolved_style(&self) -> Style {
    Style::resolve_id(&self.style)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumanizationResult {
  pub text: String,
  pub model: String,
  pub word_count: usize,
}

pub struct Humanizer<C> {
  client: C,
}

impl Humanizer<HttpChatClient> {
  /// Humanizer talking to the endpoint named in `config`.
  pub fn from_config(config: &HumanizerConfig) -> Result<Self> {
    let client = HttpChatClient::new(config.completions_url(), config.api_key.clone())?;
    Ok(Self::new(client))
  }
}

impl<C: ChatClient> Humanizer<C> {
  pub fn new(client: C) -> Self {
    Self { client }
  }

  pub fn client(&self) -> &C {
    &self.client
  }

  /// Build the system + user message pair for `request` against `model`.
  pub fn build_chat_request(request: &HumanizationRequest, model: Model) -> ChatRequest {
    ChatRequest {
      model: model.id().to_string(),
      temperature: request.temperature,
      messages: vec![
        ChatMessage::system(prompt::get_system_prompt()),
        ChatMessage::user(prompt::build_user_prompt(&request.text, &request.style)),
      ],
    }
  }

  /// Run one rewrite. The request's temperature is what gets sent; `config`
  /// supplies the model.
  pub async fn humanize(&self, request: &HumanizationRequest, config: &HumanizerConfig) -> Result<HumanizationResult> {
    if Style::from_id(&request.style).is_none() {
      tracing::warn!(style = %request.style, "unknown style, using {}", Style::default());
    }
    if !config::temperature_in_range(request.temperature) {
      tracing::warn!(
        temperature = request.temperature,
        "temperature outside {}..={}, passing it through unchanged",
        config::MIN_TEMPERATURE,
        config::MAX_TEMPERATURE
      );
    }

    let chat = Self::build_chat_request(request, config.model);
    tracing::info!(model = %chat.model, style = %request.resolved_style(), "humanizing {} words", prompt::word_count(&request.text));

    let raw = self
      .client
      .complete(&chat)
      .await
      .inspect_err(|e| tracing::debug!("chat completion failed: {e:?}"))?;
    let text = prompt::sanitize_output(&raw);
    let word_count = prompt::word_count(&text);
    tracing::debug!(raw_len = raw.len(), clean_len = text.len(), "response sanitized");

    Ok(HumanizationResult { text, model: chat.model, word_count })
  }

  /// Same as [`Humanizer::humanize`] but folds any failure into an
  /// `"Error: {details}"` string, so callers always get text to show.
  pub async fn humanize_text(&self, text: &str, style_id: &str, temperature: f64, config: &HumanizerConfig) -> String {
    let request = HumanizationRequest::new(text, style_id, temperature);
    match self.humanize(&request, config).await {
      Ok(result) => result.text,
      Err(e) => error_text(&e),
    }
  }
}

pub fn error_text(err: &HumanizeError) -> String {
  format!("Error: {err}")
}
