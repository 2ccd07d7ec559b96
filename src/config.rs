use std::fmt;
use std::str::FromStr;

use crate::error::{HumanizeError, Result};

const K_API_KEY: &str = "GROQ_API_KEY";
const K_BASE_URL: &str = "GROQ_BASE_URL";
const K_MODEL: &str = "HUMANIZER_MODEL";
const K_TEMPERATURE: &str = "HUMANIZER_TEMPERATURE";

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const MIN_TEMPERATURE: f64 = 0.1;
pub const MAX_TEMPERATURE: f64 = 1.0;

/// Hosted models the humanizer can be pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Model {
  #[default]
  DeepseekR1DistillLlama70b,
  Llama3_8b,
  Llama3_70b,
  Mixtral8x7b,
  Gemma2_9b,
}

impl Model {
  pub const ALL: [Model; 5] = [
    Model::DeepseekR1DistillLlama70b,
    Model::Llama3_8b,
    Model::Llama3_70b,
    Model::Mixtral8x7b,
    Model::Gemma2_9b,
  ];

  pub fn id(self) -> &'static str {
    match self {
      Model::DeepseekR1DistillLlama70b => "deepseek-r1-distill-llama-70b",
      Model::Llama3_8b => "llama3-8b-8192",
      Model::Llama3_70b => "llama3-70b-8192",
      Model::Mixtral8x7b => "mixtral-8x7b-32768",
      Model::Gemma2_9b => "gemma2-9b-it",
    }
  }
}

impl fmt::Display for Model {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.id())
  }
}

impl FromStr for Model {
  type Err = HumanizeError;

  fn from_str(s: &str) -> Result<Self> {
    let s = s.trim();
    Self::ALL
      .into_iter()
      .find(|m| m.id().eq_ignore_ascii_case(s))
      .ok_or_else(|| HumanizeError::UnknownModel(s.to_string()))
  }
}

/// Whether `t` lies inside the range the remote service is tuned for.
/// Values outside it are still sent as-is.
pub fn temperature_in_range(t: f64) -> bool {
  (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&t)
}

/// Values given explicitly (e.g. on the command line) that take precedence
/// over the environment.
#[derive(Clone, Default, PartialEq)]
pub struct Overrides {
  pub api_key: Option<String>,
  pub model: Option<Model>,
  pub temperature: Option<f64>,
}

/// Everything one humanize call needs to reach the remote model.
/// Built once per invocation and never mutated afterwards.
#[derive(Clone, PartialEq)]
pub struct HumanizerConfig {
  pub api_key: String,
  pub model: Model,
  pub temperature: f64,
  pub base_url: String,
}

impl fmt::Debug for HumanizerConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("HumanizerConfig")
      .field("api_key", &mask_key(&self.api_key))
      .field("model", &self.model)
      .field("temperature", &self.temperature)
      .field("base_url", &self.base_url)
      .finish()
  }
}

impl HumanizerConfig {
  pub fn new(api_key: impl Into<String>) -> Self {
    Self {
      api_key: api_key.into(),
      model: Model::default(),
      temperature: DEFAULT_TEMPERATURE,
      base_url: DEFAULT_BASE_URL.to_string(),
    }
  }

  /// Read configuration from the process environment (after loading `.env`).
  /// Anything set in `overrides` wins, and the matching environment value is
  /// then never parsed, so a malformed variable cannot block an explicit flag.
  pub fn load(overrides: Overrides) -> Result<Self> {
    let key = overrides
      .api_key
      .filter(|k| !k.trim().is_empty())
      .or_else(api_key_from_env)
      .ok_or(HumanizeError::MissingApiKey)?;
    let mut config = Self::new(key);

    config.model = match overrides.model {
      Some(model) => model,
      None => match env_default(K_MODEL) {
        Some(raw) => raw.parse()?,
        None => Model::default(),
      },
    };
    config.temperature = match overrides.temperature {
      Some(t) => t,
      None => match env_default(K_TEMPERATURE) {
        Some(raw) => raw
          .trim()
          .parse()
          .map_err(|_| HumanizeError::InvalidTemperature(raw.clone()))?,
        None => DEFAULT_TEMPERATURE,
      },
    };
    if let Some(url) = env_default(K_BASE_URL) {
      config.base_url = url;
    }

    tracing::debug!(?config, "loaded configuration");
    Ok(config)
  }

  pub fn with_model(self, model: Model) -> Self {
    Self { model, ..self }
  }

  pub fn with_temperature(self, temperature: f64) -> Self {
    Self { temperature, ..self }
  }

  pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
    Self { base_url: base_url.into(), ..self }
  }

  pub fn completions_url(&self) -> String {
    format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
  }
}

fn env_default(key: &str) -> Option<String> {
  // Load .env once; real environment variables win
  let _ = dotenvy::dotenv();
  std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn api_key_from_env() -> Option<String> {
  let key = env_default(K_API_KEY);
  match &key {
    Some(k) => tracing::debug!("API key found in environment: {}", mask_key(k)),
    None => tracing::debug!("no {K_API_KEY} in environment"),
  }
  key
}

fn mask_key(key: &str) -> String {
  let prefix: String = key.chars().take(6).collect();
  format!("{prefix}...")
}
