use reqwest::StatusCode;

/// Everything that can go wrong between taking the user's text and handing
/// back a humanized version.
#[derive(Debug, thiserror::Error)]
pub enum HumanizeError {
  #[error("Please enter some text to humanize")]
  EmptyInput,

  #[error("missing API key: set GROQ_API_KEY or pass --api-key")]
  MissingApiKey,

  #[error("unknown model `{0}`")]
  UnknownModel(String),

  #[error("invalid temperature `{0}`")]
  InvalidTemperature(String),

  #[error("request failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("HTTP {status} - {body}")]
  Status { status: StatusCode, body: String },

  #[error("malformed response: {0}")]
  MalformedResponse(String),
}

impl HumanizeError {
  /// Errors raised while talking to the remote model, as opposed to local
  /// input or configuration problems.
  pub fn is_remote(&self) -> bool {
    matches!(self, Self::Http(_) | Self::Status { .. } | Self::MalformedResponse(_))
  }
}

pub type Result<T, E = HumanizeError> = std::result::Result<T, E>;
