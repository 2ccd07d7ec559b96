pub mod cli;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod prompt;
pub mod style;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

pub use client::{ChatClient, ChatMessage, ChatRequest, HttpChatClient, Role};
pub use config::{HumanizerConfig, Model};
pub use error::HumanizeError;
pub use pipeline::{HumanizationRequest, HumanizationResult, Humanizer};
pub use style::{resolve, Style};

// Logs go to stderr; stdout carries only the humanized text.
fn init_logging(verbose: u8) {
  let fallback = match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}

pub async fn run(cli: cli::Cli) -> anyhow::Result<ExitCode> {
  init_logging(cli.verbose);
  cli.execute().await
}
