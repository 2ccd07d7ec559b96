use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use serde_json::json;
use tokio::io::AsyncReadExt;

use crate::clipboard;
use crate::config::{HumanizerConfig, Model, Overrides, DEFAULT_TEMPERATURE};
use crate::error::HumanizeError;
use crate::pipeline::{self, HumanizationRequest, Humanizer};
use crate::prompt;
use crate::style::Style;

#[derive(Parser, Debug)]
#[command(name = "humanize", version, about = "Rewrite robotic text so it reads like a person wrote it")]
pub struct Cli {
  /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
  #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
  pub verbose: u8,
  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Humanize text from an argument, a file, or stdin
  Run(RunArgs),
  /// List the available humanization styles
  Styles,
  /// List the selectable models
  Models,
}

#[derive(Args, Debug)]
pub struct RunArgs {
  /// Text to humanize; read from --file or stdin when omitted
  pub text: Option<String>,
  #[arg(long, short = 'f', conflicts_with = "text", help = "Read the input text from a file")]
  pub file: Option<PathBuf>,
  #[arg(long, short = 's', default_value = "conversational", help = "Humanization style (unknown styles fall back to conversational)")]
  pub style: String,
  #[arg(long, short = 't', allow_negative_numbers = true, help = "Creativity level, normally 0.1 to 1.0 [default: 0.7]")]
  pub temperature: Option<f64>,
  #[arg(long, short = 'm', help = "Model to use [default: deepseek-r1-distill-llama-70b]")]
  pub model: Option<Model>,
  #[arg(long, help = "API key (overrides GROQ_API_KEY)")]
  pub api_key: Option<String>,
  #[arg(long, help = "Copy the humanized text to the clipboard")]
  pub copy: bool,
  #[arg(long, help = "Output machine-readable JSON")]
  pub json: bool,
}

impl Cli {
  pub async fn execute(self) -> anyhow::Result<ExitCode> {
    match self.command {
      Command::Run(args) => run(args).await,
      Command::Styles => {
        for style in Style::ALL {
          let marker = if style == Style::default() { " (default)" } else { "" };
          println!("{style}{marker}");
        }
        Ok(ExitCode::SUCCESS)
      }
      Command::Models => {
        for model in Model::ALL {
          let marker = if model == Model::default() { " (default)" } else { "" };
          println!("{model}{marker}");
        }
        Ok(ExitCode::SUCCESS)
      }
    }
  }
}

async fn read_input(args: &RunArgs) -> anyhow::Result<String> {
  if let Some(text) = &args.text {
    return Ok(text.clone());
  }
  if let Some(path) = &args.file {
    return tokio::fs::read_to_string(path)
      .await
      .with_context(|| format!("failed to read {}", path.display()));
  }
  let mut buf = String::new();
  tokio::io::stdin().read_to_string(&mut buf).await.context("failed to read stdin")?;
  Ok(buf)
}

fn fail(json_out: bool, err: &HumanizeError) -> ExitCode {
  if err.is_remote() {
    tracing::error!("remote model call failed: {err}");
  } else {
    tracing::debug!("request not sent: {err}");
  }
  if json_out {
    println!("{}", json!({ "error": err.to_string() }));
  } else if matches!(err, HumanizeError::EmptyInput) {
    eprintln!("{err}");
  } else {
    println!("{}", pipeline::error_text(err));
  }
  ExitCode::FAILURE
}

async fn run(args: RunArgs) -> anyhow::Result<ExitCode> {
  let text = read_input(&args).await?;

  let mut request = HumanizationRequest::new(text, args.style.clone(), DEFAULT_TEMPERATURE);
  if let Err(e) = request.validate() {
    return Ok(fail(args.json, &e));
  }

  let overrides = Overrides {
    api_key: args.api_key.clone(),
    model: args.model,
    temperature: args.temperature,
  };
  let config = match HumanizerConfig::load(overrides) {
    Ok(config) => config,
    Err(e) => return Ok(fail(args.json, &e)),
  };
  let temperature = config.temperature;
  request.temperature = temperature;

  let humanizer = Humanizer::from_config(&config)?;
  let result = match humanizer.humanize(&request, &config).await {
    Ok(result) => result,
    Err(e) => return Ok(fail(args.json, &e)),
  };
  let original_word_count = prompt::word_count(&request.text);

  if args.json {
    println!(
      "{}",
      json!({
        "style": request.resolved_style().id(),
        "model": &result.model,
        "temperature": temperature,
        "original_word_count": original_word_count,
        "humanized_word_count": result.word_count,
        "text": &result.text,
      })
    );
  } else {
    println!("{}", result.text);
    eprintln!("Word count: {original_word_count} -> {}", result.word_count);
  }

  if args.copy {
    match clipboard::copy_to_clipboard(&result.text) {
      Ok(()) => eprintln!("Copied to clipboard"),
      Err(e) => {
        tracing::warn!("clipboard copy failed: {e:#}");
        eprintln!("Failed to copy text. Please copy manually.");
      }
    }
  }

  Ok(ExitCode::SUCCESS)
}
