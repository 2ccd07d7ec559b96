use std::process::ExitCode;

use clap::Parser;
use text_humanizer::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();
  match text_humanizer::run(cli).await {
    Ok(code) => code,
    Err(e) => {
      eprintln!("error: {e:#}");
      ExitCode::FAILURE
    }
  }
}
