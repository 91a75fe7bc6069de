use std::{io, path::Path, process::ExitCode, time::Duration};

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use macrolens_core::{
    domain::{
        image::{ImageAsset, NormalizeOptions},
        rendering::LineResultRenderer,
        submission::{DEFAULT_ANALYSIS_PROMPT, Orchestrator, RelayClient},
    },
    infrastructure::relay::HttpRelayClient,
};
use tracing_subscriber::EnvFilter;

use crate::{
    args::{AnalyzeArgs, Cli, Command},
    view::TerminalView,
};

mod args;
mod view;

const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// MIME type guessed from the file extension, like a browser file input.
fn mime_type_for(path: &Path) -> &'static str {
    ::image::ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_MIME_TYPE)
}

async fn analyze(relay: HttpRelayClient, args: AnalyzeArgs) -> anyhow::Result<ExitCode> {
    let bytes = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let mut asset = ImageAsset::new(bytes, mime_type_for(&args.file));
    if let Some(name) = args.file.file_name() {
        asset = asset.with_file_name(name.to_string_lossy());
    }

    let prompt = args
        .prompt
        .unwrap_or_else(|| DEFAULT_ANALYSIS_PROMPT.to_string());
    let options = NormalizeOptions::new(args.max_dimension, args.quality);

    let mut orchestrator = Orchestrator::new(
        relay,
        TerminalView::new(io::stdout(), args.html),
        LineResultRenderer,
        prompt,
        options,
    );

    orchestrator.select_file(Some(asset));
    let outcome = orchestrator.submit().await;
    orchestrator.finish();

    // The view has already alerted on failure.
    Ok(match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let relay = HttpRelayClient::new(&cli.url, Duration::from_secs(cli.timeout_secs))?;

    match cli.command {
        Command::Analyze(args) => analyze(relay, args).await,
        Command::Generate { prompt } => {
            let result = relay.generate(prompt).await?;
            println!("{}", result.generated);
            Ok(ExitCode::SUCCESS)
        }
        Command::Health => {
            let health = relay.health().await?;
            println!("{} {}", "relay".bold(), health.status.green());
            Ok(ExitCode::SUCCESS)
        }
    }
}
