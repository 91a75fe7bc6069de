use std::path::PathBuf;

use clap::{Parser, Subcommand};
use macrolens_core::{
    domain::image::{DEFAULT_MAX_DIMENSION, DEFAULT_QUALITY},
    infrastructure::relay::{DEFAULT_RELAY_TIMEOUT, DEFAULT_RELAY_URL},
};

#[derive(Debug, Parser)]
#[command(name = "macrolens", version, about = "Estimate the nutrition of a food photo")]
pub struct Cli {
    /// Base URL of the relay.
    #[arg(long, env = "MACROLENS_URL", default_value = DEFAULT_RELAY_URL, global = true)]
    pub url: String,

    #[arg(
        long,
        env = "MACROLENS_TIMEOUT_SECS",
        default_value_t = DEFAULT_RELAY_TIMEOUT.as_secs(),
        global = true
    )]
    pub timeout_secs: u64,

    #[arg(long, env = "LOG_FILTER", default_value = "warn", global = true)]
    pub log_filter: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resize a photo, send it to the relay and print the estimate.
    Analyze(AnalyzeArgs),

    /// Send a plain text prompt.
    Generate { prompt: String },

    /// Check that the relay is up.
    Health,
}

#[derive(Debug, clap::Args)]
pub struct AnalyzeArgs {
    pub file: PathBuf,

    /// Instruction sent along with the image. Defaults to a nutrition prompt.
    #[arg(long)]
    pub prompt: Option<String>,

    /// Largest width or height sent to the relay.
    #[arg(long, default_value_t = DEFAULT_MAX_DIMENSION)]
    pub max_dimension: u32,

    /// JPEG quality in (0, 1].
    #[arg(long, default_value_t = DEFAULT_QUALITY)]
    pub quality: f32,

    /// Print the results container as HTML.
    #[arg(long)]
    pub html: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::parse_from([
            "macrolens",
            "analyze",
            "lunch.jpg",
            "--url",
            "http://relay:3000",
        ]);

        assert_eq!(cli.url, "http://relay:3000");
        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.file, PathBuf::from("lunch.jpg"));
        assert_eq!(args.max_dimension, 800);
        assert_eq!(args.quality, 0.8);
        assert!(args.prompt.is_none());
        assert!(!args.html);
    }

    #[test]
    fn test_generate_takes_prompt() {
        let cli = Cli::parse_from(["macrolens", "generate", "three breakfasts"]);

        assert!(matches!(
            cli.command,
            Command::Generate { prompt } if prompt == "three breakfasts"
        ));
    }
}
