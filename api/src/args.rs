use std::time::Duration;

use clap::Parser;
use macrolens_core::domain::common::{
    DEFAULT_GEMINI_MODEL, DEFAULT_IMAGE_MIME_TYPE, LLMConfig, MacrolensConfig,
};

pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(name = "macrolens-api", version, about = "Relay between image clients and the oracle")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list of origins, `*` allows any.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', default_value = "*")]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub llm_timeout_secs: u64,

    /// MIME type declared for images forwarded to the oracle.
    #[arg(long, env = "IMAGE_MIME_TYPE", default_value = DEFAULT_IMAGE_MIME_TYPE)]
    pub image_mime_type: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// `tracing` env-filter directives.
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl ServerArgs {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o.trim() == "*")
    }
}

impl From<Args> for MacrolensConfig {
    fn from(args: Args) -> Self {
        MacrolensConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.google_api_key,
                gemini_model: args.llm.gemini_model,
                timeout: Duration::from_secs(args.llm.llm_timeout_secs),
                image_mime_type: args.llm.image_mime_type,
            },
        }
    }
}
