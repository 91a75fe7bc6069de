use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";
pub const DEFAULT_LLM_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct MacrolensConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    /// Upper bound for a single oracle call.
    pub timeout: Duration,
    /// MIME type declared for every inline image sent to the oracle.
    pub image_mime_type: String,
}

impl LLMConfig {
    pub fn new(gemini_api_key: String) -> Self {
        Self {
            gemini_api_key,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            timeout: DEFAULT_LLM_TIMEOUT,
            image_mime_type: DEFAULT_IMAGE_MIME_TYPE.to_string(),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
