use std::sync::Arc;

use crate::domain::{common::MacrolensConfig, generation::ports::LLMClient};

/// Relay service shared by every request handler. Holds only read-only
/// state, so clones are cheap and need no locking.
#[derive(Clone)]
pub struct Service {
    pub(crate) llm_client: Arc<dyn LLMClient>,
    pub(crate) image_mime_type: String,
}

impl Service {
    pub fn new(llm_client: Arc<dyn LLMClient>, image_mime_type: impl Into<String>) -> Self {
        Self {
            llm_client,
            image_mime_type: image_mime_type.into(),
        }
    }

    pub fn from_config(llm_client: Arc<dyn LLMClient>, config: &MacrolensConfig) -> Self {
        Self::new(llm_client, config.llm.image_mime_type.clone())
    }
}
