use std::sync::Arc;

use crate::{
    domain::common::{MacrolensConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type MacrolensService = Service;

/// Builds the relay service with the production oracle client. Called once
/// at startup.
pub fn create_service(config: MacrolensConfig) -> Result<MacrolensService, CoreError> {
    let llm_client = GeminiLLMClient::new(&config.llm)?;

    tracing::info!(
        model = %config.llm.gemini_model,
        timeout_secs = config.llm.timeout.as_secs(),
        "Oracle client initialized"
    );

    Ok(Service::from_config(Arc::new(llm_client), &config))
}
