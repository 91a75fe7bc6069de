use std::future::Future;

use futures::future::BoxFuture;

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::{
        entities::GenerationResult,
        value_objects::{GenerateInput, ProcessImageInput},
    },
};

/// Client for the generative model. Object safe so a single instance can be
/// shared behind an `Arc` and swapped for a double in tests.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
    ) -> BoxFuture<'static, Result<String, CoreError>>;

    fn generate_with_text(&self, prompt: String) -> BoxFuture<'static, Result<String, CoreError>>;
}

/// Relay operations exposed by the API
pub trait GenerationService: Send + Sync {
    fn generate(
        &self,
        input: GenerateInput,
    ) -> impl Future<Output = Result<GenerationResult, CoreError>> + Send;

    fn process_image(
        &self,
        input: ProcessImageInput,
    ) -> impl Future<Output = Result<GenerationResult, CoreError>> + Send;
}
