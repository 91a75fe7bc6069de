use futures::future::BoxFuture;

use crate::domain::{
    common::entities::app_errors::CoreError, generation::entities::GenerationResult,
    health::entities::HealthStatus, image::entities::ImageAsset,
    rendering::entities::DisplayBlock,
};

/// Client side of the relay endpoint.
#[cfg_attr(test, mockall::automock)]
pub trait RelayClient: Send + Sync {
    /// `image` is the raw base64 payload, without any data-URL prefix.
    fn process_image(
        &self,
        image: String,
        prompt: String,
    ) -> BoxFuture<'static, Result<GenerationResult, CoreError>>;

    fn generate(&self, prompt: String) -> BoxFuture<'static, Result<GenerationResult, CoreError>>;

    fn health(&self) -> BoxFuture<'static, Result<HealthStatus, CoreError>>;
}

/// The user-facing surface the orchestrator drives: a preview, a loading
/// indicator, a results container and blocking alerts.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionView {
    fn show_preview(&mut self, asset: &ImageAsset);

    fn hide_preview(&mut self);

    fn set_loading(&mut self, loading: bool);

    fn hide_results(&mut self);

    fn show_results(&mut self, block: &DisplayBlock);

    fn alert(&mut self, message: &str);
}
