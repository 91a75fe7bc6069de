use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    generation::entities::GenerationResult,
    image::{
        entities::ImageAsset,
        services::{normalize_image, strip_data_url_prefix},
        value_objects::NormalizeOptions,
    },
    rendering::{entities::DisplayBlock, ports::ResultRenderer},
    submission::{
        entities::SubmissionState,
        ports::{RelayClient, SubmissionView},
    },
};

pub const DEFAULT_ANALYSIS_PROMPT: &str = "Analyze this food image and estimate its nutritional \
content. Answer with one item per line in the form 'Label: value', covering Food, Calories, \
Protein, Carbs and Fat, then add a short Note line about how confident the estimate is.";

pub const NO_FILE_ALERT: &str = "Please select an image file";
pub const INVALID_FILE_ALERT: &str = "Please select a valid image file";
pub const SUBMISSION_FAILED_ALERT: &str = "Error analyzing image. Please try again.";

/// Drives one image submission from file selection to rendered results.
///
/// `submit` takes `&mut self`, so an orchestrator can never have two
/// submissions in flight.
pub struct Orchestrator<R, V, P> {
    relay: R,
    view: V,
    renderer: P,
    options: NormalizeOptions,
    prompt: String,
    state: SubmissionState,
    selected: Option<ImageAsset>,
}

impl<R, V, P> Orchestrator<R, V, P>
where
    R: RelayClient,
    V: SubmissionView,
    P: ResultRenderer,
{
    pub fn new(
        relay: R,
        view: V,
        renderer: P,
        prompt: impl Into<String>,
        options: NormalizeOptions,
    ) -> Self {
        Self {
            relay,
            view,
            renderer,
            options,
            prompt: prompt.into(),
            state: SubmissionState::Idle,
            selected: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Shows a preview for image files; anything else clears it.
    pub fn select_file(&mut self, asset: Option<ImageAsset>) -> SubmissionState {
        match asset.as_ref() {
            Some(asset) if asset.is_image() => {
                self.view.show_preview(asset);
                self.state = SubmissionState::Previewing;
            }
            _ => {
                self.view.hide_preview();
                self.state = SubmissionState::Idle;
            }
        }
        self.selected = asset;
        self.state
    }

    #[instrument(skip(self), fields(submission_id = %generate_uuid_v7()))]
    pub async fn submit(&mut self) -> Result<DisplayBlock, CoreError> {
        let alert = match self.selected.as_ref().map(ImageAsset::is_image) {
            None => Some(NO_FILE_ALERT),
            Some(false) => Some(INVALID_FILE_ALERT),
            Some(true) => None,
        };
        if let Some(message) = alert {
            self.view.alert(message);
            self.state = SubmissionState::Idle;
            return Err(CoreError::InvalidInput(message.to_string()));
        }

        self.state = SubmissionState::Submitting;
        self.view.set_loading(true);
        self.view.hide_results();

        match self.analyze().await {
            Ok(result) => {
                self.state = SubmissionState::Success;
                self.view.set_loading(false);
                let block = self.renderer.render(&result.generated);
                self.view.show_results(&block);
                tracing::info!(
                    items = block.len(),
                    fields = block.fields().count(),
                    "Submission rendered"
                );
                Ok(block)
            }
            Err(e) => {
                tracing::error!(error = %e, "Submission failed");
                self.state = SubmissionState::Failed;
                self.view.set_loading(false);
                self.view.alert(SUBMISSION_FAILED_ALERT);
                Err(e)
            }
        }
    }

    /// Returns a finished submission to `Idle`.
    pub fn finish(&mut self) -> SubmissionState {
        if self.state.is_finished() {
            self.state = SubmissionState::Idle;
        }
        self.state
    }

    async fn analyze(&self) -> Result<GenerationResult, CoreError> {
        let asset = self
            .selected
            .as_ref()
            .ok_or_else(|| CoreError::InvalidInput(NO_FILE_ALERT.to_string()))?;

        let normalized = normalize_image(asset, &self.options)?;
        let data_url = normalized.to_data_url();
        let payload = strip_data_url_prefix(&data_url).to_string();

        tracing::debug!(
            width = normalized.width,
            height = normalized.height,
            payload_size = payload.len(),
            "Sending normalized image to relay"
        );

        self.relay.process_image(payload, self.prompt.clone()).await
    }
}
