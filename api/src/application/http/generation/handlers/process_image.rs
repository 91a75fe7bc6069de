use axum::extract::State;
use macrolens_core::domain::generation::{GenerationResult, GenerationService, ProcessImageInput};

use crate::application::http::{
    generation::validators::ProcessImageRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const PROCESS_IMAGE_FAILED: &str = "Failed to process image";

#[utoipa::path(
    post,
    path = "/process-image",
    tag = "generation",
    summary = "Analyze an image with a prompt",
    description = "Sends the decoded image and the prompt to the oracle in a single \
        multi-part request and returns its raw text.",
    request_body = ProcessImageRequest,
    responses(
        (status = 200, body = GenerationResult),
        (
            status = 400,
            description = "Missing image or prompt, or image is not base64",
            body = ApiErrorResponse
        ),
        (status = 413, description = "Body exceeds the configured limit", body = ApiErrorResponse),
        (status = 500, description = "Oracle call failed", body = ApiErrorResponse)
    )
)]
pub async fn process_image(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ProcessImageRequest>,
) -> Result<Response<GenerationResult>, ApiError> {
    let result = state
        .service
        .process_image(ProcessImageInput {
            image: payload.image,
            prompt: payload.prompt,
        })
        .await
        .map_err(|e| ApiError::from_core(e, PROCESS_IMAGE_FAILED))?;

    Ok(Response::OK(result))
}
