use axum::extract::State;
use macrolens_core::domain::generation::{GenerateInput, GenerationResult, GenerationService};

use crate::application::http::{
    generation::validators::GenerateRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const GENERATE_FAILED: &str = "Failed to generate content";

#[utoipa::path(
    post,
    path = "/generate",
    tag = "generation",
    summary = "Generate text from a prompt",
    description = "Forwards the prompt verbatim to the oracle and returns its raw text.",
    request_body = GenerateRequest,
    responses(
        (status = 200, body = GenerationResult),
        (status = 400, description = "Missing or empty prompt", body = ApiErrorResponse),
        (status = 500, description = "Oracle call failed", body = ApiErrorResponse)
    )
)]
pub async fn generate(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRequest>,
) -> Result<Response<GenerationResult>, ApiError> {
    let result = state
        .service
        .generate(GenerateInput {
            prompt: payload.prompt,
        })
        .await
        .map_err(|e| ApiError::from_core(e, GENERATE_FAILED))?;

    Ok(Response::OK(result))
}
