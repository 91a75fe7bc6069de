use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRequest {
    #[serde(default)]
    #[validate(
        required(message = "Prompt is required"),
        length(min = 1, message = "Prompt is required")
    )]
    #[schema(example = "List three high-protein breakfasts")]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProcessImageRequest {
    /// Base64 encoded image, without a data-URL prefix.
    #[serde(default)]
    #[validate(
        required(message = "Image data and prompt are required"),
        length(min = 1, message = "Image data and prompt are required")
    )]
    pub image: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "Image data and prompt are required"),
        length(min = 1, message = "Image data and prompt are required")
    )]
    pub prompt: Option<String>,
}
