use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, image::decode_base64_payload};

pub const PROMPT_REQUIRED: &str = "Prompt is required";
pub const IMAGE_AND_PROMPT_REQUIRED: &str = "Image data and prompt are required";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub data: Vec<u8>,
    pub mime_type: String,
}

/// A validated request for the oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub image: Option<ImagePayload>,
}

impl GenerationRequest {
    pub fn text(prompt: Option<String>) -> Result<Self, CoreError> {
        let prompt = non_empty(prompt)
            .ok_or_else(|| CoreError::InvalidInput(PROMPT_REQUIRED.to_string()))?;

        Ok(Self {
            prompt,
            image: None,
        })
    }

    pub fn with_image(
        image: Option<String>,
        prompt: Option<String>,
        mime_type: &str,
    ) -> Result<Self, CoreError> {
        let (Some(image), Some(prompt)) = (non_empty(image), non_empty(prompt)) else {
            return Err(CoreError::InvalidInput(
                IMAGE_AND_PROMPT_REQUIRED.to_string(),
            ));
        };

        let data = decode_base64_payload(&image)?;
        if data.is_empty() {
            return Err(CoreError::InvalidInput(
                IMAGE_AND_PROMPT_REQUIRED.to_string(),
            ));
        }

        Ok(Self {
            prompt,
            image: Some(ImagePayload {
                data,
                mime_type: mime_type.to_string(),
            }),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Raw oracle text. Nothing about its structure is guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerationResult {
    pub generated: String,
}

impl GenerationResult {
    pub fn new(generated: impl Into<String>) -> Self {
        Self {
            generated: generated.into(),
        }
    }
}
