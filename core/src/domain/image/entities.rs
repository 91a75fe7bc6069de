use base64::{Engine as _, engine::general_purpose};

use crate::domain::image::services::is_image_mime;

/// A user-selected file, exactly as it was picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: Option<String>,
}

impl ImageAsset {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn is_image(&self) -> bool {
        is_image_mime(&self.mime_type)
    }

    pub fn display_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("selected image")
    }
}

/// Resized and re-encoded image, ready to be sent to the relay.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedImage {
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
    pub quality: f32,
    pub mime_type: String,
}

impl NormalizedImage {
    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.bytes)
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }
}
