use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_MAX_DIMENSION: u32 = 800;
pub const DEFAULT_QUALITY: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeOptions {
    pub max_width: u32,
    pub max_height: u32,
    /// Lossy encoding quality in `(0, 1]`.
    pub quality: f32,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_DIMENSION,
            max_height: DEFAULT_MAX_DIMENSION,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl NormalizeOptions {
    pub fn new(max_dimension: u32, quality: f32) -> Self {
        Self {
            max_width: max_dimension,
            max_height: max_dimension,
            quality,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.max_width == 0 || self.max_height == 0 {
            return Err(CoreError::InvalidInput(
                "maximum dimensions must be greater than zero".to_string(),
            ));
        }
        if !(self.quality > 0.0 && self.quality <= 1.0) {
            return Err(CoreError::InvalidInput(format!(
                "quality must be in (0, 1], got {}",
                self.quality
            )));
        }
        Ok(())
    }

    /// Quality on the 1..=100 scale used by the JPEG encoder.
    pub fn jpeg_quality(&self) -> u8 {
        (self.quality * 100.0).round().clamp(1.0, 100.0) as u8
    }
}
