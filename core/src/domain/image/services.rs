use ::image::{codecs::jpeg::JpegEncoder, imageops::FilterType};
use base64::{Engine as _, engine::general_purpose};
use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::{
        entities::{ImageAsset, NormalizedImage},
        value_objects::NormalizeOptions,
    },
};

pub const IMAGE_MIME_PREFIX: &str = "image/";
pub const NORMALIZED_MIME_TYPE: &str = "image/jpeg";

pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type
        .trim()
        .to_ascii_lowercase()
        .starts_with(IMAGE_MIME_PREFIX)
}

/// Dimensions that fit inside `max_width` x `max_height` while keeping the
/// aspect ratio. Images already inside the bounds are returned unchanged.
pub fn target_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale = f64::min(
        f64::from(max_width) / f64::from(width),
        f64::from(max_height) / f64::from(height),
    );
    let scaled = |side: u32| ((f64::from(side) * scale).round() as u32).max(1);

    (scaled(width), scaled(height))
}

/// Decodes, bounds and re-encodes an image as JPEG.
#[instrument(skip(asset), fields(mime_type = %asset.mime_type, size = asset.bytes.len()))]
pub fn normalize_image(
    asset: &ImageAsset,
    options: &NormalizeOptions,
) -> Result<NormalizedImage, CoreError> {
    options.validate()?;

    if !asset.is_image() {
        return Err(CoreError::InvalidInput(format!(
            "'{}' is not an image type",
            asset.mime_type
        )));
    }

    let decoded =
        ::image::load_from_memory(&asset.bytes).map_err(|e| CoreError::Decode(e.to_string()))?;

    let (width, height) = target_dimensions(
        decoded.width(),
        decoded.height(),
        options.max_width,
        options.max_height,
    );

    // JPEG has no alpha channel, so the bitmap is always RGB.
    let bitmap = decoded.to_rgb8();
    let bitmap = if (width, height) == bitmap.dimensions() {
        bitmap
    } else {
        ::image::imageops::resize(&bitmap, width, height, FilterType::Triangle)
    };

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, options.jpeg_quality())
        .encode_image(&bitmap)
        .map_err(|e| CoreError::Encode(e.to_string()))?;

    tracing::debug!(
        original_width = decoded.width(),
        original_height = decoded.height(),
        width,
        height,
        encoded_size = bytes.len(),
        "Image normalized"
    );

    Ok(NormalizedImage {
        width,
        height,
        bytes,
        quality: options.quality,
        mime_type: NORMALIZED_MIME_TYPE.to_string(),
    })
}

/// Returns the raw base64 payload of a `data:<mime>;base64,<payload>` URL.
/// Input without a data-URL scheme is returned as is.
pub fn strip_data_url_prefix(encoded: &str) -> &str {
    let trimmed = encoded.trim();
    match trimmed.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(',')
            .map(|(_, payload)| payload)
            .unwrap_or(rest),
        None => trimmed,
    }
}

pub fn decode_base64_payload(encoded: &str) -> Result<Vec<u8>, CoreError> {
    general_purpose::STANDARD
        .decode(strip_data_url_prefix(encoded))
        .map_err(|e| CoreError::InvalidInput(format!("image is not valid base64: {}", e)))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use ::image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

    use super::*;

    fn encoded(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), format)
            .expect("test image should encode");
        bytes
    }

    fn png_asset(width: u32, height: u32) -> ImageAsset {
        let bitmap = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        ImageAsset::new(
            encoded(DynamicImage::ImageRgb8(bitmap), ImageFormat::Png),
            "image/png",
        )
    }

    fn decoded_dimensions(image: &NormalizedImage) -> (u32, u32) {
        let decoded = ::image::load_from_memory(&image.bytes).expect("output should decode");
        (decoded.width(), decoded.height())
    }

    #[test]
    fn test_target_dimensions_within_bounds_unchanged() {
        assert_eq!(target_dimensions(800, 800, 800, 800), (800, 800));
        assert_eq!(target_dimensions(640, 480, 800, 800), (640, 480));
        assert_eq!(target_dimensions(1, 1, 800, 800), (1, 1));
    }

    #[test]
    fn test_target_dimensions_landscape() {
        assert_eq!(target_dimensions(1600, 1200, 800, 800), (800, 600));
        assert_eq!(target_dimensions(1000, 333, 800, 800), (800, 266));
        assert_eq!(target_dimensions(801, 600, 800, 800), (800, 599));
    }

    #[test]
    fn test_target_dimensions_portrait() {
        assert_eq!(target_dimensions(900, 1350, 800, 800), (533, 800));
        assert_eq!(target_dimensions(3024, 4032, 800, 800), (600, 800));
    }

    #[test]
    fn test_target_dimensions_never_collapses_to_zero() {
        assert_eq!(target_dimensions(5000, 1, 800, 800), (800, 1));
    }

    #[test]
    fn test_target_dimensions_preserves_aspect_ratio() {
        for (width, height) in [(1920, 1080), (1234, 987), (4000, 3000), (850, 2000)] {
            let (w, h) = target_dimensions(width, height, 800, 800);
            assert_eq!(w.max(h), 800);
            let expected = f64::from(width.min(height)) * 800.0 / f64::from(width.max(height));
            assert!((f64::from(w.min(h)) - expected).abs() <= 1.0);
        }
    }

    #[test]
    fn test_small_image_keeps_dimensions() {
        let asset = png_asset(320, 200);
        let normalized = normalize_image(&asset, &NormalizeOptions::default()).unwrap();

        assert_eq!((normalized.width, normalized.height), (320, 200));
        assert_eq!(decoded_dimensions(&normalized), (320, 200));
    }

    #[test]
    fn test_large_image_is_scaled_down() {
        let asset = png_asset(1000, 500);
        let normalized = normalize_image(&asset, &NormalizeOptions::default()).unwrap();

        assert_eq!((normalized.width, normalized.height), (800, 400));
        assert_eq!(decoded_dimensions(&normalized), (800, 400));
    }

    #[test]
    fn test_output_is_jpeg_with_quality() {
        let asset = png_asset(64, 48);
        let normalized = normalize_image(&asset, &NormalizeOptions::default()).unwrap();

        assert_eq!(
            ::image::guess_format(&normalized.bytes).unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(normalized.mime_type, "image/jpeg");
        assert_eq!(normalized.quality, 0.8);
    }

    #[test]
    fn test_transparent_png_is_flattened() {
        let bitmap = RgbaImage::from_pixel(40, 30, Rgba([10, 200, 30, 0]));
        let asset = ImageAsset::new(
            encoded(DynamicImage::ImageRgba8(bitmap), ImageFormat::Png),
            "image/png",
        );

        let normalized = normalize_image(&asset, &NormalizeOptions::default()).unwrap();
        assert_eq!(decoded_dimensions(&normalized), (40, 30));
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let asset = png_asset(900, 700);
        let options = NormalizeOptions::default();

        let first = normalize_image(&asset, &options).unwrap();
        let second = normalize_image(&asset, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_bound() {
        let asset = png_asset(400, 300);
        let normalized = normalize_image(&asset, &NormalizeOptions::new(200, 0.5)).unwrap();

        assert_eq!((normalized.width, normalized.height), (200, 150));
    }

    #[test]
    fn test_non_image_mime_is_rejected() {
        let mut asset = png_asset(10, 10);
        asset.mime_type = "application/pdf".to_string();

        let err = normalize_image(&asset, &NormalizeOptions::default()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn test_undecodable_bytes_fail_with_decode_error() {
        let asset = ImageAsset::new(b"definitely not an image".to_vec(), "image/png");

        let err = normalize_image(&asset, &NormalizeOptions::default()).unwrap_err();
        assert!(matches!(err, CoreError::Decode(_)));
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let asset = png_asset(10, 10);

        for options in [
            NormalizeOptions::new(0, 0.8),
            NormalizeOptions::new(800, 0.0),
            NormalizeOptions::new(800, 1.5),
        ] {
            let err = normalize_image(&asset, &options).unwrap_err();
            assert!(matches!(err, CoreError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_jpeg_quality_scale() {
        assert_eq!(NormalizeOptions::default().jpeg_quality(), 80);
        assert_eq!(NormalizeOptions::new(800, 1.0).jpeg_quality(), 100);
        assert_eq!(NormalizeOptions::new(800, 0.001).jpeg_quality(), 1);
    }

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/jpeg"));
        assert!(is_image_mime("IMAGE/PNG"));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime(""));
    }

    #[test]
    fn test_strip_data_url_prefix() {
        assert_eq!(strip_data_url_prefix("data:image/jpeg;base64,AAAA"), "AAAA");
        assert_eq!(strip_data_url_prefix("AAAA"), "AAAA");
        assert_eq!(strip_data_url_prefix("  AAAA\n"), "AAAA");
    }

    #[test]
    fn test_data_url_round_trips_through_payload_decoding() {
        let normalized = normalize_image(&png_asset(16, 16), &NormalizeOptions::default()).unwrap();

        let data_url = normalized.to_data_url();
        assert!(data_url.starts_with("data:image/jpeg;base64,"));
        assert_eq!(decode_base64_payload(&data_url).unwrap(), normalized.bytes);
    }

    #[test]
    fn test_decode_base64_payload_rejects_garbage() {
        let err = decode_base64_payload("not base64 at all!").unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }
}
