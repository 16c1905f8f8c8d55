use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::Path;

use crate::domain::{TARGET_SIZE, WEBP_METHOD, WEBP_QUALITY};
use crate::error::ConvertError;

/// Decode the image at `path`. The format is sniffed from the file contents,
/// falling back to the extension.
pub fn load(path: &Path) -> Result<DynamicImage, ConvertError> {
    let decode_err = |source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?;
    reader.decode().map_err(decode_err)
}

/// Scale to exactly `TARGET_SIZE` square. Aspect ratio is not preserved.
pub fn resize(img: &DynamicImage) -> DynamicImage {
    img.resize_exact(TARGET_SIZE, TARGET_SIZE, FilterType::Lanczos3)
}

/// Encode as lossy WebP in memory. `path` is only used for error context.
pub fn encode_webp(img: &DynamicImage, path: &Path) -> Result<Vec<u8>, ConvertError> {
    let encode_err = |message: String| ConvertError::Encode {
        path: path.to_path_buf(),
        message,
    };

    let rgba = img.to_rgba8();
    let encoder = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height());

    let mut config =
        webp::WebPConfig::new().map_err(|_| encode_err("invalid libwebp config".into()))?;
    config.lossless = 0;
    config.quality = WEBP_QUALITY;
    config.method = WEBP_METHOD;

    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| encode_err(format!("{e:?}")))?;
    Ok(memory.to_vec())
}
