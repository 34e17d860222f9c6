use crate::{CreatorError, PlatformResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use socialsync_sdk::Platform;
use std::path::{Path, PathBuf};

/// Canned ideas offered by the input form.
pub const SAMPLE_IDEAS: [&str; 4] = [
    "Launching a new eco-friendly coffee cup line",
    "Sharing key takeaways from a recent tech conference",
    "Announcing a 24-hour flash sale on sneakers",
    "Reflecting on 5 years of remote work leadership",
];

/// Text behind the copy-to-clipboard affordance, once the card has any.
#[must_use]
pub fn clipboard_text(result: &PlatformResult) -> Option<&str> {
    result.text.as_deref()
}

/// File name for a downloaded platform image: `<product>-<platform>.jpg`.
#[must_use]
pub fn image_file_name(product: &str, platform: Platform) -> String {
    format!("{product}-{}.jpg", platform.slug())
}

/// An image decoded out of a `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Decode a `data:<mime>;base64,<payload>` URI into its mime type and raw
/// bytes.
pub fn decode_image_data_uri(uri: &str) -> Result<DecodedImage, CreatorError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| CreatorError::InvalidImageData("missing data: prefix".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| CreatorError::InvalidImageData("missing payload separator".to_string()))?;
    let mime_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| CreatorError::InvalidImageData("payload is not base64".to_string()))?;

    let bytes = STANDARD
        .decode(payload)
        .map_err(|error| CreatorError::InvalidImageData(error.to_string()))?;

    Ok(DecodedImage {
        mime_type: mime_type.to_string(),
        bytes,
    })
}

/// The download affordance: write the card's generated image into `dir`
/// under the product-prefixed file name and return the full path.
pub fn save_image(
    result: &PlatformResult,
    dir: &Path,
    product: &str,
) -> Result<PathBuf, CreatorError> {
    let uri = result
        .image_url
        .as_deref()
        .ok_or(CreatorError::MissingContent(result.platform))?;
    let image = decode_image_data_uri(uri)?;

    let path = dir.join(image_file_name(product, result.platform));
    std::fs::write(&path, image.bytes)?;
    Ok(path)
}
