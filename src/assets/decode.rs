use std::path::Path;

use anyhow::Context;
use image::{ColorType, DynamicImage};

use crate::foundation::error::{FigureError, FigureResult};

/// Decoded raster image handed to the composer, tagged with a display name.
///
/// The pixel data is never mutated; normalization produces new buffers (or moves this one
/// through unchanged when no conversion is needed).
#[derive(Clone, Debug)]
pub struct SourceImage {
    name: String,
    image: DynamicImage,
}

impl SourceImage {
    /// Wrap an already-decoded image.
    pub fn new(name: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    /// Identifying name (usually the uploaded file name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Native pixel layout of the decoded data.
    pub fn color_type(&self) -> ColorType {
        self.image.color()
    }

    /// `true` when the pixel mode carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }

    /// Borrow the decoded pixels.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub(crate) fn into_parts(self) -> (String, DynamicImage) {
        (self.name, self.image)
    }
}

/// Decode encoded image bytes (any container format `image` supports).
pub fn decode_image(name: impl Into<String>, bytes: &[u8]) -> FigureResult<SourceImage> {
    let name = name.into();
    let image = image::load_from_memory(bytes)
        .map_err(|e| FigureError::invalid_image(format!("decode '{name}': {e}")))?;
    non_empty(name, image)
}

fn non_empty(name: String, image: DynamicImage) -> FigureResult<SourceImage> {
    if image.width() == 0 || image.height() == 0 {
        return Err(FigureError::invalid_image(format!(
            "'{name}' decoded to an empty {}x{} image",
            image.width(),
            image.height()
        )));
    }
    Ok(SourceImage::new(name, image))
}

/// Read and decode an image file; the file name becomes the image name.
pub fn open_image(path: &Path) -> FigureResult<SourceImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    decode_image(name, &bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
