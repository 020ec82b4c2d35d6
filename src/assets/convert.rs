use std::io::Cursor;

use anyhow::Context;
use image::{ColorType, DynamicImage};

use crate::foundation::error::{FigureError, FigureResult};

/// Re-encode a single image (typically TIFF or another scientific format) as PNG.
///
/// RGB8 and RGBA8 data is written as-is; every other mode (16-bit, float, grayscale, ...) is
/// converted to RGBA8 first so the result opens everywhere.
pub fn convert_to_png(bytes: &[u8]) -> FigureResult<Vec<u8>> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| FigureError::invalid_image(format!("decode for png conversion: {e}")))?;

    let img = match decoded.color() {
        ColorType::Rgb8 | ColorType::Rgba8 => decoded,
        _ => DynamicImage::ImageRgba8(decoded.to_rgba8()),
    };

    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/convert.rs"]
mod tests;
