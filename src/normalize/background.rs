use image::{DynamicImage, RgbImage};

use crate::foundation::{color::Background, pixel::over_solid};

/// Flatten an image onto the figure background.
///
/// - Solid background, alpha source: alpha-over onto the fill color, result is RGB8.
/// - Solid background, RGB8 source: returned unchanged.
/// - Solid background, any other mode (gray, 16-bit, float, ...): converted to RGB8.
/// - Transparent background: converted to RGBA8, alpha kept as-is.
pub fn apply_background(image: DynamicImage, background: Background) -> DynamicImage {
    match background {
        Background::Transparent if matches!(image, DynamicImage::ImageRgba8(_)) => image,
        Background::Transparent => DynamicImage::ImageRgba8(image.into_rgba8()),
        Background::Solid(fill) if image.color().has_alpha() => {
            DynamicImage::ImageRgb8(flatten_alpha(image, fill))
        }
        Background::Solid(_) if matches!(image, DynamicImage::ImageRgb8(_)) => image,
        Background::Solid(_) => DynamicImage::ImageRgb8(image.into_rgb8()),
    }
}

fn flatten_alpha(image: DynamicImage, fill: [u8; 3]) -> RgbImage {
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();
    let mut out = RgbImage::new(width, height);
    for (dst, src) in out.pixels_mut().zip(rgba.pixels()) {
        dst.0 = over_solid(src.0, fill);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/background.rs"]
mod tests;
