use image::{DynamicImage, imageops::FilterType};

use crate::{
    foundation::error::{FigureError, FigureResult},
    layout::plan::MAX_CANVAS_DIM,
};

/// Resampling filter selection for height normalization.
///
/// Targets taller than `quality_threshold` are treated as publication-quality output and use
/// `high_quality`; everything else uses the cheaper `fast` filter. The filter only affects pixel
/// values, never output dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResamplePolicy {
    /// Target height (px) above which `high_quality` is used.
    pub quality_threshold: u32,
    /// Filter for large targets.
    pub high_quality: FilterType,
    /// Filter for targets at or below the threshold.
    pub fast: FilterType,
}

impl Default for ResamplePolicy {
    fn default() -> Self {
        Self {
            quality_threshold: 1200,
            high_quality: FilterType::Lanczos3,
            fast: FilterType::CatmullRom,
        }
    }
}

impl ResamplePolicy {
    /// Filter used when scaling to `target_height`.
    pub fn filter_for(&self, target_height: u32) -> FilterType {
        if target_height > self.quality_threshold {
            self.high_quality
        } else {
            self.fast
        }
    }
}

/// Width that preserves the aspect ratio at `target_height`: `round(target * w / h)`.
///
/// Widths that could never fit on a canvas are rejected before any pixels are resampled.
pub fn scaled_width(width: u32, height: u32, target_height: u32) -> FigureResult<u32> {
    if width == 0 || height == 0 {
        return Err(FigureError::invalid_image(format!(
            "degenerate source dimensions {width}x{height}"
        )));
    }

    let w = (f64::from(target_height) * f64::from(width) / f64::from(height)).round();
    if w < 1.0 {
        return Err(FigureError::invalid_image(format!(
            "{width}x{height} scaled to height {target_height} has zero width"
        )));
    }
    if w > f64::from(MAX_CANVAS_DIM) {
        return Err(FigureError::invalid_image(format!(
            "{width}x{height} scaled to height {target_height} is {w}px wide, over the \
             {MAX_CANVAS_DIM}px limit"
        )));
    }
    Ok(w as u32)
}

/// Scale `image` so its height is exactly `target_height`.
pub fn resize_to_height(
    image: DynamicImage,
    target_height: u32,
    policy: &ResamplePolicy,
) -> FigureResult<DynamicImage> {
    let width = scaled_width(image.width(), image.height(), target_height)?;
    if (width, target_height) == (image.width(), image.height()) {
        return Ok(image);
    }
    Ok(image.resize_exact(width, target_height, policy.filter_for(target_height)))
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/resize.rs"]
mod tests;
