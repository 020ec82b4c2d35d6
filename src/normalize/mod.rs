//! Per-image normalization: background flattening followed by height-locked resizing.
//!
//! Each image is independent, so the batch runs as a parallel map on a rayon pool. Results are
//! collected in input order and the first failure aborts the batch.

pub(crate) mod background;
pub(crate) mod resize;

use image::DynamicImage;
use rayon::prelude::*;

use crate::{
    assets::decode::SourceImage,
    foundation::{
        color::Background,
        error::{FigureError, FigureResult},
    },
    normalize::{background::apply_background, resize::ResamplePolicy},
};

/// Source image after background flattening and resizing to the figure's base height.
#[derive(Clone, Debug)]
pub struct NormalizedImage {
    name: String,
    image: DynamicImage,
}

impl NormalizedImage {
    /// Name carried over from the [`SourceImage`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width in pixels (derived from the source aspect ratio).
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels (always the configured base height).
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Normalized pixels: RGB8 for solid backgrounds, RGBA8 for transparent ones.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}

/// Normalize a single image.
pub fn normalize_image(
    source: SourceImage,
    background: Background,
    base_height: u32,
    policy: &ResamplePolicy,
) -> FigureResult<NormalizedImage> {
    let (name, image) = source.into_parts();
    let flattened = apply_background(image, background);
    let image = resize::resize_to_height(flattened, base_height, policy).map_err(|e| match e {
        FigureError::InvalidImage(msg) => FigureError::invalid_image(format!("'{name}': {msg}")),
        other => other,
    })?;
    Ok(NormalizedImage { name, image })
}

/// Normalize a batch on `pool`, preserving input order.
pub fn normalize_all(
    sources: Vec<SourceImage>,
    background: Background,
    base_height: u32,
    policy: &ResamplePolicy,
    pool: &rayon::ThreadPool,
) -> FigureResult<Vec<NormalizedImage>> {
    pool.install(|| {
        sources
            .into_par_iter()
            .map(|src| normalize_image(src, background, base_height, policy))
            .collect::<FigureResult<Vec<_>>>()
    })
}

/// Worker pool for normalization; `None` sizes it to the available cores.
pub fn build_thread_pool(threads: Option<usize>) -> FigureResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FigureError::invalid_config(
            "normalization 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("figcompose-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FigureError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/batch.rs"]
mod tests;
