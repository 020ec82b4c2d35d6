use std::path::Path;

use anyhow::Context;
use image::DynamicImage;

use crate::{
    encode::{EncodeOpts, OutputFormat, encode_image},
    foundation::{color::Background, error::FigureResult},
    layout::plan::LayoutPlan,
    render::canvas::{DrawnLabel, Placement},
};

/// A sealed, read-only composed figure.
#[derive(Clone, Debug)]
pub struct Figure {
    image: DynamicImage,
    format: OutputFormat,
    layout: LayoutPlan,
    placements: Vec<Placement>,
    labels: Vec<DrawnLabel>,
}

impl Figure {
    pub(crate) fn new(
        image: DynamicImage,
        background: Background,
        layout: LayoutPlan,
        placements: Vec<Placement>,
        labels: Vec<DrawnLabel>,
    ) -> Self {
        let format = if background.is_transparent() {
            OutputFormat::Png
        } else {
            OutputFormat::Jpeg
        };
        Self {
            image,
            format,
            layout,
            placements,
            labels,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Final pixels: RGB8 for solid backgrounds, RGBA8 for transparent ones.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }

    /// Format [`Figure::encode`] produces.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Geometry the figure was drawn from.
    pub fn layout(&self) -> &LayoutPlan {
        &self.layout
    }

    /// One entry per pasted image, in paste order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Captions that were drawn (empty when labels are off or no font resolved).
    pub fn labels(&self) -> &[DrawnLabel] {
        &self.labels
    }

    /// Encode as JPEG or PNG according to [`Figure::format`].
    pub fn encode(&self, opts: &EncodeOpts) -> FigureResult<Vec<u8>> {
        encode_image(&self.image, self.format, opts)
    }

    /// Encode and write to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path, opts: &EncodeOpts) -> FigureResult<()> {
        let bytes = self.encode(opts)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(path, bytes)
            .with_context(|| format!("write figure '{}'", path.display()))?;
        Ok(())
    }
}
