use image::{DynamicImage, RgbaImage};

use crate::{
    assets::fonts::ResolvedFont,
    foundation::{
        color::Background,
        error::{FigureError, FigureResult},
        pixel::black_over,
    },
    layout::plan::LayoutPlan,
    normalize::NormalizedImage,
    render::{figure::Figure, text::rasterize_label},
};

/// Vertical offset between an image's bottom edge and the top of its caption.
pub const LABEL_OFFSET_Y: u32 = 10;

/// Drawing progress. Pastes are only accepted before the first label is drawn; sealing consumes
/// the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasStage {
    /// Allocated and background-filled.
    Empty,
    /// At least one image pasted.
    Filled,
    /// At least one caption drawn.
    Labeled,
}

/// Where an image was pasted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// 1-based position across the whole figure.
    pub index: usize,
    /// Source image name.
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A caption that made it onto the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawnLabel {
    /// Index of the captioned [`Placement`].
    pub index: usize,
    pub text: String,
    /// Left edge of the inked glyphs (may be negative for very narrow images).
    pub x: i64,
    /// Top edge of the label box.
    pub y: i64,
    /// Ink width of the shaped text.
    pub width: u32,
}

/// Mutable figure surface, stored as straight RGBA8 regardless of the output mode.
pub struct Canvas {
    buf: RgbaImage,
    background: Background,
    stage: CanvasStage,
    placements: Vec<Placement>,
    labels: Vec<DrawnLabel>,
}

impl Canvas {
    /// Allocate a `width` x `height` canvas filled with `background`.
    pub fn allocate(width: u32, height: u32, background: Background) -> FigureResult<Self> {
        if width == 0 || height == 0 {
            return Err(FigureError::render(format!(
                "cannot allocate a {width}x{height} canvas"
            )));
        }
        Ok(Self {
            buf: RgbaImage::from_pixel(width, height, image::Rgba(background.fill_rgba())),
            background,
            stage: CanvasStage::Empty,
            placements: Vec::new(),
            labels: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.buf.width()
    }

    pub fn height(&self) -> u32 {
        self.buf.height()
    }

    pub fn stage(&self) -> CanvasStage {
        self.stage
    }

    /// Pastes performed so far, in paste order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Replace the pixels under `image` with its pixels (no blending), top-left at `(x, y)`.
    pub fn paste(&mut self, image: &NormalizedImage, x: u32, y: u32) -> FigureResult<()> {
        if self.stage == CanvasStage::Labeled {
            return Err(FigureError::render("cannot paste after labels were drawn"));
        }
        let (w, h) = (image.width(), image.height());
        if u64::from(x) + u64::from(w) > u64::from(self.width())
            || u64::from(y) + u64::from(h) > u64::from(self.height())
        {
            return Err(FigureError::render(format!(
                "'{}' ({w}x{h}) at ({x}, {y}) falls outside the {}x{} canvas",
                image.name(),
                self.width(),
                self.height()
            )));
        }

        match image.image() {
            DynamicImage::ImageRgba8(rgba) => {
                image::imageops::replace(&mut self.buf, rgba, i64::from(x), i64::from(y))
            }
            other => image::imageops::replace(
                &mut self.buf,
                &other.to_rgba8(),
                i64::from(x),
                i64::from(y),
            ),
        }

        self.placements.push(Placement {
            index: self.placements.len() + 1,
            name: image.name().to_owned(),
            x,
            y,
            width: w,
            height: h,
        });
        self.stage = CanvasStage::Filled;
        Ok(())
    }

    /// Draw `text` centered under the `index`-th placement (1-based) in solid black.
    ///
    /// The ink box is centered on the image (`x + width/2 - text_width/2`) and its top edge sits
    /// [`LABEL_OFFSET_Y`] pixels below the image. Glyphs falling outside the canvas are clipped.
    /// Returns `false` when the font has no glyphs for `text`.
    pub fn draw_label(
        &mut self,
        index: usize,
        text: &str,
        font: &ResolvedFont,
        font_size: u32,
    ) -> FigureResult<bool> {
        let placement = index
            .checked_sub(1)
            .and_then(|i| self.placements.get(i))
            .ok_or_else(|| FigureError::render(format!("no placement #{index} to label")))?;

        let Some(raster) = rasterize_label(text, font, font_size)? else {
            return Ok(false);
        };

        let text_x = i64::from(placement.x) + i64::from(placement.width / 2)
            - i64::from(raster.ink_width / 2);
        let text_y =
            i64::from(placement.y) + i64::from(placement.height) + i64::from(LABEL_OFFSET_Y);

        let origin_x = text_x - raster.ink_left;
        let (cw, ch) = (i64::from(self.width()), i64::from(self.height()));
        for ry in 0..raster.height {
            let cy = text_y + i64::from(ry);
            if cy < 0 || cy >= ch {
                continue;
            }
            let row = &raster.coverage[(ry * raster.width) as usize..][..raster.width as usize];
            for (rx, &coverage) in row.iter().enumerate() {
                let cx = origin_x + rx as i64;
                if coverage == 0 || cx < 0 || cx >= cw {
                    continue;
                }
                let px = self.buf.get_pixel_mut(cx as u32, cy as u32);
                px.0 = black_over(px.0, coverage);
            }
        }

        self.labels.push(DrawnLabel {
            index,
            text: text.to_owned(),
            x: text_x,
            y: text_y,
            width: raster.ink_width,
        });
        self.stage = CanvasStage::Labeled;
        Ok(true)
    }

    /// Finish drawing and hand the pixels over for encoding.
    ///
    /// Solid-background canvases are flattened to RGB8; transparent ones stay RGBA8.
    pub fn seal(self, layout: LayoutPlan) -> Figure {
        let image = match self.background {
            Background::Transparent => DynamicImage::ImageRgba8(self.buf),
            Background::Solid(_) => {
                DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(self.buf).into_rgb8())
            }
        };
        Figure::new(image, self.background, layout, self.placements, self.labels)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
