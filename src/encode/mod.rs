use std::io::Cursor;

use anyhow::Context;
use image::{
    DynamicImage,
    codecs::{
        jpeg::{JpegEncoder, PixelDensity},
        png::PngEncoder,
    },
};

use crate::foundation::error::FigureResult;

/// Container format of an encoded figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Opaque figures.
    Jpeg,
    /// Figures with a transparent background.
    Png,
}

impl OutputFormat {
    /// Conventional file extension (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }

    /// MIME type for HTTP responses.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// Encoder settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeOpts {
    /// JPEG quality, 1..=100.
    pub jpeg_quality: u8,
    /// Pixel density written into the JPEG header.
    pub dpi: u16,
}

impl Default for EncodeOpts {
    fn default() -> Self {
        Self {
            jpeg_quality: 95,
            dpi: 300,
        }
    }
}

/// Encode a sealed figure image.
pub fn encode_image(
    image: &DynamicImage,
    format: OutputFormat,
    opts: &EncodeOpts,
) -> FigureResult<Vec<u8>> {
    let mut buf = Vec::new();
    match format {
        OutputFormat::Jpeg => {
            let mut encoder =
                JpegEncoder::new_with_quality(&mut buf, opts.jpeg_quality.clamp(1, 100));
            encoder.set_pixel_density(PixelDensity::dpi(opts.dpi));
            image
                .write_with_encoder(encoder)
                .context("encode figure as jpeg")?;
        }
        OutputFormat::Png => {
            let encoder = PngEncoder::new(Cursor::new(&mut buf));
            image
                .write_with_encoder(encoder)
                .context("encode figure as png")?;
        }
    }
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/encode.rs"]
mod tests;
