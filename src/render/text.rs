use crate::{
    assets::fonts::ResolvedFont,
    foundation::error::{FigureError, FigureResult},
};

/// Largest label raster edge; bigger requests indicate a nonsensical font size.
const MAX_LABEL_DIM: u32 = 16_384;

/// A rasterized caption: black glyph coverage plus its ink extents.
///
/// Raster row 0 is the top edge of the label box; the baseline sits `font_size` rows below.
#[derive(Clone, Debug)]
pub struct LabelRaster {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Row-major glyph coverage (0 = untouched, 255 = solid black).
    pub coverage: Vec<u8>,
    /// Left edge of the inked glyphs, in raster pixels.
    pub ink_left: i64,
    /// Width of the inked glyphs, measured from the shaped outlines.
    pub ink_width: u32,
}

/// Shape and rasterize `text` with `font` at `font_size` pixels.
///
/// Returns `Ok(None)` when the font produced no glyphs for `text`.
pub fn rasterize_label(
    text: &str,
    font: &ResolvedFont,
    font_size: u32,
) -> FigureResult<Option<LabelRaster>> {
    let size = font_size as f32;
    let glyphs = text.chars().count() as f32;
    let width = (size * (glyphs + 2.0)).ceil() as u32;
    let height = (size * 2.0).ceil() as u32;
    if width > MAX_LABEL_DIM || height > MAX_LABEL_DIM {
        return Err(FigureError::invalid_config(format!(
            "font_size {font_size} is too large to rasterize label \"{text}\""
        )));
    }

    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><text x="{size}" y="{size}" font-family="{family}" font-size="{size}" fill="#000000">{text}</text></svg>"##,
        family = escape_xml(font.family()),
        text = escape_xml(text),
    );

    let opts = usvg::Options {
        fontdb: font.database(),
        font_family: font.family().to_owned(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&svg, &opts)
        .map_err(|e| FigureError::render(format!("label svg for \"{text}\": {e}")))?;

    if !tree.root().has_children() {
        return Ok(None);
    }
    let bbox = tree.root().bounding_box();
    if !bbox.width().is_finite() || bbox.width() <= 0.0 {
        return Ok(None);
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| FigureError::render("failed to allocate label pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let ink_left = bbox.left().floor();
    let ink_width = (bbox.right().ceil() - ink_left).max(0.0) as u32;
    let coverage = pixmap.data().chunks_exact(4).map(|px| px[3]).collect();

    Ok(Some(LabelRaster {
        width,
        height,
        coverage,
        ink_left: ink_left as i64,
        ink_width,
    }))
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
