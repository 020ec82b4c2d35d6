use crate::{
    compose::config::CompositionConfig,
    foundation::error::{FigureError, FigureResult},
};

/// Largest canvas edge the composer will allocate (JPEG caps dimensions at 65 535).
pub const MAX_CANVAS_DIM: u32 = 65_500;

/// One row of the grid: a contiguous run of images in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct RowPlan {
    /// Input index of the first image in the row.
    pub start: usize,
    /// Number of images in the row (1..=max_columns).
    pub len: usize,
    /// Sum of image widths.
    pub images_width: u32,
    /// Image widths plus `padding` between neighbours.
    pub natural_width: u32,
    /// Uniform gap around and between images that centers the row on the canvas.
    pub gap: f64,
}

/// Paste position of one image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Input index (0-based).
    pub index: usize,
    /// Row the image lands in.
    pub row: usize,
    /// Left edge: floor of the accumulated fractional position.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Image width.
    pub width: u32,
}

/// Complete figure geometry, computed before any pixels are touched.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub text_area_height: u32,
    /// Vertical distance between consecutive row tops.
    pub row_pitch: u32,
    pub rows: Vec<RowPlan>,
    /// One slot per image, in input order.
    pub slots: Vec<Slot>,
}

/// Chunk `widths` into rows of `max_columns` and derive canvas size and paste positions.
///
/// `config` is assumed validated. Every image is `config.base_height` tall.
pub fn plan_layout(widths: &[u32], config: &CompositionConfig) -> FigureResult<LayoutPlan> {
    if widths.is_empty() {
        return Err(FigureError::EmptyInput);
    }

    let cols = usize::try_from(config.max_columns.max(1)).unwrap_or(usize::MAX);
    let padding = u64::from(config.padding);

    let mut rows = Vec::with_capacity(widths.len().div_ceil(cols));
    let mut widest = 0u64;
    for (r, chunk) in widths.chunks(cols).enumerate() {
        let images_width: u64 = chunk.iter().map(|&w| u64::from(w)).sum();
        let natural_width = images_width + padding * (chunk.len() as u64 - 1);
        widest = widest.max(natural_width);
        rows.push((r * cols, chunk.len(), images_width, natural_width));
    }

    let canvas_width = checked_dim("width", widest + 2 * padding)?;
    let text_area_height = config.text_area_height();
    let row_pitch =
        u64::from(config.base_height) + u64::from(text_area_height) + u64::from(config.padding);
    let canvas_height = checked_dim("height", row_pitch * rows.len() as u64 + padding)?;
    let row_pitch = row_pitch as u32;

    let mut row_plans = Vec::with_capacity(rows.len());
    let mut slots = Vec::with_capacity(widths.len());
    for (r, (start, len, images_width, natural_width)) in rows.into_iter().enumerate() {
        let gap = (f64::from(canvas_width) - images_width as f64) / (len + 1) as f64;
        let y = config.padding + r as u32 * row_pitch;

        let mut x = gap;
        for (offset, &width) in widths[start..start + len].iter().enumerate() {
            slots.push(Slot {
                index: start + offset,
                row: r,
                x: x.floor() as u32,
                y,
                width,
            });
            x += f64::from(width) + gap;
        }

        row_plans.push(RowPlan {
            start,
            len,
            images_width: images_width as u32,
            natural_width: natural_width as u32,
            gap,
        });
    }

    Ok(LayoutPlan {
        canvas_width,
        canvas_height,
        text_area_height,
        row_pitch,
        rows: row_plans,
        slots,
    })
}

fn checked_dim(what: &str, v: u64) -> FigureResult<u32> {
    if v > u64::from(MAX_CANVAS_DIM) {
        return Err(FigureError::invalid_config(format!(
            "figure {what} {v}px exceeds the {MAX_CANVAS_DIM}px limit; reduce base_height, \
             max_columns or padding"
        )));
    }
    Ok(v as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/plan.rs"]
mod tests;
