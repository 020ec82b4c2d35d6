use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    compose::label::LabelStyle,
    foundation::{
        color::Background,
        error::{FigureError, FigureResult},
    },
    layout::plan::MAX_CANVAS_DIM,
};

/// Layout and captioning parameters for one figure.
///
/// Deserializes from JSON with every field optional; missing fields take the defaults below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompositionConfig {
    /// Maximum images per row (>= 1).
    pub max_columns: u32,
    /// Common image height in pixels (>= 1).
    pub base_height: u32,
    /// Outer margin and horizontal spacing in pixels.
    pub padding: u32,
    /// Canvas fill; also the flattening color for images with alpha.
    pub background: Background,
    /// Caption font size in pixels (>= 1).
    pub font_size: u32,
    /// Draw captions under each image.
    pub show_labels: bool,
    /// Caption numbering scheme.
    pub label_style: LabelStyle,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            max_columns: 3,
            base_height: 600,
            padding: 50,
            background: Background::WHITE,
            font_size: 45,
            show_labels: true,
            label_style: LabelStyle::Number,
        }
    }
}

impl CompositionConfig {
    /// Check parameter ranges; called by the composer before any image work.
    pub fn validate(&self) -> FigureResult<()> {
        if self.max_columns == 0 {
            return Err(FigureError::invalid_config("max_columns must be >= 1"));
        }
        if self.base_height == 0 {
            return Err(FigureError::invalid_config("base_height must be >= 1"));
        }
        if self.font_size == 0 {
            return Err(FigureError::invalid_config("font_size must be >= 1"));
        }

        // Smallest figure this config can produce: one row holding a single 1px-wide image.
        let padding = u64::from(self.padding);
        let min_height =
            u64::from(self.base_height) + u64::from(self.text_area_height()) + 2 * padding;
        if min_height > u64::from(MAX_CANVAS_DIM) {
            return Err(FigureError::invalid_config(format!(
                "base_height + caption area + 2*padding = {min_height}px exceeds the \
                 {MAX_CANVAS_DIM}px limit"
            )));
        }
        if 1 + 2 * padding > u64::from(MAX_CANVAS_DIM) {
            return Err(FigureError::invalid_config(format!(
                "padding {padding}px leaves no room within the {MAX_CANVAS_DIM}px limit"
            )));
        }
        Ok(())
    }

    /// Height reserved below each row for captions: `round(font_size * 1.5)`, or 0 without labels.
    pub fn text_area_height(&self) -> u32 {
        if self.show_labels {
            (f64::from(self.font_size) * 1.5).round() as u32
        } else {
            0
        }
    }

    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> FigureResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| FigureError::invalid_config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_path(path: &Path) -> FigureResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/config.rs"]
mod tests;
