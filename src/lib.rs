//! figcompose arranges a set of images into a single labeled grid figure for publication.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: flatten each image onto the background and resize it to a common height
//!    (parallel, order-preserving)
//! 2. **Plan**: chunk images into rows, size the canvas and center every row with uniform gaps
//! 3. **Render**: paste images in order, then caption them `1, 2, 3, ...` (or `a, b, c`,
//!    `i, ii, iii`, `(1), (2), (3)`) across the whole figure
//! 4. **Encode**: JPEG (quality 95, 300 DPI) for opaque figures, PNG for transparent ones
//!
//! The core does no IO beyond optional font loading: callers decode images into
//! [`SourceImage`]s and decide where the encoded figure goes.
//!
//! ```no_run
//! use figcompose::{CompositionConfig, FigureComposer, ComposerOpts, open_image};
//!
//! # fn main() -> figcompose::FigureResult<()> {
//! let images = vec![
//!     open_image("a.png".as_ref())?,
//!     open_image("b.jpg".as_ref())?,
//! ];
//! let composer = FigureComposer::new(ComposerOpts::default())?;
//! let figure = composer.compose(images, &CompositionConfig::default())?;
//! figure.write_to("out/figure.jpg".as_ref(), &Default::default())?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

mod assets;
mod compose;
mod encode;
mod foundation;
mod layout;
mod normalize;
mod render;

pub use assets::convert::convert_to_png;
pub use assets::decode::{SourceImage, decode_image, open_image};
pub use assets::fonts::{DEFAULT_FONT_CANDIDATES, FontProvider, FontSource, ResolvedFont};
pub use compose::composer::{ComposerOpts, FigureComposer, compose};
pub use compose::config::CompositionConfig;
pub use compose::label::{LabelStyle, label};
pub use encode::{EncodeOpts, OutputFormat, encode_image};
pub use foundation::color::Background;
pub use foundation::error::{FigureError, FigureResult};
pub use layout::plan::{LayoutPlan, MAX_CANVAS_DIM, RowPlan, Slot, plan_layout};
pub use normalize::background::apply_background;
pub use normalize::resize::{ResamplePolicy, resize_to_height, scaled_width};
pub use normalize::{NormalizedImage, normalize_all, normalize_image};
pub use render::canvas::{Canvas, CanvasStage, DrawnLabel, LABEL_OFFSET_Y, Placement};
pub use render::figure::Figure;
pub use render::text::{LabelRaster, rasterize_label};

/// Re-exported so callers can build [`ResamplePolicy`] values without depending on `image`.
pub use image::imageops::FilterType;
