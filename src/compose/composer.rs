use crate::{
    assets::{
        decode::SourceImage,
        fonts::{FontProvider, FontSource},
    },
    compose::{config::CompositionConfig, label::label},
    foundation::error::{FigureError, FigureResult},
    layout::plan::plan_layout,
    normalize::{build_thread_pool, normalize_all, resize::ResamplePolicy},
    render::{canvas::Canvas, figure::Figure},
};

/// Runtime options that are not part of a figure's look.
#[derive(Clone, Debug, Default)]
pub struct ComposerOpts {
    /// Normalization worker threads; `None` uses one per available core.
    pub threads: Option<usize>,
    /// Resampling filter policy for height normalization.
    pub resample: ResamplePolicy,
    /// Where caption fonts are looked up.
    pub fonts: FontSource,
}

/// Turns an ordered list of images into a single labeled grid figure.
///
/// A composer owns a worker pool and a lazily resolved font, both reused across calls. Calls do
/// not share any other state, so one composer can serve concurrent requests.
pub struct FigureComposer {
    pool: rayon::ThreadPool,
    resample: ResamplePolicy,
    fonts: FontProvider,
}

impl FigureComposer {
    pub fn new(opts: ComposerOpts) -> FigureResult<Self> {
        Ok(Self {
            pool: build_thread_pool(opts.threads)?,
            resample: opts.resample,
            fonts: FontProvider::new(opts.fonts),
        })
    }

    /// Caption font provider (resolves on first use).
    pub fn fonts(&self) -> &FontProvider {
        &self.fonts
    }

    /// Worker threads used for normalization.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Compose `images` (in order) into one figure.
    ///
    /// Pipeline:
    /// 1. validate `config` (before touching any pixels)
    /// 2. flatten backgrounds and resize to `base_height`, in parallel
    /// 3. plan rows, canvas size and paste positions
    /// 4. paste every image, then caption them 1, 2, 3, ... across rows
    /// 5. seal
    ///
    /// Any failure aborts the whole figure. A missing font only suppresses captions.
    #[tracing::instrument(
        skip(self, images, config),
        fields(images = images.len(), max_columns = config.max_columns)
    )]
    pub fn compose(
        &self,
        images: Vec<SourceImage>,
        config: &CompositionConfig,
    ) -> FigureResult<Figure> {
        config.validate()?;
        if images.is_empty() {
            return Err(FigureError::EmptyInput);
        }

        let normalized = normalize_all(
            images,
            config.background,
            config.base_height,
            &self.resample,
            &self.pool,
        )?;
        tracing::debug!(count = normalized.len(), "normalized images");

        let widths: Vec<u32> = normalized.iter().map(|img| img.width()).collect();
        let plan = plan_layout(&widths, config)?;
        tracing::debug!(
            width = plan.canvas_width,
            height = plan.canvas_height,
            rows = plan.rows.len(),
            "planned layout"
        );

        let mut canvas =
            Canvas::allocate(plan.canvas_width, plan.canvas_height, config.background)?;
        for slot in &plan.slots {
            canvas.paste(&normalized[slot.index], slot.x, slot.y)?;
        }

        if config.show_labels {
            match self.fonts.resolve() {
                Some(font) => {
                    for index in 1..=canvas.placements().len() {
                        let text = label(index, config.label_style);
                        if !canvas.draw_label(index, &text, &font, config.font_size)? {
                            tracing::debug!(
                                index,
                                text = %text,
                                "font has no glyphs for label"
                            );
                        }
                    }
                }
                None => tracing::warn!("no font available; composing without labels"),
            }
        }

        Ok(canvas.seal(plan))
    }
}

/// Compose with default [`ComposerOpts`].
pub fn compose(images: Vec<SourceImage>, config: &CompositionConfig) -> FigureResult<Figure> {
    FigureComposer::new(ComposerOpts::default())?.compose(images, config)
}
