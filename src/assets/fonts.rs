use std::{
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use usvg::fontdb;

/// Font files tried when no explicit candidate resolves, in priority order.
///
/// Serif CJK faces come first so figures match the look of the Chinese-language tooling this
/// layout originates from; Latin sans faces follow.
pub const DEFAULT_FONT_CANDIDATES: [&str; 8] = [
    "/usr/share/fonts/truetype/arphic/uming.ttc",
    "/usr/share/fonts/truetype/noto-cjk/NotoSerifCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSerifCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
];

/// Family names preferred when falling back to the system font database.
const SYSTEM_FAMILY_PREFERENCE: [&str; 4] =
    ["DejaVu Sans", "Liberation Sans", "FreeSans", "Noto Sans"];

/// Where label fonts may come from.
#[derive(Clone, Debug)]
pub struct FontSource {
    /// Caller-supplied font files, tried before anything else.
    pub candidates: Vec<PathBuf>,
    /// Also try [`DEFAULT_FONT_CANDIDATES`] after `candidates`.
    pub default_candidates: bool,
    /// Fall back to the system font database (and finally to any face it holds).
    pub system_fonts: bool,
}

impl Default for FontSource {
    fn default() -> Self {
        Self {
            candidates: Vec::new(),
            default_candidates: true,
            system_fonts: true,
        }
    }
}

/// A usable label font: the face database plus the family to request from it.
pub struct ResolvedFont {
    db: Arc<fontdb::Database>,
    family: String,
    origin: Option<PathBuf>,
}

impl ResolvedFont {
    /// Family name passed to the text shaper.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// File the face was loaded from, when known.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Number of faces available for shaping and glyph fallback.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    pub(crate) fn database(&self) -> Arc<fontdb::Database> {
        Arc::clone(&self.db)
    }
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedFont")
            .field("family", &self.family)
            .field("origin", &self.origin)
            .field("faces", &self.db.len())
            .finish()
    }
}

/// Resolves the label font once and shares it across compositions.
///
/// Resolution never fails hard: when nothing loads, [`FontProvider::resolve`] returns `None` and
/// callers skip labels.
#[derive(Debug)]
pub struct FontProvider {
    source: FontSource,
    resolved: OnceLock<Option<Arc<ResolvedFont>>>,
}

impl FontProvider {
    /// Create a provider; no font IO happens until the first [`FontProvider::resolve`].
    pub fn new(source: FontSource) -> Self {
        Self {
            source,
            resolved: OnceLock::new(),
        }
    }

    /// Configured font source.
    pub fn source(&self) -> &FontSource {
        &self.source
    }

    /// Resolved font, or `None` when no candidate produced a usable face.
    pub fn resolve(&self) -> Option<Arc<ResolvedFont>> {
        self.resolved
            .get_or_init(|| resolve_font(&self.source).map(Arc::new))
            .clone()
    }
}

impl Default for FontProvider {
    fn default() -> Self {
        Self::new(FontSource::default())
    }
}

fn resolve_font(source: &FontSource) -> Option<ResolvedFont> {
    let defaults = DEFAULT_FONT_CANDIDATES
        .iter()
        .filter(|_| source.default_candidates)
        .map(PathBuf::from);

    for path in source.candidates.iter().cloned().chain(defaults) {
        if let Some(font) = load_candidate(&path) {
            tracing::debug!(family = %font.family, path = %path.display(), "resolved label font");
            return Some(font);
        }
    }

    if source.system_fonts
        && let Some(font) = load_system_font()
    {
        tracing::debug!(family = %font.family, "resolved label font from system database");
        return Some(font);
    }

    tracing::warn!("no label font could be resolved; figure labels will be skipped");
    None
}

fn load_candidate(path: &Path) -> Option<ResolvedFont> {
    if !path.is_file() {
        return None;
    }

    let mut db = fontdb::Database::new();
    if let Err(e) = db.load_font_file(path) {
        tracing::debug!(path = %path.display(), error = %e, "font candidate failed to load");
        return None;
    }

    let family = db.faces().find_map(primary_family)?;
    Some(ResolvedFont {
        db: Arc::new(db),
        family,
        origin: Some(path.to_path_buf()),
    })
}

fn load_system_font() -> Option<ResolvedFont> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let mut families: Vec<fontdb::Family<'_>> = SYSTEM_FAMILY_PREFERENCE
        .iter()
        .map(|name| fontdb::Family::Name(*name))
        .collect();
    families.push(fontdb::Family::SansSerif);

    let query = fontdb::Query {
        families: &families,
        ..Default::default()
    };
    let id = db
        .query(&query)
        .or_else(|| db.faces().find(|f| !f.families.is_empty()).map(|f| f.id))?;

    let face = db.face(id)?;
    let family = primary_family(face)?;
    let origin = match &face.source {
        fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => Some(path.clone()),
        fontdb::Source::Binary(_) => None,
    };

    Some(ResolvedFont {
        db: Arc::new(db),
        family,
        origin,
    })
}

fn primary_family(face: &fontdb::FaceInfo) -> Option<String> {
    face.families.first().map(|(name, _)| name.clone())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
