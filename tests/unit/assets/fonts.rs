use super::*;

fn isolated(candidates: Vec<PathBuf>) -> FontSource {
    FontSource {
        candidates,
        default_candidates: false,
        system_fonts: false,
    }
}

#[test]
fn missing_candidates_resolve_to_none() {
    let provider = FontProvider::new(isolated(vec![PathBuf::from(
        "target/fonts/not-a-real-font.ttf",
    )]));
    assert!(provider.resolve().is_none());
    // Cached: a second call gives the same answer without reloading.
    assert!(provider.resolve().is_none());
}

#[test]
fn non_font_file_is_skipped() {
    let dir = PathBuf::from("target").join("font_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let bogus = dir.join("bogus.ttf");
    std::fs::write(&bogus, b"this is not a font").unwrap();

    let provider = FontProvider::new(isolated(vec![bogus]));
    assert!(provider.resolve().is_none());
}

#[test]
fn default_source_tries_everything() {
    let source = FontSource::default();
    assert!(source.candidates.is_empty());
    assert!(source.default_candidates);
    assert!(source.system_fonts);
}

#[test]
fn resolved_font_is_shared_between_calls() {
    let provider = FontProvider::default();
    let (Some(a), Some(b)) = (provider.resolve(), provider.resolve()) else {
        // Host without any fonts: labels are skipped, nothing else to check.
        return;
    };
    assert!(Arc::ptr_eq(&a, &b));
    assert!(!a.family().is_empty());
    assert!(a.face_count() >= 1);
}
