use super::*;
use crate::assets::fonts::FontProvider;

#[test]
fn escape_xml_covers_markup_characters() {
    assert_eq!(escape_xml("(1)"), "(1)");
    assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
}

#[test]
fn wider_text_measures_wider() {
    let Some(font) = FontProvider::default().resolve() else {
        return;
    };
    let (Some(one), Some(many)) = (
        rasterize_label("1", &font, 40).unwrap(),
        rasterize_label("(888)", &font, 40).unwrap(),
    ) else {
        return;
    };

    assert!(one.ink_width > 0);
    assert!(many.ink_width > one.ink_width);
    assert_eq!(one.coverage.len(), (one.width * one.height) as usize);
    assert!(one.coverage.iter().any(|&c| c > 0));
}

#[test]
fn glyphs_sit_inside_the_label_box() {
    let Some(font) = FontProvider::default().resolve() else {
        return;
    };
    let Some(raster) = rasterize_label("iv", &font, 30).unwrap() else {
        return;
    };

    // Text starts one em in from the raster's left edge.
    assert!(raster.ink_left >= 15 && raster.ink_left <= 45);
    let inked = |x: u32| {
        (0..raster.height).any(|y| raster.coverage[(y * raster.width + x) as usize] > 0)
    };
    let last_inked_col = (0..raster.width).rev().find(|&x| inked(x)).unwrap();
    assert!(i64::from(last_inked_col) <= raster.ink_left + i64::from(raster.ink_width));
}

#[test]
fn absurd_font_size_is_rejected() {
    let Some(font) = FontProvider::default().resolve() else {
        return;
    };
    assert!(matches!(
        rasterize_label("12", &font, 10_000),
        Err(FigureError::InvalidConfig(_))
    ));
}
