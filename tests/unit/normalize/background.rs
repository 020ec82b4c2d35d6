use image::{GrayImage, Luma, Rgb, Rgba, RgbaImage};

use super::*;

#[test]
fn opaque_rgb_on_white_is_bit_identical() {
    let src = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8 * 40, y as u8 * 70, 9]));
    let out = apply_background(DynamicImage::ImageRgb8(src.clone()), Background::WHITE);
    let DynamicImage::ImageRgb8(out) = out else {
        panic!("expected rgb8 output");
    };
    assert_eq!(out.as_raw(), src.as_raw());
}

#[test]
fn transparent_pixel_becomes_background() {
    let bg = [12, 34, 56];
    let src = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 255, 0]));
    let out = apply_background(DynamicImage::ImageRgba8(src), Background::Solid(bg));
    assert_eq!(out.color(), image::ColorType::Rgb8);
    for px in out.to_rgb8().pixels() {
        assert_eq!(px.0, bg);
    }
}

#[test]
fn opaque_pixel_keeps_color_regardless_of_background() {
    for bg in [[0, 0, 0], [255, 255, 255], [1, 2, 3]] {
        let src = RgbaImage::from_pixel(1, 1, Rgba([90, 180, 30, 255]));
        let out = apply_background(DynamicImage::ImageRgba8(src), Background::Solid(bg));
        assert_eq!(out.to_rgb8().get_pixel(0, 0).0, [90, 180, 30]);
    }
}

#[test]
fn grayscale_converts_to_rgb() {
    let src = GrayImage::from_pixel(2, 1, Luma([77]));
    let out = apply_background(DynamicImage::ImageLuma8(src), Background::WHITE);
    assert_eq!(out.color(), image::ColorType::Rgb8);
    assert_eq!(out.to_rgb8().get_pixel(1, 0).0, [77, 77, 77]);
}

#[test]
fn transparent_mode_preserves_alpha() {
    let src = RgbaImage::from_pixel(1, 1, Rgba([10, 20, 30, 40]));
    let out = apply_background(DynamicImage::ImageRgba8(src), Background::Transparent);
    assert_eq!(out.color(), image::ColorType::Rgba8);
    assert_eq!(out.to_rgba8().get_pixel(0, 0).0, [10, 20, 30, 40]);

    let rgb = RgbImage::from_pixel(1, 1, Rgb([1, 2, 3]));
    let out = apply_background(DynamicImage::ImageRgb8(rgb), Background::Transparent);
    assert_eq!(out.to_rgba8().get_pixel(0, 0).0, [1, 2, 3, 255]);
}

#[test]
fn dimensions_are_preserved() {
    let src = RgbaImage::new(7, 5);
    let out = apply_background(DynamicImage::ImageRgba8(src), Background::WHITE);
    assert_eq!((out.width(), out.height()), (7, 5));
}
