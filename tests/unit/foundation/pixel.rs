use super::*;

#[test]
fn transparent_source_yields_background() {
    for bg in [[0, 0, 0], [255, 255, 255], [12, 200, 77]] {
        assert_eq!(over_solid([250, 10, 99, 0], bg), bg);
    }
}

#[test]
fn opaque_source_ignores_background() {
    for bg in [[0, 0, 0], [255, 255, 255], [12, 200, 77]] {
        assert_eq!(over_solid([250, 10, 99, 255], bg), [250, 10, 99]);
    }
}

#[test]
fn half_alpha_blends_midway() {
    assert_eq!(over_solid([255, 0, 0, 128], [0, 0, 255]), [128, 0, 127]);
}

#[test]
fn black_over_zero_coverage_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(black_over(dst, 0), dst);
}

#[test]
fn black_over_full_coverage_is_black() {
    assert_eq!(black_over([200, 200, 200, 255], 255), [0, 0, 0, 255]);
    assert_eq!(black_over([0, 0, 0, 0], 255), [0, 0, 0, 255]);
}

#[test]
fn black_over_opaque_darkens_and_stays_opaque() {
    assert_eq!(black_over([255, 255, 255, 255], 128), [127, 127, 127, 255]);
}

#[test]
fn black_over_transparent_takes_coverage_as_alpha() {
    assert_eq!(black_over([0, 0, 0, 0], 90), [0, 0, 0, 90]);
}
