//! Integer pixel arithmetic shared by the normalizer and the label renderer.
//!
//! All functions operate on straight (non-premultiplied) 8-bit channels and round to nearest.

/// Straight RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Alpha-over a straight RGBA pixel onto an opaque color: `src * a + bg * (1 - a)`.
///
/// `a == 0` yields `bg` exactly and `a == 255` yields the source color exactly.
pub fn over_solid(src: Rgba8, bg: [u8; 3]) -> [u8; 3] {
    let a = u16::from(src[3]);
    let inv = 255 - a;
    let mut out = [0u8; 3];
    for i in 0..3 {
        let v = u32::from(src[i]) * u32::from(a) + u32::from(bg[i]) * u32::from(inv);
        out[i] = ((v + 127) / 255) as u8;
    }
    out
}

/// Composite solid black with the given coverage over a straight RGBA pixel.
///
/// Opaque destinations stay opaque; transparent destinations pick up black at `coverage` alpha.
pub fn black_over(dst: Rgba8, coverage: u8) -> Rgba8 {
    if coverage == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(coverage);
    let keep = mul_div255(u16::from(dst[3]), inv);
    let out_a = u16::from(coverage) + u16::from(keep);
    if out_a == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let v = u32::from(dst[i]) * u32::from(keep);
        out[i] = ((v + u32::from(out_a) / 2) / u32::from(out_a)) as u8;
    }
    out[3] = out_a.min(255) as u8;
    out
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/pixel.rs"]
mod tests;
