//! Pure-computation conversion from colour sprite sources to luma.
//!
//! Uses the ITU-R 601-2 weights `L = R * 299/1000 + G * 587/1000 + B * 114/1000`
//! with rounding. Alpha is dropped, not composited, so fully transparent
//! pixels keep the luma of their colour channels.

use image::{GrayImage, Luma, RgbaImage};

/// Luma of one RGB triple.
pub fn luma_601(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    ((weighted + 500) / 1000) as u8
}

/// Converts an RGBA buffer to an 8-bit luma buffer of the same size.
pub fn rgba_to_luma(image: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, _] = image.get_pixel(x, y).0;
        Luma([luma_601(r, g, b)])
    })
}
