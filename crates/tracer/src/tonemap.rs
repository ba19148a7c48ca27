//! From the linear framebuffer to 8 bit pixels.

use image::{Rgb, Rgb32FImage, RgbImage};

use crate::math::float::FloatAsExt;

/// Clamps to [0, 1] then scales to [0, 255], truncating. NaN gives 0, infinities saturate.
pub fn quantize(c: f32) -> u8 {
    (c.nan_to_zero().clamp(0.0, 1.0) * 255.0) as u8
}

pub fn to_ldr_pixel(Rgb(color): Rgb<f32>) -> Rgb<u8> {
    Rgb(color.map(quantize))
}

pub fn to_ldr(framebuffer: &Rgb32FImage) -> RgbImage {
    RgbImage::from_fn(framebuffer.width(), framebuffer.height(), |x, y| {
        to_ldr_pixel(*framebuffer.get_pixel(x, y))
    })
}
