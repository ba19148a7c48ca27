use crate::math::{
    float::FloatAsExt,
    vec::{RgbAsVec3Ext, Vec3, Vec3AsRgbExt},
};

pub type Rgb = image::Rgb<f32>;
pub type Color = Rgb;

pub const WHITE: Color = image::Rgb([1.0, 1.0, 1.0]);
pub const BLACK: Color = image::Rgb([0.0, 0.0, 0.0]);
/// Sky blue returned by rays escaping the scene
pub const BACKGROUND: Color = image::Rgb([0.2, 0.7, 0.8]);

/// Clamps every channel to [0, 1]. NaN channels become 0, infinities saturate.
pub fn clamp(color: Color) -> Color {
    color
        .vec()
        .nan_to_zero()
        .clamp(Vec3::ZERO, Vec3::ONE)
        .rgb()
}

pub fn gray(c: f32) -> Color {
    image::Rgb([c, c, c])
}
