use crate::{math::vec::Vec3, SceneError};

/// A point light, emitting white light with the same intensity in every direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    pub fn new(position: Vec3, intensity: f32) -> Result<Self, SceneError> {
        if !position.is_finite() {
            return Err(SceneError::NonFinite("light position"));
        }
        if !(intensity >= 0.0) || !intensity.is_finite() {
            return Err(SceneError::InvalidIntensity(intensity));
        }
        Ok(Self {
            position,
            intensity,
        })
    }
}
