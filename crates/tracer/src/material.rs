use glam::Vec4;

use crate::{
    color::Color,
    math::vec::RgbAsVec3Ext,
    SceneError,
};

/// Surface response used by the Whitted integrator.
///
/// `albedo` weights, in order, the diffuse, specular, reflected and refracted contributions.
/// The weights are not required to sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub refractive_index: f32,
    pub albedo: Vec4,
    pub diffuse_color: Color,
    pub specular_exponent: f32,
}

impl Material {
    pub fn new(
        refractive_index: f32,
        albedo: Vec4,
        diffuse_color: Color,
        specular_exponent: f32,
    ) -> Result<Self, SceneError> {
        if !albedo.is_finite() || !diffuse_color.vec().is_finite() {
            return Err(SceneError::NonFinite("material"));
        }
        if !(refractive_index >= 1.0) || !refractive_index.is_finite() {
            return Err(SceneError::InvalidRefractiveIndex(refractive_index));
        }
        if !(specular_exponent > 0.0) || !specular_exponent.is_finite() {
            return Err(SceneError::InvalidSpecularExponent(specular_exponent));
        }
        if albedo == Vec4::ZERO {
            log::warn!("material with an all zero albedo will render black");
        }

        Ok(Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        })
    }

    pub fn ivory() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: Vec4::new(0.6, 0.3, 0.1, 0.0),
            diffuse_color: image::Rgb([0.4, 0.4, 0.3]),
            specular_exponent: 50.,
        }
    }

    pub fn glass() -> Self {
        Self {
            refractive_index: 1.5,
            albedo: Vec4::new(0.0, 0.5, 0.1, 0.8),
            diffuse_color: image::Rgb([0.6, 0.7, 0.8]),
            specular_exponent: 125.,
        }
    }

    pub fn red_rubber() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: Vec4::new(0.9, 0.1, 0.0, 0.0),
            diffuse_color: image::Rgb([0.3, 0.1, 0.1]),
            specular_exponent: 10.,
        }
    }

    pub fn mirror() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: Vec4::new(0.0, 10.0, 0.8, 0.0),
            diffuse_color: image::Rgb([1.0, 1.0, 1.0]),
            specular_exponent: 1425.,
        }
    }

    /// Looks up one of the named presets
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "ivory" => Some(Self::ivory()),
            "glass" => Some(Self::glass()),
            "red_rubber" => Some(Self::red_rubber()),
            "mirror" => Some(Self::mirror()),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct MaterialDescriptor {
    pub label: Option<String>,
    pub material: Material,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialId(pub usize);

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::Material;
    use crate::{color::gray, SceneError};

    #[test]
    fn presets_are_valid() {
        for name in ["ivory", "glass", "red_rubber", "mirror"] {
            let m = Material::preset(name).unwrap();
            let checked = Material::new(
                m.refractive_index,
                m.albedo,
                m.diffuse_color,
                m.specular_exponent,
            )
            .unwrap();
            assert_eq!(m, checked);
        }
        assert!(Material::preset("gold").is_none());
    }

    #[test]
    fn rejects_degenerate_materials() {
        let albedo = Vec4::new(1.0, 0.0, 0.0, 0.0);
        assert!(matches!(
            Material::new(0.5, albedo, gray(0.5), 10.0),
            Err(SceneError::InvalidRefractiveIndex(_))
        ));
        assert!(matches!(
            Material::new(1.0, albedo, gray(0.5), 0.0),
            Err(SceneError::InvalidSpecularExponent(_))
        ));
        assert!(matches!(
            Material::new(f32::NAN, albedo, gray(0.5), 10.0),
            Err(SceneError::InvalidRefractiveIndex(_))
        ));
        assert!(matches!(
            Material::new(1.0, Vec4::new(f32::NAN, 0.0, 0.0, 0.0), gray(0.5), 10.0),
            Err(SceneError::NonFinite(_))
        ));
    }
}
