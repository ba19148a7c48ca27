//! JSON scene descriptions.
//!
//! ```json
//! {
//!     "materials": {
//!         "chalk": { "albedo": [0.9, 0.1, 0.0, 0.0], "diffuse_color": [0.9, 0.9, 0.9], "specular_exponent": 5.0 }
//!     },
//!     "spheres": [
//!         { "center": [-3.0, 0.0, -16.0], "radius": 2.0, "material": "ivory" },
//!         { "center": [1.5, -0.5, -18.0], "radius": 3.0, "material": "chalk" }
//!     ],
//!     "lights": [{ "position": [-20.0, 20.0, 20.0], "intensity": 1.5 }]
//! }
//! ```
//!
//! Materials not declared in `materials` are looked up in the presets
//! (`ivory`, `glass`, `red_rubber`, `mirror`).

use std::{collections::BTreeMap, path::Path};

use glam::{Vec3, Vec4};
use serde::Deserialize;

use crate::{
    light::Light,
    material::{Material, MaterialDescriptor, MaterialId},
    scene::Scene,
    shape::Sphere,
    SceneError,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDescription>,
    pub spheres: Vec<SphereDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaterialDescription {
    #[serde(default = "default_refractive_index")]
    pub refractive_index: f32,
    pub albedo: [f32; 4],
    pub diffuse_color: [f32; 3],
    pub specular_exponent: f32,
}

fn default_refractive_index() -> f32 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereDescription {
    pub center: [f32; 3],
    pub radius: f32,
    pub material: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightDescription {
    pub position: [f32; 3],
    pub intensity: f32,
}

impl SceneDescription {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Validates every value and builds the scene.
    ///
    /// Each material used by several spheres is stored once.
    pub fn into_scene(self) -> Result<Scene, SceneError> {
        let mut scene = Scene::default();
        let mut ids: BTreeMap<String, MaterialId> = BTreeMap::new();

        for (name, description) in self.materials {
            let material = Material::new(
                description.refractive_index,
                Vec4::from_array(description.albedo),
                image::Rgb(description.diffuse_color),
                description.specular_exponent,
            )?;
            let id = scene.insert_material(MaterialDescriptor {
                label: Some(name.clone()),
                material,
            });
            ids.insert(name, id);
        }

        for sphere in self.spheres {
            let material = match ids.get(&sphere.material).copied() {
                Some(id) => id,
                None => {
                    let preset = Material::preset(&sphere.material)
                        .ok_or_else(|| SceneError::UnknownMaterial(sphere.material.clone()))?;
                    let id = scene.insert_material(MaterialDescriptor {
                        label: Some(sphere.material.clone()),
                        material: preset,
                    });
                    ids.insert(sphere.material, id);
                    id
                }
            };
            scene.insert_object(Sphere::new(
                Vec3::from_array(sphere.center),
                sphere.radius,
                material,
            )?);
        }

        for light in self.lights {
            scene.insert_light(Light::new(
                Vec3::from_array(light.position),
                light.intensity,
            )?);
        }

        log::debug!(
            "loaded scene: {} spheres, {} materials, {} lights",
            scene.objects.len(),
            scene.materials.len(),
            scene.lights.len()
        );
        if scene.lights.is_empty() {
            log::warn!("scene has no light, only reflections and refractions of the background will be visible");
        }

        Ok(scene)
    }
}

impl Scene {
    /// Reads and validates a JSON scene description
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        SceneDescription::from_file(path)?.into_scene()
    }
}

#[cfg(test)]
mod tests {
    use super::SceneDescription;
    use crate::{material::Material, SceneError};

    const SCENE: &str = r#"{
        "materials": {
            "chalk": { "albedo": [0.9, 0.1, 0.0, 0.0], "diffuse_color": [0.9, 0.9, 0.9], "specular_exponent": 5.0 }
        },
        "spheres": [
            { "center": [-3.0, 0.0, -16.0], "radius": 2.0, "material": "ivory" },
            { "center": [1.5, -0.5, -18.0], "radius": 3.0, "material": "chalk" },
            { "center": [7.0, 5.0, -18.0], "radius": 4.0, "material": "ivory" }
        ],
        "lights": [{ "position": [-20.0, 20.0, 20.0], "intensity": 1.5 }]
    }"#;

    #[test]
    fn parse_scene() {
        let scene = SceneDescription::from_json(SCENE)
            .unwrap()
            .into_scene()
            .unwrap();

        assert_eq!(scene.objects.len(), 3);
        assert_eq!(scene.lights.len(), 1);
        // The ivory preset is shared by two spheres
        assert_eq!(scene.materials.len(), 2);

        let ivory = scene
            .materials
            .iter()
            .find(|m| m.label.as_deref() == Some("ivory"))
            .unwrap();
        assert_eq!(ivory.material, Material::ivory());

        let chalk = scene
            .materials
            .iter()
            .find(|m| m.label.as_deref() == Some("chalk"))
            .unwrap();
        assert_eq!(chalk.material.refractive_index, 1.0);
        assert_eq!(chalk.material.specular_exponent, 5.0);
    }

    #[test]
    fn unknown_material() {
        let json = r#"{ "spheres": [{ "center": [0, 0, -5], "radius": 1, "material": "gold" }] }"#;
        let err = SceneDescription::from_json(json)
            .unwrap()
            .into_scene()
            .err()
            .unwrap();
        assert!(matches!(err, SceneError::UnknownMaterial(name) if name == "gold"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let json = r#"{ "spheres": [{ "center": [0, 0, -5], "radius": -1, "material": "glass" }] }"#;
        let err = SceneDescription::from_json(json)
            .unwrap()
            .into_scene()
            .err()
            .unwrap();
        assert!(matches!(err, SceneError::NonPositiveRadius(_)));

        let json = r#"{ "spheres": [], "lights": [{ "position": [0, 0, 0], "intensity": -2 }] }"#;
        let err = SceneDescription::from_json(json)
            .unwrap()
            .into_scene()
            .err()
            .unwrap();
        assert!(matches!(err, SceneError::InvalidIntensity(_)));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            SceneDescription::from_json("{ \"spheres\": [ }"),
            Err(SceneError::Parse(_))
        ));
        assert!(matches!(
            SceneDescription::from_json(r#"{ "spheres": [], "cameras": [] }"#),
            Err(SceneError::Parse(_))
        ));
    }

    #[test]
    fn missing_file() {
        let err = crate::scene::Scene::from_file("/nonexistent/scene.json")
            .err()
            .unwrap();
        assert!(matches!(err, SceneError::Io { .. }));
    }
}
