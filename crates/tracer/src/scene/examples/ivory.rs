use glam::Vec3;

use crate::{
    light::Light,
    material::{Material, MaterialDescriptor},
    scene::Scene,
    shape::Sphere,
};

/// A single ivory sphere lit by a single light
pub struct IvoryScene;
impl From<IvoryScene> for Scene {
    fn from(_: IvoryScene) -> Self {
        let mut scene = Scene::default();
        let ivory = scene.insert_material(MaterialDescriptor {
            label: Some("Ivory".to_owned()),
            material: Material::ivory(),
        });

        scene.insert_object(Sphere {
            center: Vec3::new(-3.0, 0.0, -16.0),
            radius: 2.0,
            material: ivory,
        });
        scene.insert_light(Light {
            position: Vec3::new(-20.0, 20.0, 20.0),
            intensity: 1.5,
        });
        scene
    }
}
