use glam::Vec3;

use crate::{
    light::Light,
    material::{Material, MaterialDescriptor},
    scene::Scene,
    shape::Sphere,
};

/// Ivory, glass, rubber and mirror spheres under three lights
pub struct SpheresScene;
impl From<SpheresScene> for Scene {
    fn from(_: SpheresScene) -> Self {
        let mut scene = Scene::default();
        let ivory = scene.insert_material(MaterialDescriptor {
            label: Some("Ivory".to_owned()),
            material: Material::ivory(),
        });
        let glass = scene.insert_material(MaterialDescriptor {
            label: Some("Glass".to_owned()),
            material: Material::glass(),
        });
        let red_rubber = scene.insert_material(MaterialDescriptor {
            label: Some("Red rubber".to_owned()),
            material: Material::red_rubber(),
        });
        let mirror = scene.insert_material(MaterialDescriptor {
            label: Some("Mirror".to_owned()),
            material: Material::mirror(),
        });

        scene.insert_object(Sphere {
            center: Vec3::new(-3.0, 0.0, -16.0),
            radius: 2.0,
            material: ivory,
        });
        scene.insert_object(Sphere {
            center: Vec3::new(-1.0, -1.5, -12.0),
            radius: 2.0,
            material: glass,
        });
        scene.insert_object(Sphere {
            center: Vec3::new(1.5, -0.5, -18.0),
            radius: 3.0,
            material: red_rubber,
        });
        scene.insert_object(Sphere {
            center: Vec3::new(7.0, 5.0, -18.0),
            radius: 4.0,
            material: mirror,
        });

        scene.insert_light(Light {
            position: Vec3::new(-20.0, 20.0, 20.0),
            intensity: 1.5,
        });
        scene.insert_light(Light {
            position: Vec3::new(30.0, 50.0, -25.0),
            intensity: 1.8,
        });
        scene.insert_light(Light {
            position: Vec3::new(30.0, 20.0, 30.0),
            intensity: 1.7,
        });
        scene
    }
}
