use glam::{Vec3, Vec4};

use crate::{
    color::WHITE,
    light::Light,
    material::{Material, MaterialDescriptor},
    scene::Scene,
    shape::Sphere,
};

/// Two perfect mirrors facing each other, with the camera in between.
///
/// Rays along the axis bounce until the depth limit is reached.
pub struct MirrorsScene;
impl From<MirrorsScene> for Scene {
    fn from(_: MirrorsScene) -> Self {
        let mut scene = Scene::default();
        let perfect_mirror = scene.insert_material(MaterialDescriptor {
            label: Some("Perfect mirror".to_owned()),
            material: Material {
                refractive_index: 1.0,
                albedo: Vec4::new(0.0, 0.0, 1.0, 0.0),
                diffuse_color: WHITE,
                specular_exponent: 1.0,
            },
        });

        scene.insert_object(Sphere {
            center: Vec3::new(0.0, 0.0, -10.0),
            radius: 3.0,
            material: perfect_mirror,
        });
        scene.insert_object(Sphere {
            center: Vec3::new(0.0, 0.0, 10.0),
            radius: 3.0,
            material: perfect_mirror,
        });
        scene.insert_light(Light {
            position: Vec3::new(0.0, 20.0, 0.0),
            intensity: 1.0,
        });
        scene
    }
}
