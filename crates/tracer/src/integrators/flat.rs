use crate::{
    aggregate::Aggregate,
    color::{self, Color},
    ray::Ray,
    scene::Scene,
    shape::Hit,
};

use super::{Integrator, RayResult};

/// No lighting at all: the diffuse color of whatever is hit first
pub struct FlatIntegrator {
    pub background: Color,
}

impl Default for FlatIntegrator {
    fn default() -> Self {
        Self {
            background: color::BACKGROUND,
        }
    }
}

impl Integrator for FlatIntegrator {
    fn ray_cast(&self, scene: &Scene, ray: Ray, depth: u32) -> RayResult {
        let Hit::Hit(record) = scene.objects.first_hit(ray) else {
            return RayResult {
                color: self.background,
                ..Default::default()
            };
        };

        RayResult {
            color: color::clamp(scene.material(record.material).diffuse_color),
            z: record.t,
            ray_depth: (depth + 1) as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::FlatIntegrator;
    use crate::{
        color,
        integrators::Integrator,
        material::Material,
        ray::Ray,
        scene::{examples::IvoryScene, Scene},
    };

    #[test]
    fn flat_colors() {
        let scene: Scene = IvoryScene.into();
        let integrator = FlatIntegrator::default();

        let hit = integrator.ray_cast(&scene, Ray::new(Vec3::ZERO, Vec3::new(-3.0, 0.0, -16.0)), 0);
        assert_eq!(hit.color, Material::ivory().diffuse_color);
        assert!((hit.z - (Vec3::new(-3.0, 0.0, -16.0).length() - 2.0)).abs() < 1e-4);

        let miss = integrator.ray_cast(&scene, Ray::new(Vec3::ZERO, Vec3::Y), 0);
        assert_eq!(miss.color, color::BACKGROUND);
    }
}
