use crate::{
    aggregate::Aggregate,
    color::{self, Color},
    math::vec::Vec3AsRgbExt,
    ray::Ray,
    scene::Scene,
    shape::Hit,
};

use super::{Integrator, RayResult};

/// Shows the normals of the first surfaces hit, remapped from [-1, 1] to [0, 1]
pub struct NormalIntegrator {
    pub background: Color,
}

impl Default for NormalIntegrator {
    fn default() -> Self {
        Self {
            background: color::BACKGROUND,
        }
    }
}

impl Integrator for NormalIntegrator {
    fn ray_cast(&self, scene: &Scene, ray: Ray, depth: u32) -> RayResult {
        let Hit::Hit(record) = scene.objects.first_hit(ray) else {
            return RayResult {
                color: self.background,
                ..Default::default()
            };
        };

        RayResult {
            color: color::clamp((0.5 * (record.normal + 1.0)).rgb()),
            z: record.t,
            ray_depth: (depth + 1) as f32,
        }
    }
}
