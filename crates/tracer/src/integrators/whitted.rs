use crate::{
    aggregate::Aggregate,
    color::{self, Color, WHITE},
    counter,
    material::Material,
    math::vec::{RefrReflVecExt, RgbAsVec3Ext, Vec3, Vec3AsRgbExt, Vec3OffsetExt},
    ray::Ray,
    scene::Scene,
    shape::{Hit, HitRecord},
};

use super::{Integrator, RayResult};

/// Distance secondary rays are pushed away from the surface they start from
pub const EPSILON: f32 = 1e-3;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SpecularModel {
    /// `(n.h)^e` with `h` halfway between the light and the viewer
    #[default]
    BlinnPhong,
    /// `(r.v)^e` with `r` the light mirrored around the normal
    Phong,
}

/// Recursive ray tracer: direct lighting with hard shadows, plus perfect reflection and refraction.
///
/// Depths `0..=max_depth` are shaded, deeper rays get the background.
pub struct WhittedIntegrator {
    pub max_depth: u32,
    pub background: Color,
    pub specular_model: SpecularModel,
}

impl Default for WhittedIntegrator {
    fn default() -> Self {
        Self {
            max_depth: 4,
            background: color::BACKGROUND,
            specular_model: SpecularModel::default(),
        }
    }
}

impl Integrator for WhittedIntegrator {
    fn ray_cast(&self, scene: &Scene, ray: Ray, depth: u32) -> RayResult {
        if depth > self.max_depth {
            return self.sky_ray();
        }

        let Hit::Hit(record) = scene.objects.first_hit(ray) else {
            return self.sky_ray();
        };

        let material = scene.material(record.material);
        let position = record.pos;
        let normal = record.normal;
        let mut ray_depth = (depth + 1) as f32;

        // Unweighted branches are not traced
        let reflection = 'reflection: {
            if material.albedo.z == 0.0 {
                break 'reflection Vec3::ZERO;
            }
            let reflected = ray.direction.reflect(normal).normalize_or_zero();
            let reflected_ray_result =
                self.secondary_ray(scene, position, normal, reflected, depth + 1);
            ray_depth = ray_depth.max(reflected_ray_result.ray_depth);

            reflected_ray_result.color.vec()
        };

        let transmission = 'transmission: {
            if material.albedo.w == 0.0 {
                break 'transmission Vec3::ZERO;
            }
            // Total internal reflection, nothing is transmitted
            let Some(refracted) = ray.direction.refract(normal, material.refractive_index) else {
                break 'transmission Vec3::ZERO;
            };
            let refracted_ray_result =
                self.secondary_ray(scene, position, normal, refracted, depth + 1);
            ray_depth = ray_depth.max(refracted_ray_result.ray_depth);

            refracted_ray_result.color.vec()
        };

        let (diffuse, specular) = self.direct_lighting(scene, &record, ray.direction, material);

        let color = weighted(material.albedo.x, material.diffuse_color.vec() * diffuse)
            + weighted(material.albedo.y, WHITE.vec() * specular)
            + weighted(material.albedo.z, reflection)
            + weighted(material.albedo.w, transmission);

        RayResult {
            color: color::clamp(color.rgb()),
            z: record.t,
            ray_depth,
        }
    }
}

/// `weight * term`, where a zero weight drops the term even when it overflowed to infinity
fn weighted(weight: f32, term: Vec3) -> Vec3 {
    if weight == 0.0 {
        Vec3::ZERO
    } else {
        weight * term
    }
}

impl WhittedIntegrator {
    fn sky_ray(&self) -> RayResult {
        RayResult {
            color: self.background,
            ..Default::default()
        }
    }

    fn secondary_ray(
        &self,
        scene: &Scene,
        position: Vec3,
        normal: Vec3,
        direction: Vec3,
        depth: u32,
    ) -> RayResult {
        counter!("Secondary rays");
        let origin = position.offset_towards(normal, direction, EPSILON);
        self.ray_cast(scene, Ray::new(origin, direction), depth)
    }

    /// Sums the diffuse and specular intensities of every light visible from `record`
    fn direct_lighting(
        &self,
        scene: &Scene,
        record: &HitRecord,
        view_direction: Vec3,
        material: &Material,
    ) -> (f32, f32) {
        let mut diffuse = 0.0;
        let mut specular = 0.0;

        for light in scene.lights.iter() {
            let to_light = light.position - record.pos;
            let light_distance = to_light.length();
            // A light sitting on the surface lights nothing
            let Some(light_dir) = to_light.try_normalize() else {
                continue;
            };

            counter!("Shadow rays");
            let shadow_origin = record.pos.offset_towards(record.normal, light_dir, EPSILON);
            let shadow_ray = Ray::new_with_range(shadow_origin, light_dir, 0.0..light_distance);
            if scene.objects.occluded(shadow_ray) {
                continue;
            }

            diffuse += light.intensity * record.normal.dot(light_dir).max(0.0);

            let omega = match self.specular_model {
                SpecularModel::BlinnPhong => {
                    let halfway = (light_dir - view_direction).normalize_or_zero();
                    record.normal.dot(halfway)
                }
                SpecularModel::Phong => (-light_dir).reflect(record.normal).dot(-view_direction),
            };
            specular += light.intensity * omega.max(0.0).powf(material.specular_exponent);
        }

        (diffuse, specular)
    }
}
