use crate::{material::MaterialId, math::vec::Vec3, ray::Ray, SceneError};

use super::{Hit, HitRecord, Shape};

/// A simple sphere shape, normals are pointing outwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: MaterialId,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: MaterialId) -> Result<Self, SceneError> {
        if !center.is_finite() {
            return Err(SceneError::NonFinite("sphere center"));
        }
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(SceneError::NonPositiveRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }
}

impl Shape for Sphere {
    fn intersect_bare(&self, ray: Ray) -> Option<f32> {
        // Project the center on the ray, then walk back half a chord
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        let d2 = l.length_squared() - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = f32::sqrt(r2 - d2);
        let t0 = tca - thc;
        let t1 = tca + thc;

        // When the near hit is out of range (origin inside the sphere, or sphere behind) take the far one
        let range = ray.range();
        if range.contains(&t0) {
            Some(t0)
        } else if range.contains(&t1) {
            Some(t1)
        } else {
            None
        }
    }

    fn intersection_full(&self, ray: Ray) -> Hit {
        let Some(t) = self.intersect_bare(ray) else {
            return Hit::NoHit;
        };

        let pos = ray.at(t);
        Hit::Hit(HitRecord {
            t,
            pos,
            normal: (pos - self.center).normalize_or_zero(),
            material: self.material,
        })
    }
}
