//! Contains the objects that are meant to be rendered.
//!
//! Only spheres are supported. The [Shape] trait is what the aggregates and integrators see.

pub mod sphere;

use crate::{material::MaterialId, math::vec::Vec3, ray::Ray};

pub use sphere::Sphere;

/// Local information at the point where a ray hit a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray
    pub t: f32,
    pub pos: Vec3,
    /// Unit normal, pointing outwards
    pub normal: Vec3,
    pub material: MaterialId,
}

/// A `Result`-like type that takes care of intersections data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    Hit(HitRecord),
    NoHit,
}

/// An abstracted shape to be rendered by raytracing.
pub trait Shape: Send + Sync {
    /// Distance to the first intersection of `ray` with the shape, inside the ray range.
    /// It is used to cast shadow rays
    fn intersect_bare(&self, ray: Ray) -> Option<f32>;

    /// Check whether `ray` intersect the shape and if so, gives all the information needed to shade it
    fn intersection_full(&self, ray: Ray) -> Hit;
}
