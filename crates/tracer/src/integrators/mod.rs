use crate::{color::Color, color::BLACK, ray::Ray, scene::Scene};

mod flat;
mod normal;
mod whitted;

pub use flat::FlatIntegrator;
pub use normal::NormalIntegrator;
pub use whitted::{SpecularModel, WhittedIntegrator, EPSILON};

/// Computes the light coming back along a ray
pub trait Integrator: Send + Sync {
    fn ray_cast(&self, scene: &Scene, ray: Ray, depth: u32) -> RayResult;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayResult {
    pub color: Color,
    /// Distance to the first hit, 0 when nothing was hit
    pub z: f32,
    /// Number of bounces the deepest path went through
    pub ray_depth: f32,
}

impl Default for RayResult {
    fn default() -> Self {
        Self {
            color: BLACK,
            z: 0.0,
            ray_depth: 0.0,
        }
    }
}
