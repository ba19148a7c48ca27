pub mod shapelist;

use crate::{ray::Ray, shape::Hit};

pub use shapelist::ShapeList;

/// A collection of shapes that can be queried as a whole
pub trait Aggregate: Send + Sync {
    /// Nearest intersection along `ray`, inside its range
    fn first_hit(&self, ray: Ray) -> Hit;

    /// Whether anything intersects `ray` inside its range
    fn occluded(&self, ray: Ray) -> bool;
}
