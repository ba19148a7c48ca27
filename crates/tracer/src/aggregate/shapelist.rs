use crate::{
    ray::Ray,
    shape::{Hit, Shape},
};

use super::Aggregate;

/// Linear list of shapes. Scenes are small enough that a scan beats building a hierarchy.
#[derive(Default)]
pub struct ShapeList(pub Vec<Box<dyn Shape>>);

impl ShapeList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Aggregate for ShapeList {
    fn first_hit(&self, mut ray: Ray) -> Hit {
        let mut res = Hit::NoHit;

        for shape in self.0.iter() {
            if ray.range().is_empty() {
                break;
            }

            // Shrinking the range keeps the first shape on equal distances
            if let Hit::Hit(record) = shape.intersection_full(ray) {
                ray.bounds.1 = record.t;
                res = Hit::Hit(record);
            }
        }
        res
    }

    fn occluded(&self, ray: Ray) -> bool {
        self.0
            .iter()
            .any(|shape| shape.intersect_bare(ray).is_some())
    }
}
