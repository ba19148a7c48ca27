use std::ops::Range;

use super::math::vec::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub bounds: (f32, f32),
}

impl Ray {
    /// The direction is normalized; a zero direction stays zero and hits nothing.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            bounds: (0.0, f32::INFINITY),
        }
    }
    pub fn new_with_range(origin: Vec3, direction: Vec3, range: Range<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            bounds: (range.start, range.end),
        }
    }

    /// Distances accepted along this ray, the upper bound being excluded
    pub fn range(&self) -> Range<f32> {
        self.bounds.0..self.bounds.1
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::Ray;

    #[test]
    fn direction_is_normalized() {
        let ray = Ray::new(Vec3::X, Vec3::new(-3.0, 4.0, 0.0));

        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        assert_eq!(ray.at(0.0), ray.origin);
        assert!(ray.at(5.0).distance(Vec3::new(-2.0, 4.0, 0.0)) < 1e-5);
    }

    #[test]
    fn range_excludes_upper_bound() {
        let ray = Ray::new_with_range(Vec3::ZERO, Vec3::Z, 0.0..2.0);
        assert!(ray.range().contains(&0.0));
        assert!(ray.range().contains(&1.999));
        assert!(!ray.range().contains(&2.0));
        assert!(Ray::new(Vec3::ZERO, Vec3::Z).range().contains(&f32::MAX));
    }

    #[test]
    fn zero_direction_stays_zero() {
        let ray = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::ZERO);
        assert!(ray.direction.is_finite());
    }
}
