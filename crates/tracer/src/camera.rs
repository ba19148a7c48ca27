use crate::{math::vec::Vec3, ray::Ray};

/// Pixel coordinates, from left to right and top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelCoord {
    pub x: u32,
    pub y: u32,
}

/// Pinhole camera looking down -z
pub struct Camera {
    pub width: u32,
    pub height: u32,
    pub viewport_height: f32,
    pub viewport_width: f32,
    pub origin: Vec3,
}

impl Camera {
    /// `vfov` is the vertical field of view, in radians
    pub fn new(width: u32, height: u32, vfov: f32, origin: Vec3) -> Self {
        let h = f32::tan(vfov / 2.);

        let aspect_ratio = width as f32 / height as f32;
        Self {
            width,
            height,
            viewport_height: h,                // From center to top
            viewport_width: h * aspect_ratio, // From center to left
            origin,
        }
    }

    /// Ray through the center of the pixel
    pub fn ray(&self, PixelCoord { x, y }: PixelCoord) -> Ray {
        let vx = 2. * (x as f32 + 0.5) / self.width as f32 - 1.;
        let vy = -(2. * (y as f32 + 0.5) / self.height as f32 - 1.);

        let direction = Vec3::new(vx * self.viewport_width, vy * self.viewport_height, -1.0);
        Ray::new(self.origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{Camera, PixelCoord};

    #[test]
    fn center_rays() {
        // With an even number of pixels no ray goes straight ahead, but the central ones are symmetric
        let camera = Camera::new(4, 2, f32::to_radians(90.), Vec3::ZERO);
        let left = camera.ray(PixelCoord { x: 1, y: 0 }).direction;
        let right = camera.ray(PixelCoord { x: 2, y: 0 }).direction;
        assert!((left.x + right.x).abs() < 1e-6);
        assert!(left.y > 0.0 && (left.y - right.y).abs() < 1e-6);
        assert!(left.z < 0.0);
    }

    #[test]
    fn corner_ray() {
        let camera = Camera::new(2, 2, f32::to_radians(90.), Vec3::ZERO);
        let ray = camera.ray(PixelCoord { x: 0, y: 1 });
        // Half a viewport away from the axis, which spans tan(45) = 1
        let expected = Vec3::new(-0.5, -0.5, -1.0).normalize();
        assert!(ray.direction.distance(expected) < 1e-6);
        assert_eq!(ray.origin, Vec3::ZERO);
    }

    #[test]
    fn aspect_ratio_widens_horizontally() {
        let camera = Camera::new(1024, 768, f32::to_radians(90.), Vec3::ZERO);
        assert!((camera.viewport_height - 1.0).abs() < 1e-6);
        assert!((camera.viewport_width - 4.0 / 3.0).abs() < 1e-6);
    }
}
