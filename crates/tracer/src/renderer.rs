use image::{ImageBuffer, Luma, Rgb32FImage};
use rayon::prelude::{IntoParallelIterator, ParallelIterator};

use crate::{
    camera::{Camera, PixelCoord},
    color::Rgb,
    counter,
    integrators::Integrator,
    math::vec::Vec3,
    scene::Scene,
};

pub struct Renderer {
    pub camera: Camera,
    pub scene: Scene,
    pub integrator: Box<dyn Integrator>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRenderResult {
    pub color: Rgb,
    pub z: Luma<f32>,
    pub ray_depth: Luma<f32>,
}

pub type LumaImage = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Everything computed during one render, rows from top to bottom
pub struct Framebuffer {
    pub color: Rgb32FImage,
    pub z: LumaImage,
    pub ray_depth: LumaImage,
}

pub enum Channel<RgbStorage, LumaStorage> {
    Color(RgbStorage),
    Z(LumaStorage),
    RayDepth(LumaStorage),
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color: ImageBuffer::new(width, height),
            z: ImageBuffer::new(width, height),
            ray_depth: ImageBuffer::new(width, height),
        }
    }

    pub fn put_pixel(&mut self, PixelCoord { x, y }: PixelCoord, pixel: PixelRenderResult) {
        self.color.put_pixel(x, y, pixel.color);
        self.z.put_pixel(x, y, pixel.z);
        self.ray_depth.put_pixel(x, y, pixel.ray_depth);
    }

    pub fn channels(&self) -> [Channel<&Rgb32FImage, &LumaImage>; 3] {
        [
            Channel::Color(&self.color),
            Channel::Z(&self.z),
            Channel::RayDepth(&self.ray_depth),
        ]
    }
}

impl Renderer {
    pub fn process_pixel(&self, coords: PixelCoord) -> PixelRenderResult {
        counter!("Primary rays");
        let camera_ray = self.camera.ray(coords);
        let ray_result = self.integrator.ray_cast(&self.scene, camera_ray, 0);

        PixelRenderResult {
            color: ray_result.color,
            z: Luma([ray_result.z]),
            ray_depth: Luma([ray_result.ray_depth]),
        }
    }

    /// Renders every pixel. Rows are spread over the rayon thread pool,
    /// `on_row_done` is called from the worker that finished the row.
    pub fn run<F: Fn(u32) + Sync>(&self, on_row_done: F) -> Framebuffer {
        let width = self.camera.width;
        let height = self.camera.height;

        log::info!("Generating {width}x{height} image...");
        let rows: Vec<Vec<PixelRenderResult>> = (0..height)
            .into_par_iter()
            .map(|y| {
                let row = (0..width)
                    .map(|x| self.process_pixel(PixelCoord { x, y }))
                    .collect();
                log::trace!("Row {y} done");
                on_row_done(y);
                row
            })
            .collect();

        let mut framebuffer = Framebuffer::new(width, height);
        for (y, row) in (0..height).zip(rows) {
            for (x, pixel) in (0..width).zip(row) {
                framebuffer.put_pixel(PixelCoord { x, y }, pixel);
            }
        }

        log::info!("Image fully generated");
        framebuffer
    }
}

/// Camera at the origin looking down -z
pub struct DefaultRenderer {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view, in radians
    pub vfov: f32,
    pub scene: Scene,
    pub integrator: Box<dyn Integrator>,
}

impl From<DefaultRenderer> for Renderer {
    fn from(r: DefaultRenderer) -> Self {
        Renderer {
            camera: Camera::new(r.width, r.height, r.vfov, Vec3::ZERO),
            scene: r.scene,
            integrator: r.integrator,
        }
    }
}
