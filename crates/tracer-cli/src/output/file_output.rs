use std::path::PathBuf;

use anyhow::{Context, Result};
use image::{buffer::ConvertBuffer, Rgb32FImage};
use tracer::{
    renderer::{Channel, Framebuffer},
    tonemap,
};

use crate::cli::FinalOutput;

/// Writes the tone mapped image, and optionally the linear buffers as OpenEXR
pub struct FileOutput {
    pub ldr_path: PathBuf,
    pub hdr_outdir: Option<PathBuf>,
}

impl FinalOutput for FileOutput {
    fn commit(&self, framebuffer: &Framebuffer) -> Result<()> {
        if let Some(parent) = self.ldr_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Could not create {}", parent.display()))?;
            }
        }

        log::info!("Saving image to {}", self.ldr_path.display());
        tonemap::to_ldr(&framebuffer.color)
            .save(&self.ldr_path)
            .with_context(|| format!("Could not save {}", self.ldr_path.display()))?;

        if let Some(ref hdr_output) = self.hdr_outdir {
            let convert_luma = ConvertBuffer::<Rgb32FImage>::convert;
            std::fs::create_dir_all(hdr_output)
                .with_context(|| format!("Could not create {}", hdr_output.display()))?;

            log::info!("Saving HDR images...");
            for channel in framebuffer.channels() {
                let (name, res) = match channel {
                    Channel::Color(color) => ("color.exr", color.save(hdr_output.join("color.exr"))),
                    Channel::Z(z) => ("depth.exr", convert_luma(z).save(hdr_output.join("depth.exr"))),
                    Channel::RayDepth(ray_depth) => (
                        "ray_depth.exr",
                        convert_luma(ray_depth).save(hdr_output.join("ray_depth.exr")),
                    ),
                };
                res.with_context(|| format!("Could not save {name}"))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use image::Rgb;
    use tracer::{camera::PixelCoord, renderer::{Framebuffer, PixelRenderResult}};

    use super::FileOutput;
    use crate::cli::FinalOutput;

    fn framebuffer() -> Framebuffer {
        let mut framebuffer = Framebuffer::new(2, 1);
        framebuffer.put_pixel(
            PixelCoord { x: 0, y: 0 },
            PixelRenderResult {
                color: Rgb([0.5, 1.5, -1.0]),
                z: image::Luma([3.0]),
                ray_depth: image::Luma([1.0]),
            },
        );
        framebuffer
    }

    #[test]
    fn saves_tone_mapped_png() {
        let dir = std::env::temp_dir().join(format!("tracer-cli-test-{}", std::process::id()));
        let path = dir.join("nested").join("out.png");
        FileOutput {
            ldr_path: path.clone(),
            hdr_outdir: None,
        }
        .commit(&framebuffer())
        .unwrap();

        let image = image::open(&path).unwrap().into_rgb8();
        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(*image.get_pixel(0, 0), Rgb([127, 255, 0]));
        assert_eq!(*image.get_pixel(1, 0), Rgb([0, 0, 0]));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let output = FileOutput {
            ldr_path: "/dev/null/out.png".into(),
            hdr_outdir: None,
        };
        assert!(output.commit(&framebuffer()).is_err());
    }
}
