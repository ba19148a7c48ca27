use anyhow::{Context, Result};
use tracer::{
    renderer::{DefaultRenderer, Framebuffer, Renderer},
    scene::Scene,
    utils::{
        counter,
        timer::{format_rate, timed_scope_log},
    },
};

use crate::{output::FileOutput, progress::Progress, Args};

pub trait FinalOutput: Send {
    fn commit(&self, framebuffer: &Framebuffer) -> Result<()>;
}

pub struct Cli {
    pub final_outputs: Vec<Box<dyn FinalOutput>>,
    pub renderer: Renderer,
}

impl Cli {
    pub fn new(args: Args) -> Result<Self> {
        if args.no_threads {
            log::warn!("Working on only one thread");
            rayon::ThreadPoolBuilder::new()
                .num_threads(1)
                .build_global()
                .context("Could not configure the thread pool")?;
        }

        anyhow::ensure!(
            args.fov > 0.0 && args.fov < 180.0,
            "Field of view must be between 0 and 180 degrees, got {}",
            args.fov
        );

        let scene: Scene = match args.scene_file {
            Some(ref path) => Scene::from_file(path)
                .with_context(|| format!("Could not load scene {}", path.display()))?,
            None => args.scene.into(),
        };

        let renderer = DefaultRenderer {
            width: args.dimensions.width,
            height: args.dimensions.height,
            vfov: args.fov.to_radians(),
            scene,
            integrator: args.integrator.build(args.max_depth, args.specular),
        }
        .into();

        Ok(Self {
            final_outputs: vec![Box::new(FileOutput {
                ldr_path: args.output,
                hdr_outdir: args.hdr_dir,
            })],
            renderer,
        })
    }

    pub fn run(self) -> Result<()> {
        let camera = &self.renderer.camera;
        let progress = Progress::new(camera.height as usize);

        let timed = timed_scope_log("Render", || {
            self.renderer.run(|_| {
                progress.inc();
                progress.print();
            })
        });
        let pixels = u64::from(camera.width) * u64::from(camera.height);
        log::info!("Throughput: {} pixels", format_rate(pixels, timed.elapsed));
        let framebuffer = timed.res;

        for final_output in self.final_outputs {
            final_output.commit(&framebuffer)?;
        }

        log::info!("Done");
        counter::report_counters();
        Ok(())
    }
}
