mod cli;
mod output;
mod progress;

use std::{fmt::Display, path::PathBuf};

use clap::{Parser, ValueEnum};
use cli::Cli;
use tracer::{
    integrators::{FlatIntegrator, Integrator, NormalIntegrator, SpecularModel, WhittedIntegrator},
    scene::{
        examples::{IvoryScene, MirrorsScene, SpheresScene},
        Scene,
    },
};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    /// A single ivory sphere
    Ivory,
    /// Ivory, glass, rubber and mirror spheres
    #[default]
    Spheres,
    /// Two mirrors facing each other
    Mirrors,
}

impl From<AvailableScene> for Scene {
    fn from(scene: AvailableScene) -> Self {
        match scene {
            AvailableScene::Ivory => IvoryScene.into(),
            AvailableScene::Spheres => SpheresScene.into(),
            AvailableScene::Mirrors => MirrorsScene.into(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableIntegrator {
    /// Lighting, shadows, reflections and refractions
    #[default]
    Whitted,
    /// Diffuse color of the first hit
    Flat,
    /// Normals of the first hit
    Normal,
}

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableSpecular {
    #[default]
    BlinnPhong,
    Phong,
}

impl From<AvailableSpecular> for SpecularModel {
    fn from(specular: AvailableSpecular) -> Self {
        match specular {
            AvailableSpecular::BlinnPhong => SpecularModel::BlinnPhong,
            AvailableSpecular::Phong => SpecularModel::Phong,
        }
    }
}

impl AvailableIntegrator {
    pub fn build(self, max_depth: u32, specular: AvailableSpecular) -> Box<dyn Integrator> {
        match self {
            AvailableIntegrator::Whitted => Box::new(WhittedIntegrator {
                max_depth,
                specular_model: specular.into(),
                ..Default::default()
            }),
            AvailableIntegrator::Flat => Box::new(FlatIntegrator::default()),
            AvailableIntegrator::Normal => Box::new(NormalIntegrator::default()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl std::str::FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut split_it = s.split('x');
        let (Some(a), Some(b), None) = (split_it.next(), split_it.next(), split_it.next()) else {
            return Err(anyhow::anyhow!("Incorrect format, see help"));
        };
        let width: u32 = a.parse()?;
        let height: u32 = b.parse()?;
        anyhow::ensure!(width > 0 && height > 0, "Dimensions must be positive");

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(short, long, default_value = "1024x768")]
    /// Screen dimension in format `width`x`height`
    dimensions: Dimensions,

    #[arg(long, default_value_t = 90.0)]
    /// Vertical field of view, in degrees
    fov: f32,

    #[arg(long, default_value_t = 4)]
    /// Deepest reflection or refraction level that is still shaded
    max_depth: u32,

    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(long, conflicts_with = "scene")]
    /// JSON scene description, used instead of a built-in scene
    scene_file: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t)]
    integrator: AvailableIntegrator,

    #[arg(long, value_enum, default_value_t)]
    /// Specular highlight model
    specular: AvailableSpecular,

    #[arg(short, long, default_value = "out.png")]
    /// 8 bit image, the format is guessed from the extension
    output: PathBuf,

    #[arg(long)]
    /// Directory where the linear color, depth and ray depth are saved as OpenEXR
    hdr_dir: Option<PathBuf>,

    #[arg(long)]
    /// Render on a single thread
    no_threads: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    Cli::new(args)?.run()
}
