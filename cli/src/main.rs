mod cli;
mod output;
pub mod progress;

use std::{fmt::Display, path::PathBuf};

use clap::{Parser, ValueEnum};
use cli::Cli;
use glam::Vec3;
use raytracing::{
    renderer::DEFAULT_MAX_DEPTH,
    scene::{
        examples::{MirrorSpheresScene, MixedShapesScene},
        Scene,
    },
};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    #[default]
    MirrorSpheres,
    MixedShapes,
}

impl From<AvailableScene> for Scene {
    fn from(scene: AvailableScene) -> Self {
        match scene {
            AvailableScene::MirrorSpheres => MirrorSpheresScene.into(),
            AvailableScene::MixedShapes => MixedShapesScene.into(),
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
        if width == 0 || height == 0 {
            return Err(anyhow::anyhow!("Dimensions must be positive"));
        }

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewpoint(pub Vec3);

impl std::str::FromStr for Viewpoint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coords = s
            .split(',')
            .map(|c| c.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()?;
        let [x, y, z] = coords[..] else {
            return Err(anyhow::anyhow!(
                "Expected 3 comma separated coordinates, got {}",
                coords.len()
            ));
        };

        Ok(Viewpoint(Vec3::new(x, y, z)))
    }
}

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(short, long, default_value = "800x800")]
    /// Screen dimension in format `width`x`height`
    dimensions: Dimensions,

    #[arg(long, default_value = "0,0,0", allow_hyphen_values = true)]
    /// Position of the eye, in format `x`,`y`,`z`
    viewpoint: Viewpoint,

    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    /// Maximum number of bounces of a primary ray, including itself
    max_depth: u32,

    #[arg(long)]
    /// OBJ file added to the scene
    mesh: Option<PathBuf>,

    #[arg(long)]
    no_threads: bool,

    #[arg(short, long, default_value = "output")]
    /// Directory receiving `hdr/color.exr` and `ldr/color.png`
    output: PathBuf,

    #[arg(long, default_value_t = 2.2)]
    /// Gamma applied to the LDR image
    gamma: f32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    Cli::new(args)?.run()
}
