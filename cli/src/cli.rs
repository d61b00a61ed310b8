use anyhow::{Context, Result};
use image::Rgb32FImage;
use raytracing::{
    loader::ObjLoaderExt,
    material::Material,
    math::transform::Transform,
    renderer::{RenderOptions, Renderer},
    scene::Scene,
    utils::{counter, timer::timed_scope_log},
};

use crate::{output::FileOutput, progress::Progress, Args, Dimensions, Viewpoint};

pub struct Cli {
    pub scene: Scene,
    pub viewpoint: Viewpoint,
    pub dimensions: Dimensions,
    pub renderer: Renderer,
    pub output: FileOutput,
}

impl Cli {
    pub fn new(args: Args) -> Result<Self> {
        if args.no_threads {
            log::warn!("Working on only one thread");
        }

        let mut scene: Scene = args.scene.into();
        if let Some(mesh) = args.mesh {
            let ids = scene
                .load_obj(&mesh, Transform::IDENTITY, Material::default())
                .with_context(|| format!("Could not load mesh {}", mesh.display()))?;
            log::info!("Loaded {} meshes from {}", ids.len(), mesh.display());
        }

        Ok(Self {
            scene,
            viewpoint: args.viewpoint,
            dimensions: args.dimensions,
            renderer: Renderer::new(RenderOptions {
                max_depth: args.max_depth,
                multithreaded: !args.no_threads,
            }),
            output: FileOutput::new(args.output, args.gamma),
        })
    }

    pub fn run(self) -> Result<()> {
        let Dimensions { width, height } = self.dimensions;
        let mut image = Rgb32FImage::new(width, height);
        let progress = Progress::new(height as usize);

        timed_scope_log("Render", || {
            self.renderer
                .render_with_progress(&self.scene, self.viewpoint.0, &mut image, |_| {
                    progress.inc();
                    progress.print();
                })
        });

        self.output.commit(&image)?;

        log::info!("Done");
        counter::report_counters();
        Ok(())
    }
}
