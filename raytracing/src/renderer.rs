use image::Rgb32FImage;
use rayon::prelude::{IntoParallelIterator, ParallelIterator};

use crate::{
    camera::{PixelCoord, Viewport},
    color::{self, Color},
    integrators::{Integrator, WhittedIntegrator},
    math::vec::Vec3,
    scene::Scene,
    utils::log_once::warn_once,
};

/// Default budget of reflection bounces per primary ray
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// A 2D pixel buffer the renderer writes into
pub trait Raster {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
    /// Reset every pixel before a new pass
    fn initialize(&mut self);
}

impl Raster for Rgb32FImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.put_pixel(x, y, color)
    }

    fn initialize(&mut self) {
        self.pixels_mut().for_each(|p| *p = color::BLACK);
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub max_depth: u32,
    /// Trace rows in parallel on the rayon thread pool
    pub multithreaded: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            multithreaded: true,
        }
    }
}

pub struct Renderer {
    pub options: RenderOptions,
    pub integrator: Box<dyn Integrator>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            options: RenderOptions::default(),
            integrator: Box::new(WhittedIntegrator),
        }
    }
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn process_pixel(&self, scene: &Scene, viewport: &Viewport, coords: PixelCoord) -> Color {
        let ray = viewport.pixel_ray(coords);
        let color = self
            .integrator
            .ray_cast(scene, ray, self.options.max_depth, None);

        if color::is_finite(color) {
            color
        } else {
            warn_once!("non finite color at {coords:?}, writing black instead");
            color::BLACK
        }
    }

    fn process_row(&self, scene: &Scene, viewport: &Viewport, y: u32) -> Vec<Color> {
        (0..viewport.width)
            .map(|x| self.process_pixel(scene, viewport, PixelCoord { x, y }))
            .collect()
    }

    /// Render the whole raster from `viewpoint`.
    pub fn render<R: Raster>(&self, scene: &Scene, viewpoint: Vec3, raster: &mut R) {
        self.render_with_progress(scene, viewpoint, raster, |_| ())
    }

    /// Same as [Renderer::render], `on_row_done` is called with the index of every traced
    /// row, possibly from several threads and out of order.
    pub fn render_with_progress<R, F>(
        &self,
        scene: &Scene,
        viewpoint: Vec3,
        raster: &mut R,
        on_row_done: F,
    ) where
        R: Raster,
        F: Fn(u32) + Sync,
    {
        raster.initialize();
        let viewport = Viewport::new(raster.width(), raster.height(), viewpoint);

        log::info!(
            "Rendering {}x{} pixels, {} objects, max depth {}",
            viewport.width,
            viewport.height,
            scene.objects.len(),
            self.options.max_depth
        );

        let trace_row = |y| {
            let row = self.process_row(scene, &viewport, y);
            on_row_done(y);
            row
        };
        let rows: Vec<Vec<Color>> = if self.options.multithreaded {
            (0..viewport.height).into_par_iter().map(trace_row).collect()
        } else {
            (0..viewport.height).map(trace_row).collect()
        };

        for (y, row) in (0..).zip(rows) {
            for (x, color) in (0..).zip(row) {
                raster.set_pixel(x, y, color);
            }
        }
    }
}

/// Render `scene` seen from `viewpoint` into `raster` with the default options
pub fn render<R: Raster>(scene: &Scene, viewpoint: Vec3, raster: &mut R) {
    Renderer::default().render(scene, viewpoint, raster)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use glam::Vec3;
    use image::{ImageBuffer, Rgb32FImage};

    use super::{render, Raster, RenderOptions, Renderer};
    use crate::{
        color::{self, Color},
        material::Material,
        scene::{
            examples::{MirrorSpheresScene, MixedShapesScene},
            Light, Scene,
        },
        shape::Sphere,
    };

    /// Records every write, to check the renderer only writes
    struct RecordingRaster {
        width: u32,
        height: u32,
        writes: Vec<(u32, u32, Color)>,
        initialized: u32,
    }

    impl Raster for RecordingRaster {
        fn width(&self) -> u32 {
            self.width
        }
        fn height(&self) -> u32 {
            self.height
        }
        fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
            self.writes.push((x, y, color));
        }
        fn initialize(&mut self) {
            self.initialized += 1;
            self.writes.clear();
        }
    }

    fn single_sphere_scene() -> Scene {
        let mut scene = Scene::new(
            Light {
                position: Vec3::new(2.0, 2.0, 2.0),
                color: color::WHITE,
            },
            0.1,
        );
        scene.insert_object(
            Sphere {
                center: Vec3::ZERO,
                radius: 1.0,
            },
            Material::matte(color::gray(0.7)).with_reflection(0.0),
        );
        scene
    }

    #[test]
    fn single_sphere_center_lit_corners_black() {
        let scene = single_sphere_scene();
        let mut image: Rgb32FImage = ImageBuffer::new(9, 9);
        render(&scene, Vec3::new(0.0, 0.0, 5.0), &mut image);

        let center = *image.get_pixel(4, 4);
        let ambient = 0.1 * 0.7;
        assert!(center.0.iter().all(|&c| c > ambient));

        for (x, y) in [(0, 0), (8, 0), (0, 8), (8, 8)] {
            assert_eq!(*image.get_pixel(x, y), color::BLACK);
        }
    }

    #[test]
    fn rendering_twice_is_bit_identical() {
        let scene: Scene = MirrorSpheresScene.into();
        let mut first: Rgb32FImage = ImageBuffer::new(32, 24);
        let mut second: Rgb32FImage = ImageBuffer::new(32, 24);
        render(&scene, Vec3::ZERO, &mut first);
        render(&scene, Vec3::ZERO, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn threading_does_not_change_the_image() {
        let scene: Scene = MixedShapesScene.into();
        let mut parallel: Rgb32FImage = ImageBuffer::new(40, 30);
        let mut sequential: Rgb32FImage = ImageBuffer::new(40, 30);
        Renderer::default().render(&scene, Vec3::ZERO, &mut parallel);
        Renderer::new(RenderOptions {
            multithreaded: false,
            ..Default::default()
        })
        .render(&scene, Vec3::ZERO, &mut sequential);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn every_pixel_written_once_row_major() {
        let scene = single_sphere_scene();
        let mut raster = RecordingRaster {
            width: 3,
            height: 2,
            writes: vec![(9, 9, color::WHITE)],
            initialized: 0,
        };
        let rows_done = AtomicU32::new(0);
        Renderer::default().render_with_progress(
            &scene,
            Vec3::new(0.0, 0.0, 5.0),
            &mut raster,
            |_| {
                rows_done.fetch_add(1, Ordering::SeqCst);
            },
        );

        assert_eq!(raster.initialized, 1);
        assert_eq!(rows_done.load(Ordering::SeqCst), 2);
        let coords: Vec<_> = raster.writes.iter().map(|&(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn stale_pixels_are_reset() {
        let scene = single_sphere_scene();
        let mut image: Rgb32FImage = ImageBuffer::from_pixel(3, 3, color::WHITE);
        render(&scene, Vec3::new(0.0, 0.0, 5.0), &mut image);
        assert_eq!(*image.get_pixel(0, 0), color::BLACK);
    }

    #[test]
    fn depth_zero_renders_black() {
        let scene: Scene = MirrorSpheresScene.into();
        let mut image: Rgb32FImage = ImageBuffer::new(8, 8);
        Renderer::new(RenderOptions {
            max_depth: 0,
            ..Default::default()
        })
        .render(&scene, Vec3::ZERO, &mut image);
        assert!(image.pixels().all(|p| *p == color::BLACK));
    }

    #[test]
    fn stock_scenes_are_finite_and_not_empty() {
        for scene in [Scene::from(MirrorSpheresScene), Scene::from(MixedShapesScene)] {
            let mut image: Rgb32FImage = ImageBuffer::new(16, 16);
            render(&scene, Vec3::ZERO, &mut image);
            assert!(image.pixels().all(|p| color::is_finite(*p)));
            assert!(image.pixels().any(|p| *p != color::BLACK));
        }
    }
}
