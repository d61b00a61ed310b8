use crate::{math::vec::Vec3, ray::Ray};

/// Position of a pixel in the raster, (0, 0) being the top left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelCoord {
    pub x: u32,
    pub y: u32,
}

/// Position on the view plane, both coordinates in [-1, 1], `vy` pointing up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportCoord {
    pub vx: f32,
    pub vy: f32,
}

impl ViewportCoord {
    pub fn from_pixel_coord(viewport: &Viewport, coords: PixelCoord) -> Self {
        // pixels in the image crate are from left to right, top to bottom
        Self {
            vx: to_unit_range(coords.x, viewport.width),
            vy: -to_unit_range(coords.y, viewport.height),
        }
    }
}

/// Maps 0..=size-1 linearly onto [-1, 1]; a single pixel sits in the middle
fn to_unit_range(i: u32, size: u32) -> f32 {
    if size <= 1 {
        0.0
    } else {
        2. * (i as f32 / (size - 1) as f32) - 1.
    }
}

/// Pinhole looking down -Z from `origin`, through a view plane one unit away spanning
/// [-1, 1] on both axes.
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub origin: Vec3,
}

impl Viewport {
    pub fn new(width: u32, height: u32, origin: Vec3) -> Self {
        Self {
            width,
            height,
            origin,
        }
    }

    pub fn ray(&self, ViewportCoord { vx, vy }: ViewportCoord) -> Ray {
        Ray::new(self.origin, Vec3::new(vx, vy, -1.0))
    }

    pub fn pixel_ray(&self, coords: PixelCoord) -> Ray {
        self.ray(ViewportCoord::from_pixel_coord(self, coords))
    }
}
