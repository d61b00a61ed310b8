use crate::{color::Color, ray::Ray, scene::Scene, shape::ShapeId};

mod whitted;

pub use whitted::WhittedIntegrator;

/// Turns a ray into the color seen along it
pub trait Integrator: Send + Sync {
    /// `depth` is the remaining budget of bounces; `source` is the object the ray leaves
    /// from, if any, and is never hit by it.
    fn ray_cast(&self, scene: &Scene, ray: Ray, depth: u32, source: Option<ShapeId>) -> Color;
}
