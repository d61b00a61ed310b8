pub mod shapelist;

use crate::{hit::Hit, math::vec::Vec3, ray::Ray, shape::ShapeId};

pub use shapelist::ShapeList;

/// Shadow rays ignore hits closer than this to their origin
pub const SHADOW_MIN_DISTANCE: f32 = 1e-5;
/// Shadow rays ignore hits closer than this to the light
pub const SHADOW_LIGHT_MARGIN: f32 = 0.01;

/// A collection of objects that can be queried as a whole
pub trait Aggregate {
    /// Nearest hit along `ray`, ignoring the object `skip`
    fn closest_hit(&self, ray: Ray, skip: Option<ShapeId>) -> Hit;

    /// First object found between the origin of `shadow_ray` and `light_position`,
    /// ignoring the object `skip`
    fn occluder(&self, shadow_ray: Ray, light_position: Vec3, skip: Option<ShapeId>)
        -> Option<ShapeId>;
}
