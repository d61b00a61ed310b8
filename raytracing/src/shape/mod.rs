//! Contains the geometry that is meant to be rendered:
//! - Spheres
//! - Cylinders, bounded along the vertical axis
//! - One-sided planes
//! - Triangle meshes
//!
//! Every kind of geometry implements [Shape]. Scenes store them in the closed [Geometry]
//! enum, which dispatches to the variant.

pub mod cylinder;
pub mod plane;
pub mod sphere;
pub mod triangle;

use glam::Vec3;

use crate::ray::Ray;

pub use cylinder::Cylinder;
pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::{Triangle, TriangleMesh};

/// Identity of an object, unique within one scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub usize);

/// An abstracted shape to be rendered by raytracing.
pub trait Shape {
    /// Check whether `ray` intersects the shape, if so gives the nearest accepted point
    /// and the surface normal there
    fn intersect(&self, ray: Ray) -> IntersectionResult;
}

/// Holds the time of a collision between a ray and a shape and the local geometry there
#[derive(Debug, Clone, Copy)]
pub struct RayIntersection {
    pub t: f32,
    pub pos: Vec3,
    /// Unit length
    pub normal: Vec3,
}

/// A `Result`-like type that takes care of intersection data.
#[derive(Debug, Clone, Copy)]
pub enum IntersectionResult {
    Intersection(RayIntersection),
    NoIntersection,
}

impl IntersectionResult {
    pub fn is_hit(&self) -> bool {
        matches!(self, IntersectionResult::Intersection(_))
    }
}

#[derive(Debug, Clone)]
pub enum Geometry {
    Sphere(Sphere),
    Cylinder(Cylinder),
    Plane(Plane),
    Mesh(TriangleMesh),
}

impl Shape for Geometry {
    fn intersect(&self, ray: Ray) -> IntersectionResult {
        match self {
            Geometry::Sphere(sphere) => sphere.intersect(ray),
            Geometry::Cylinder(cylinder) => cylinder.intersect(ray),
            Geometry::Plane(plane) => plane.intersect(ray),
            Geometry::Mesh(mesh) => mesh.intersect(ray),
        }
    }
}

impl From<Sphere> for Geometry {
    fn from(sphere: Sphere) -> Self {
        Geometry::Sphere(sphere)
    }
}

impl From<Cylinder> for Geometry {
    fn from(cylinder: Cylinder) -> Self {
        Geometry::Cylinder(cylinder)
    }
}

impl From<Plane> for Geometry {
    fn from(plane: Plane) -> Self {
        Geometry::Plane(plane)
    }
}

impl From<TriangleMesh> for Geometry {
    fn from(mesh: TriangleMesh) -> Self {
        Geometry::Mesh(mesh)
    }
}
