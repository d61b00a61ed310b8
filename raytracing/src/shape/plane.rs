use glam::Vec3;

use crate::ray::Ray;

use super::{IntersectionResult, RayIntersection, Shape};

/// A one-sided infinite plane going through `origin`.
///
/// Only rays travelling against `normal` see the plane. No lower bound is put on the
/// ray parameter: a ray starting behind the visible face still reports the crossing
/// point, callers filter on distance.
#[derive(Debug, Clone)]
pub struct Plane {
    pub origin: Vec3,
    /// Unit length
    pub normal: Vec3,
}

impl Shape for Plane {
    fn intersect(&self, ray: Ray) -> IntersectionResult {
        let denominator = self.normal.dot(ray.direction);
        if denominator >= 0.0 {
            return IntersectionResult::NoIntersection;
        }

        let t = (self.origin - ray.origin).dot(self.normal) / denominator;
        IntersectionResult::Intersection(RayIntersection {
            t,
            pos: ray.at(t),
            normal: self.normal,
        })
    }
}
