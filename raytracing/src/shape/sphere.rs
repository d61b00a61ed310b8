use glam::Vec3;

use crate::ray::Ray;

use super::{IntersectionResult, RayIntersection, Shape};

/// A simple sphere shape. Normals point outwards.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Shape for Sphere {
    fn intersect(&self, ray: Ray) -> IntersectionResult {
        // `ray.direction` is unit length, so a == 1
        let oc = ray.origin - self.center;
        let b_half = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant_quarter = b_half * b_half - c;
        if discriminant_quarter < 0.0 {
            return IntersectionResult::NoIntersection;
        }

        let sqrt = f32::sqrt(discriminant_quarter);
        let t1 = -b_half - sqrt;
        let t2 = -b_half + sqrt;

        // t1 <= t2: take the nearest root in front of the origin
        let t = if t2 < 0.0 {
            return IntersectionResult::NoIntersection;
        } else if t1 < 0.0 {
            t2
        } else {
            t1
        };

        let pos = ray.at(t);
        IntersectionResult::Intersection(RayIntersection {
            t,
            pos,
            normal: (pos - self.center).normalize(),
        })
    }
}
