use glam::Vec3;

use crate::{
    math::{float::FloatAsExt, vec::Vec3ProjectExt},
    ray::Ray,
};

use super::{IntersectionResult, RayIntersection, Shape};

/// Below this, a ray is considered parallel to the cylinder axis
const PARALLEL_EPSILON: f32 = 1e-8;

/// Lateral surface of a cylinder whose axis is vertical (+Y) and goes through `center`.
///
/// The surface is kept between the world heights `-half_height` and `half_height`,
/// whatever the height of `center`. There are no end caps.
#[derive(Debug, Clone)]
pub struct Cylinder {
    pub center: Vec3,
    pub radius: f32,
    pub half_height: f32,
}

impl Shape for Cylinder {
    fn intersect(&self, ray: Ray) -> IntersectionResult {
        let oc = (ray.origin - self.center).horizontal();
        let d = ray.direction.horizontal();

        let Some(a) = d.length_squared().into_non_zero(PARALLEL_EPSILON) else {
            return IntersectionResult::NoIntersection;
        };
        let b = 2.0 * oc.dot(d);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return IntersectionResult::NoIntersection;
        }

        let sqrt = f32::sqrt(discriminant);
        let t1 = (-b - sqrt) / (2.0 * a);
        let t2 = (-b + sqrt) / (2.0 * a);

        // Roots at the origin are discarded as well as the ones behind it
        let t = if t2 <= 0.0 {
            return IntersectionResult::NoIntersection;
        } else if t1 <= 0.0 {
            t2
        } else {
            t1
        };

        let pos = ray.at(t);
        // Only the nearest root is considered, the far wall is not tried when it is cut off
        if pos.y < -self.half_height || pos.y > self.half_height {
            return IntersectionResult::NoIntersection;
        }

        IntersectionResult::Intersection(RayIntersection {
            t,
            pos,
            normal: (pos - self.center).horizontal().normalize(),
        })
    }
}
