use glam::Vec3;

use crate::{math::float::FloatAsExt, ray::Ray};

use super::{IntersectionResult, RayIntersection, Shape};

/// Tolerance of the Möller-Trumbore test, both on the determinant and on `t`
const EPSILON: f32 = 1e-7;

/// A single triangle. Its front face is given by the counter-clockwise winding of `vertices`
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    fn edges(&self) -> (Vec3, Vec3) {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0, v2 - v0)
    }

    /// Unit normal, `cross(v1 - v0, v2 - v0)`
    pub fn normal(&self) -> Vec3 {
        let (e1, e2) = self.edges();
        e1.cross(e2).normalize()
    }

    pub fn centroid(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        (v0 + v1 + v2) / 3.0
    }
}

/// A private type that stores the result of the Möller-Trumbore algorithm
#[derive(Debug)]
enum MollerTrumboreResult {
    Result { u: f32, v: f32, t: f32 },
    NoResult,
}

impl MollerTrumboreResult {
    fn moller_trumbore(triangle: &Triangle, ray: Ray) -> Self {
        let (e1, e2) = triangle.edges();

        let h = ray.direction.cross(e2);
        // Ray (nearly) parallel to the triangle plane
        let Some(det) = e1.dot(h).into_non_zero(EPSILON) else {
            return Self::NoResult;
        };
        let f = 1.0 / det;

        let s = ray.origin - triangle.vertices[0];
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return Self::NoResult;
        }

        let q = s.cross(e1);
        let v = f * ray.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return Self::NoResult;
        }

        let t = f * e2.dot(q);
        if t <= EPSILON {
            // The line crosses the triangle, the ray does not
            return Self::NoResult;
        }

        Self::Result { u, v, t }
    }
}

impl Shape for Triangle {
    fn intersect(&self, ray: Ray) -> IntersectionResult {
        match MollerTrumboreResult::moller_trumbore(self, ray) {
            MollerTrumboreResult::Result { t, .. } => {
                IntersectionResult::Intersection(RayIntersection {
                    t,
                    pos: ray.at(t),
                    normal: self.normal(),
                })
            }
            MollerTrumboreResult::NoResult => IntersectionResult::NoIntersection,
        }
    }
}

/// A bag of independent triangles intersected as one shape
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub triangles: Vec<Triangle>,
}

impl TriangleMesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Build a mesh from a flat vertex list, three consecutive vertices per triangle.
    ///
    /// Trailing vertices that do not form a full triangle are ignored.
    pub fn from_vertices(vertices: &[Vec3]) -> Self {
        let triangles = vertices
            .chunks_exact(3)
            .map(|v| Triangle::new(v[0], v[1], v[2]))
            .collect();
        Self { triangles }
    }
}

impl Shape for TriangleMesh {
    fn intersect(&self, ray: Ray) -> IntersectionResult {
        let mut closest = IntersectionResult::NoIntersection;
        let mut min_distance = f32::INFINITY;

        for triangle in &self.triangles {
            if let IntersectionResult::Intersection(hit) = triangle.intersect(ray) {
                let distance = ray.distance_to(hit.pos);
                // Strict comparison: first triangle wins ties
                if distance < min_distance {
                    min_distance = distance;
                    closest = IntersectionResult::Intersection(hit);
                }
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{MollerTrumboreResult, Triangle, TriangleMesh};
    use crate::{
        ray::Ray,
        shape::{IntersectionResult, Shape},
    };

    fn triangle() -> Triangle {
        Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y)
    }

    #[test]
    fn centroid_along_normal_hits() {
        let triangle = triangle();
        let normal = triangle.normal();
        assert!(normal.abs_diff_eq(Vec3::Z, 1e-6));

        let origin = triangle.centroid() + 2.0 * normal;
        let ray = Ray::new(origin, -normal);
        match triangle.intersect(ray) {
            IntersectionResult::Intersection(h) => {
                assert!(h.pos.abs_diff_eq(triangle.centroid(), 1e-5));
                assert!((h.t - 2.0).abs() < 1e-5);
                assert_eq!(h.normal, normal);
            }
            hit => panic!("{hit:?}"),
        }
    }

    #[test]
    fn barycentric_out_of_range_is_rejected() {
        let triangle = triangle();
        // u < 0
        let ray = Ray::new(Vec3::new(-0.1, 0.5, 1.0), Vec3::NEG_Z);
        assert!(!triangle.intersect(ray).is_hit());
        // u > 1
        let ray = Ray::new(Vec3::new(1.1, 0.0, 1.0), Vec3::NEG_Z);
        assert!(!triangle.intersect(ray).is_hit());
        // v < 0
        let ray = Ray::new(Vec3::new(0.5, -0.1, 1.0), Vec3::NEG_Z);
        assert!(!triangle.intersect(ray).is_hit());
        // u + v > 1
        let ray = Ray::new(Vec3::new(0.6, 0.6, 1.0), Vec3::NEG_Z);
        assert!(!triangle.intersect(ray).is_hit());
    }

    #[test]
    fn barycentric_coordinates() {
        let ray = Ray::new(Vec3::new(0.25, 0.5, 1.0), Vec3::NEG_Z);
        match MollerTrumboreResult::moller_trumbore(&triangle(), ray) {
            MollerTrumboreResult::Result { u, v, t } => {
                assert!((u - 0.25).abs() < 1e-6);
                assert!((v - 0.5).abs() < 1e-6);
                assert!((t - 1.0).abs() < 1e-6);
            }
            res => panic!("{res:?}"),
        }
    }

    #[test]
    fn parallel_ray_is_rejected() {
        let ray = Ray::new(Vec3::new(-1.0, 0.2, 0.0), Vec3::X);
        assert!(!triangle().intersect(ray).is_hit());
    }

    #[test]
    fn triangle_behind_origin_is_rejected() {
        let ray = Ray::new(Vec3::new(0.2, 0.2, -1.0), Vec3::NEG_Z);
        assert!(!triangle().intersect(ray).is_hit());
    }

    #[test]
    fn mesh_keeps_nearest_triangle() {
        let far = Triangle::new(
            Vec3::new(-1.0, -1.0, -5.0),
            Vec3::new(1.0, -1.0, -5.0),
            Vec3::new(0.0, 1.0, -5.0),
        );
        let near = Triangle::new(
            Vec3::new(-1.0, -1.0, -2.0),
            Vec3::new(1.0, -1.0, -2.0),
            Vec3::new(0.0, 1.0, -2.0),
        );
        let mesh = TriangleMesh::new(vec![far, near]);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        match mesh.intersect(ray) {
            IntersectionResult::Intersection(h) => assert!((h.pos.z + 2.0).abs() < 1e-5),
            hit => panic!("{hit:?}"),
        }
    }

    #[test]
    fn mesh_from_vertices() {
        let vertices = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z, Vec3::ONE];
        let mesh = TriangleMesh::from_vertices(&vertices);
        assert_eq!(mesh.triangles.len(), 1);

        assert!(!TriangleMesh::default()
            .intersect(Ray::new(Vec3::ZERO, Vec3::X))
            .is_hit());
    }
}
