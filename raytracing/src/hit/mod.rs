use crate::{
    material::Material,
    math::vec::Vec3,
    ray::Ray,
    shape::{Geometry, IntersectionResult, RayIntersection, Shape, ShapeId},
};

/// Everything the shading needs to know about the point a ray hit
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    pub hit_point: Vec3,
    pub normal: Vec3,
    pub t: f32,
    pub material: Material,
    pub shape: ShapeId,
}

#[derive(Debug, Clone, Copy)]
pub enum Hit {
    Hit(HitRecord),
    NoHit,
}

impl Hit {
    pub fn is_hit(&self) -> bool {
        matches!(self, Hit::Hit(_))
    }
}

/// A piece of geometry placed in a scene, with its identity and material
#[derive(Debug, Clone)]
pub struct Object {
    pub id: ShapeId,
    pub material: Material,
    pub geometry: Geometry,
}

impl Object {
    pub fn hit(&self, ray: Ray) -> Hit {
        match self.geometry.intersect(ray) {
            IntersectionResult::Intersection(RayIntersection { t, pos, normal }) => {
                Hit::Hit(HitRecord {
                    hit_point: pos,
                    normal,
                    t,
                    material: self.material,
                    shape: self.id,
                })
            }
            IntersectionResult::NoIntersection => Hit::NoHit,
        }
    }
}
