use crate::{
    hit::{Hit, Object},
    math::vec::Vec3,
    ray::Ray,
    shape::ShapeId,
    utils::counter::counter,
};

use super::{Aggregate, SHADOW_LIGHT_MARGIN, SHADOW_MIN_DISTANCE};

/// Objects scanned linearly, in insertion order
#[derive(Debug, Clone, Default)]
pub struct ShapeList(pub Vec<Object>);

impl ShapeList {
    fn candidates(&self, skip: Option<ShapeId>) -> impl Iterator<Item = &Object> {
        self.0.iter().filter(move |object| Some(object.id) != skip)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Aggregate for ShapeList {
    fn closest_hit(&self, ray: Ray, skip: Option<ShapeId>) -> Hit {
        counter!("Closest hit queries");

        let mut res = Hit::NoHit;
        let mut min_distance = f32::INFINITY;

        for object in self.candidates(skip) {
            if let Hit::Hit(record) = object.hit(ray) {
                let distance = ray.distance_to(record.hit_point);
                if distance < min_distance {
                    min_distance = distance;
                    res = Hit::Hit(record);
                }
            }
        }
        res
    }

    fn occluder(
        &self,
        shadow_ray: Ray,
        light_position: Vec3,
        skip: Option<ShapeId>,
    ) -> Option<ShapeId> {
        counter!("Shadow queries");

        let max_distance = shadow_ray.distance_to(light_position) - SHADOW_LIGHT_MARGIN;
        self.candidates(skip)
            .find(|object| match object.hit(shadow_ray) {
                Hit::Hit(record) => {
                    let distance = shadow_ray.distance_to(record.hit_point);
                    distance > SHADOW_MIN_DISTANCE && distance < max_distance
                }
                Hit::NoHit => false,
            })
            .map(|object| object.id)
    }
}
