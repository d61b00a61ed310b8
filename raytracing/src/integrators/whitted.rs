use crate::{
    aggregate::Aggregate,
    color::{self, Color, MixMode},
    hit::Hit,
    material::phong,
    math::vec::ReflVecExt,
    ray::Ray,
    scene::Scene,
    shape::ShapeId,
};

use super::Integrator;

/// Phong shading with hard shadows and recursive mirror reflections
#[derive(Debug, Default, Clone, Copy)]
pub struct WhittedIntegrator;

impl Integrator for WhittedIntegrator {
    fn ray_cast(&self, scene: &Scene, ray: Ray, depth: u32, source: Option<ShapeId>) -> Color {
        let Hit::Hit(record) = scene.objects.closest_hit(ray, source) else {
            return color::BLACK;
        };

        // Out of budget: a surface reached this late contributes nothing, not even ambient
        if depth < 1 {
            return color::BLACK;
        }

        let reflected_ray = Ray::new(record.hit_point, ray.direction.reflect(record.normal));
        let reflected = self.ray_cast(scene, reflected_ray, depth - 1, Some(record.shape));
        let reflection = color::scale(record.material.reflection_strength, reflected);

        let light_position = scene.light.position;
        let shadow_ray = Ray::new(record.hit_point, light_position - record.hit_point);
        let local = match scene
            .objects
            .occluder(shadow_ray, light_position, Some(record.shape))
        {
            Some(occluder) => {
                log::trace!("{:?} shadowed by {occluder:?}", record.shape);
                phong::ambient_only(scene, &record)
            }
            None => phong::full(scene, ray, &record),
        };

        color::mix(MixMode::Add, local, reflection)
    }
}
