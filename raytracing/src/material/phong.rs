//! Phong reflectance against the single point light of a [Scene].

use crate::{
    color::{self, Color, MixMode},
    hit::HitRecord,
    math::vec::{ReflVecExt, RgbAsVec3Ext, Vec3AsRgbExt},
    ray::Ray,
    scene::Scene,
};

/// Light received by a point the light source cannot see.
pub fn ambient_only(scene: &Scene, record: &HitRecord) -> Color {
    ambient(scene, record)
}

/// Ambient, diffuse and specular terms for a lit point.
///
/// `ray` is the incident ray that produced `record`.
pub fn full(scene: &Scene, ray: Ray, record: &HitRecord) -> Color {
    let light_color = scene.light.color.vec();
    let material = &record.material;

    let light_dir = (scene.light.position - record.hit_point).normalize();
    let normal = record.normal;

    let diffuse = normal.dot(light_dir).max(0.0) * material.diffuse.vec() * light_color;

    let view_dir = -ray.direction;
    let reflected = (-light_dir).reflect(normal);
    let specular = reflected.dot(view_dir).max(0.0).powf(material.shininess)
        * material.specular.vec()
        * light_color;

    (ambient(scene, record).vec() + diffuse + specular).rgb()
}

fn ambient(scene: &Scene, record: &HitRecord) -> Color {
    let received = color::mix(MixMode::Mul, scene.light.color, record.material.ambient);
    color::scale(scene.ambient_factor, received)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use image::Rgb;

    use super::{ambient_only, full};
    use crate::{
        color,
        hit::HitRecord,
        material::Material,
        math::vec::RgbAsVec3Ext,
        ray::Ray,
        scene::{Light, Scene},
        shape::ShapeId,
    };

    fn scene() -> Scene {
        Scene::new(
            Light {
                position: Vec3::new(0.0, 10.0, 0.0),
                color: color::WHITE,
            },
            0.25,
        )
    }

    fn record(material: Material) -> HitRecord {
        HitRecord {
            hit_point: Vec3::ZERO,
            normal: Vec3::Y,
            t: 1.0,
            material,
            shape: ShapeId(0),
        }
    }

    #[test]
    fn ambient_term() {
        let material = Material::matte(Rgb([1.0, 0.5, 0.0]));
        let c = ambient_only(&scene(), &record(material));
        assert!(c.vec().abs_diff_eq(Vec3::new(0.25, 0.125, 0.0), 1e-6));
    }

    #[test]
    fn ambient_is_tinted_by_the_light() {
        let mut scene = scene();
        scene.light.color = Rgb([2.0, 1.0, 0.5]);
        let material = Material::matte(Rgb([0.5, 1.0, 0.0]));
        let c = ambient_only(&scene, &record(material));
        assert!(c.vec().abs_diff_eq(Vec3::new(0.25, 0.25, 0.0), 1e-6));
    }

    #[test]
    fn light_straight_above_and_mirror_view() {
        let material = Material::matte(color::gray(0.5)).with_specular(color::WHITE, 8.0);
        // looking straight down at a point lit from straight above
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let c = full(&scene(), ray, &record(material));
        // ambient 0.125 + diffuse 0.5 + specular 1.0
        assert!(c.vec().abs_diff_eq(Vec3::splat(1.625), 1e-5));
    }

    #[test]
    fn light_behind_surface_is_ambient_only() {
        let mut scene = scene();
        scene.light.position = Vec3::new(0.0, -10.0, 0.0);
        let material = Material::matte(color::WHITE).with_specular(color::WHITE, 2.0);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let record = record(material);
        assert_eq!(full(&scene, ray, &record), ambient_only(&scene, &record));
    }
}
