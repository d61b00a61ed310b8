use glam::Vec3;
use image::Rgb;

use crate::{
    color,
    material::Material,
    scene::{Light, Scene},
    shape::{Plane, Sphere},
};

/// Three spheres over a mirror-like floor, in front of a matte wall
pub struct MirrorSpheresScene;

impl From<MirrorSpheresScene> for Scene {
    fn from(_: MirrorSpheresScene) -> Self {
        let mut scene = Scene::new(
            Light {
                position: Vec3::new(0.0, 2.5, -3.0),
                color: color::WHITE,
            },
            0.2,
        );

        scene.insert_object(
            Plane {
                origin: Vec3::new(0.0, -1.0, 0.0),
                normal: Vec3::Y,
            },
            Material::matte(color::gray(0.4)).with_reflection(0.4),
        );
        scene.insert_object(
            Plane {
                origin: Vec3::new(0.0, 0.0, -12.0),
                normal: Vec3::Z,
            },
            Material::matte(Rgb([0.3, 0.35, 0.6])),
        );

        scene.insert_object(
            Sphere {
                center: Vec3::new(0.0, -0.2, -5.0),
                radius: 0.8,
            },
            Material::matte(color::gray(0.1))
                .with_specular(color::WHITE, 64.0)
                .with_reflection(0.8),
        );
        scene.insert_object(
            Sphere {
                center: Vec3::new(-1.6, -0.5, -4.0),
                radius: 0.5,
            },
            Material::matte(Rgb([0.8, 0.2, 0.2])).with_specular(color::gray(0.6), 32.0),
        );
        scene.insert_object(
            Sphere {
                center: Vec3::new(1.5, -0.4, -3.5),
                radius: 0.6,
            },
            Material::matte(Rgb([0.2, 0.7, 0.3]))
                .with_specular(color::gray(0.8), 16.0)
                .with_reflection(0.2),
        );

        scene
    }
}
