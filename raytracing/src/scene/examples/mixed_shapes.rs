use glam::Vec3;
use image::Rgb;

use crate::{
    color,
    material::Material,
    scene::{Light, Scene},
    shape::{Cylinder, Plane, Sphere, Triangle, TriangleMesh},
};

/// A room holding a pyramid, a column and a mirror ball
pub struct MixedShapesScene;

/// Square based pyramid standing on its base, faces wound outwards
fn pyramid(base_center: Vec3, half_width: f32, height: f32) -> TriangleMesh {
    let apex = base_center + height * Vec3::Y;
    let corner = |x: f32, z: f32| base_center + Vec3::new(x * half_width, 0.0, z * half_width);
    let (front_left, front_right) = (corner(-1.0, 1.0), corner(1.0, 1.0));
    let (back_left, back_right) = (corner(-1.0, -1.0), corner(1.0, -1.0));

    TriangleMesh::new(vec![
        Triangle::new(front_left, front_right, apex),
        Triangle::new(front_right, back_right, apex),
        Triangle::new(back_right, back_left, apex),
        Triangle::new(back_left, front_left, apex),
    ])
}

impl From<MixedShapesScene> for Scene {
    fn from(_: MixedShapesScene) -> Self {
        let mut scene = Scene::new(
            Light {
                position: Vec3::new(1.0, 3.0, -1.5),
                color: color::WHITE,
            },
            0.15,
        );

        // Walls, all facing the inside of the room
        let walls = [
            (Vec3::new(0.0, -1.0, 0.0), Vec3::Y, color::gray(0.6)),
            (Vec3::new(0.0, 4.0, 0.0), Vec3::NEG_Y, color::gray(0.8)),
            (Vec3::new(0.0, 0.0, -9.0), Vec3::Z, Rgb([0.6, 0.6, 0.5])),
            (Vec3::new(-4.0, 0.0, 0.0), Vec3::X, Rgb([0.7, 0.15, 0.15])),
            (Vec3::new(4.0, 0.0, 0.0), Vec3::NEG_X, Rgb([0.15, 0.5, 0.15])),
        ];
        for (origin, normal, albedo) in walls {
            scene.insert_object(Plane { origin, normal }, Material::matte(albedo));
        }

        scene.insert_object(
            pyramid(Vec3::new(-1.5, -1.0, -5.0), 1.0, 1.6),
            Material::matte(Rgb([0.9, 0.7, 0.2])).with_specular(color::gray(0.5), 16.0),
        );
        scene.insert_object(
            Cylinder {
                center: Vec3::new(1.6, 0.0, -6.0),
                radius: 0.5,
                half_height: 1.0,
            },
            Material::matte(Rgb([0.2, 0.3, 0.8])).with_specular(color::gray(0.7), 32.0),
        );
        scene.insert_object(
            Sphere {
                center: Vec3::new(0.3, -0.4, -3.5),
                radius: 0.6,
            },
            Material::matte(color::gray(0.05))
                .with_specular(color::WHITE, 128.0)
                .with_reflection(0.9),
        );

        scene
    }
}
