pub mod examples;

use glam::Vec3;

use crate::{
    aggregate::ShapeList,
    color::Color,
    hit::Object,
    material::Material,
    shape::{Geometry, ShapeId},
};

/// A point light
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

/// Everything a render reads: a single point light, the ambient factor and the objects.
///
/// Scenes are built up front and never change while they are rendered.
#[derive(Debug, Clone)]
pub struct Scene {
    pub light: Light,
    pub ambient_factor: f32,
    pub objects: ShapeList,
}

impl Scene {
    pub fn new(light: Light, ambient_factor: f32) -> Self {
        Self {
            light,
            ambient_factor,
            objects: ShapeList::default(),
        }
    }

    /// Insert an object in the scene and returns its id.
    ///
    /// Ids are handed out in insertion order, so they are unique within the scene.
    pub fn insert_object<G: Into<Geometry>>(&mut self, geometry: G, material: Material) -> ShapeId {
        let id = ShapeId(self.objects.len());
        let geometry = geometry.into();
        log::debug!("Inserting object {id:?}: {}", geometry_kind(&geometry));
        self.objects.0.push(Object {
            id,
            material,
            geometry,
        });
        id
    }

    pub fn object(&self, id: ShapeId) -> Option<&Object> {
        self.objects.0.get(id.0)
    }
}

fn geometry_kind(geometry: &Geometry) -> String {
    match geometry {
        Geometry::Sphere(_) => "sphere".to_owned(),
        Geometry::Cylinder(_) => "cylinder".to_owned(),
        Geometry::Plane(_) => "plane".to_owned(),
        Geometry::Mesh(mesh) => format!("mesh of {} triangles", mesh.triangles.len()),
    }
}
