use std::path::PathBuf;

use glam::Vec3;
use image::Rgb;

use crate::{
    material::Material,
    math::transform::Transform,
    scene::Scene,
    shape::{ShapeId, Triangle, TriangleMesh},
};

pub trait ObjLoaderExt {
    /// Insert every model of an OBJ file as one triangle mesh object.
    ///
    /// Models that reference a material of the OBJ file get its Phong coefficients,
    /// the others use `default_material`.
    fn load_obj<T: Into<PathBuf>>(
        &mut self,
        mesh_path: T,
        transform: Transform,
        default_material: Material,
    ) -> Result<Vec<ShapeId>, tobj::LoadError>;
}

fn convert_material(material: &tobj::Material, default_material: Material) -> Material {
    Material {
        ambient: Rgb(material.ambient),
        diffuse: Rgb(material.diffuse),
        specular: Rgb(material.specular),
        shininess: material.shininess,
        ..default_material
    }
}

impl ObjLoaderExt for Scene {
    fn load_obj<T: Into<PathBuf>>(
        &mut self,
        mesh_path: T,
        transform: Transform,
        default_material: Material,
    ) -> Result<Vec<ShapeId>, tobj::LoadError> {
        let mesh_path = mesh_path.into();
        let options = tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        };
        let (models, materials) = tobj::load_obj(&mesh_path, &options)?;

        let materials: Vec<Material> = match materials {
            Ok(materials) => materials
                .iter()
                .map(|material| {
                    log::debug!(
                        "Found material {} with diffuse {:?}",
                        material.name,
                        material.diffuse
                    );
                    convert_material(material, default_material)
                })
                .collect(),
            Err(err) => {
                log::debug!("No usable material library for {}: {err}", mesh_path.display());
                Vec::new()
            }
        };

        let mut ids = Vec::with_capacity(models.len());
        for model in models {
            let mesh = model.mesh;
            let vertex = |index: u32| {
                let i = 3 * index as usize;
                transform.apply(Vec3::new(
                    mesh.positions[i],
                    mesh.positions[i + 1],
                    mesh.positions[i + 2],
                ))
            };

            let triangles: Vec<Triangle> = mesh
                .indices
                .chunks_exact(3)
                .map(|face| Triangle::new(vertex(face[0]), vertex(face[1]), vertex(face[2])))
                .collect();
            log::debug!("Loading model {}; {} faces", model.name, triangles.len());

            let material = mesh
                .material_id
                .and_then(|id| materials.get(id).copied())
                .unwrap_or(default_material);

            ids.push(self.insert_object(TriangleMesh::new(triangles), material));
        }

        Ok(ids)
    }
}
