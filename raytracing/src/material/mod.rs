pub mod phong;

use crate::color::{self, Color};

/// Surface description of a scene object.
///
/// Coefficients are multiplied channel-wise with the light color. Nothing is clamped:
/// coefficients above 1.0 yield colors above 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f32,
    /// Weight of the mirror-reflected color added on top of the local shading
    pub reflection_strength: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: color::gray(0.5),
            diffuse: color::gray(0.5),
            specular: color::BLACK,
            shininess: 1.0,
            reflection_strength: 0.0,
        }
    }
}

impl Material {
    /// A plain material where ambient and diffuse share `albedo`
    pub fn matte(albedo: Color) -> Self {
        Self {
            ambient: albedo,
            diffuse: albedo,
            ..Default::default()
        }
    }

    pub fn with_specular(self, specular: Color, shininess: f32) -> Self {
        Self {
            specular,
            shininess,
            ..self
        }
    }

    pub fn with_reflection(self, reflection_strength: f32) -> Self {
        Self {
            reflection_strength,
            ..self
        }
    }
}
