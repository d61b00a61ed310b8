//! The two stock scenes. Both are meant to be seen from the origin, looking down -Z.

mod mirror_spheres;
mod mixed_shapes;

pub use mirror_spheres::MirrorSpheresScene;
pub use mixed_shapes::MixedShapesScene;
