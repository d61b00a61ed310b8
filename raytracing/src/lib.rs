pub mod aggregate;
pub mod camera;
pub mod color;
pub mod hit;
pub mod integrators;
pub mod loader;
pub mod material;
pub mod math;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod utils;

pub use renderer::render;
