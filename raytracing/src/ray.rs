use crate::math::vec::Vec3;

/// A half-line starting at `origin`.
///
/// `direction` is always unit length, every intersection routine relies on it.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }

    /// Euclidean distance between the origin of the ray and `p`
    pub fn distance_to(&self, p: Vec3) -> f32 {
        self.origin.distance(p)
    }
}
