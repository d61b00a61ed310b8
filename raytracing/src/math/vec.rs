pub use glam::Vec3;
use image::Rgb;

pub trait RgbAsVec3Ext {
    fn vec(&self) -> Vec3;
}

impl RgbAsVec3Ext for Rgb<f32> {
    fn vec(&self) -> Vec3 {
        Vec3::from_array(self.0)
    }
}

pub trait Vec3AsRgbExt {
    fn rgb(&self) -> Rgb<f32>;
}

impl Vec3AsRgbExt for Vec3 {
    fn rgb(&self) -> Rgb<f32> {
        Rgb(self.to_array())
    }
}

pub trait ReflVecExt {
    /// Mirror `self` about the plane orthogonal to `normal`
    fn reflect(self, normal: Vec3) -> Vec3;
}

impl ReflVecExt for Vec3 {
    fn reflect(self, normal: Vec3) -> Vec3 {
        self - (2.0 * self.dot(normal) * normal)
    }
}

pub trait Vec3ProjectExt {
    /// Drop the vertical component of `self`
    fn horizontal(self) -> Vec3;
}

impl Vec3ProjectExt for Vec3 {
    fn horizontal(self) -> Vec3 {
        Vec3::new(self.x, 0.0, self.z)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use image::Rgb;

    use super::{ReflVecExt, RgbAsVec3Ext, Vec3AsRgbExt, Vec3ProjectExt};

    #[test]
    fn reflect_about_normal() {
        let d = Vec3::new(1.0, -1.0, 0.0);
        let r = d.reflect(Vec3::Y);
        assert!(r.abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn rgb_vec_conversion() {
        let c = Rgb([0.1, 0.2, 0.3]);
        assert_eq!(c.vec().rgb(), c);
    }

    #[test]
    fn horizontal_drops_y() {
        assert_eq!(Vec3::new(1.0, 5.0, -2.0).horizontal(), Vec3::new(1.0, 0.0, -2.0));
    }
}
