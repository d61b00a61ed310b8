use image::Rgb;

use crate::math::vec::{RgbAsVec3Ext, Vec3, Vec3AsRgbExt};

/// Linear, unclamped color. Channels may exceed 1.0.
pub type Color = Rgb<f32>;

pub const WHITE: Color = Rgb([1.0, 1.0, 1.0]);
pub const BLACK: Color = Rgb([0.0, 0.0, 0.0]);

pub enum MixMode {
    Add,
    Mul,
}

pub fn mix(mode: MixMode, color1: Color, color2: Color) -> Color {
    let vc1 = color1.vec();
    let vc2 = color2.vec();
    let vc_out = match mode {
        MixMode::Add => vc1 + vc2,
        MixMode::Mul => vc1 * vc2,
    };

    vc_out.rgb()
}

pub fn scale(t: f32, color: Color) -> Color {
    (t * color.vec()).rgb()
}

pub fn clamp(color: Color) -> Color {
    color.vec().clamp(Vec3::ZERO, Vec3::ONE).rgb()
}

pub fn gray(c: f32) -> Color {
    Rgb([c, c, c])
}

pub fn is_finite(color: Color) -> bool {
    color.vec().is_finite()
}

/// Clamp to [0, 1], gamma encode and quantize to 8 bits
pub fn to_ldr(color: Color, gamma: f32) -> Rgb<u8> {
    Rgb(clamp(color)
        .0
        .map(|x| (255.0 * x.powf(1.0 / gamma)).round() as u8))
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::*;

    #[test]
    fn mix_modes() {
        let a = Rgb([0.5, 1.0, 2.0]);
        let b = gray(2.0);
        assert_eq!(mix(MixMode::Add, a, b), Rgb([2.5, 3.0, 4.0]));
        assert_eq!(mix(MixMode::Mul, a, b), Rgb([1.0, 2.0, 4.0]));
    }

    #[test]
    fn ldr_is_clamped() {
        assert_eq!(to_ldr(Rgb([2.0, -1.0, 1.0]), 2.2), Rgb([255, 0, 255]));
        assert_eq!(to_ldr(BLACK, 2.2), Rgb([0, 0, 0]));
    }
}
