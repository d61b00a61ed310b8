pub trait FloatAsExt {
    /// Returns `Some(f)` if f is far enough from zero (far is given by eps) else returns None
    ///
    /// Returns None for NaN and Some(f) for +/- infty
    fn into_non_zero(self, eps: Self) -> Option<f32>;
}

impl FloatAsExt for f32 {
    fn into_non_zero(self, eps: Self) -> Option<f32> {
        (self.abs() > eps).then_some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::FloatAsExt;

    #[test]
    fn as_non_zero_test() {
        assert_eq!(0.0f32.into_non_zero(0.1), None);
        assert_eq!(1.0f32.into_non_zero(0.1), Some(1.0));
        assert_eq!((-0.01f32).into_non_zero(0.1), None);
        assert_eq!((-1.0f32).into_non_zero(0.1), Some(-1.0));
        assert_eq!(f32::NAN.into_non_zero(0.1), None);
        assert_eq!(f32::INFINITY.into_non_zero(0.1), Some(f32::INFINITY));
    }
}
