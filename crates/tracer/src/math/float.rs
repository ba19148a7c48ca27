use glam::Vec3;

pub trait FloatAsExt: Sized {
    /// Replaces NaN by 0, infinities are kept so a later clamp saturates them
    fn nan_to_zero(self) -> Self;
}

impl FloatAsExt for f32 {
    fn nan_to_zero(self) -> Self {
        if self.is_nan() {
            0.0
        } else {
            self
        }
    }
}

impl FloatAsExt for Vec3 {
    fn nan_to_zero(self) -> Self {
        Vec3::new(
            self.x.nan_to_zero(),
            self.y.nan_to_zero(),
            self.z.nan_to_zero(),
        )
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::FloatAsExt;

    #[test]
    fn nan_to_zero_test() {
        assert_eq!(1.5f32.nan_to_zero(), 1.5);
        assert_eq!(f32::NAN.nan_to_zero(), 0.0);
        assert_eq!(f32::INFINITY.nan_to_zero(), f32::INFINITY);
        assert_eq!(f32::NEG_INFINITY.nan_to_zero(), f32::NEG_INFINITY);
    }

    #[test]
    fn vec_nan_to_zero_test() {
        assert_eq!(
            Vec3::new(f32::NAN, 0.5, f32::NEG_INFINITY).nan_to_zero(),
            Vec3::new(0.0, 0.5, f32::NEG_INFINITY)
        );
        assert_eq!(Vec3::ONE.nan_to_zero(), Vec3::ONE);
    }
}
