use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the type of the field in nalgebra
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Round the value to `precision` decimal places.
    /// Negative zero collapses to zero so that it never reaches the serialized output.
    /// The value is returned as is when `10^precision` is not representable.
    fn round_to(self, precision: u32) -> Self {
        let Ok(exponent) = i32::try_from(precision) else {
            return self;
        };
        let scale = Self::from_f64(10f64.powi(exponent)).unwrap();
        if !scale.is_finite() {
            return self;
        }
        let rounded = (self * scale).round() / scale;
        if rounded == Self::zero() {
            Self::zero()
        } else {
            rounded
        }
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
