use nalgebra::{Point2, Rotation2};

use super::FloatingPoint;

/// Convert an angle in degrees to radians
pub fn radians<T: FloatingPoint>(degrees: T) -> T {
    degrees * T::pi() / T::from_f64(180.).unwrap()
}

/// Rotate a point around the origin by `angle` radians
pub fn rotate<T: FloatingPoint>(point: &Point2<T>, angle: T) -> Point2<T> {
    Rotation2::new(angle) * point
}

/// Reflect `point` about `center`
/// Used to derive the implied control point of smooth curve commands
pub fn reflect<T: FloatingPoint>(point: &Point2<T>, center: &Point2<T>) -> Point2<T> {
    center + (center - point)
}
