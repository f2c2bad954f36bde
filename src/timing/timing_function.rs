use std::{fmt, str::FromStr};

use nalgebra::Point2;

use crate::{error::PathError, misc::FloatingPoint, timing::Easing};

/// Function driving the progress of a point between its two positions.
///
/// A scalar function maps the relative time to a progress used to blend both positions linearly,
/// a vector function computes the blended position itself.
pub enum TimingFunction {
    Scalar(Box<dyn Fn(f64) -> f64>),
    Vector(Box<dyn Fn(f64, [Point2<f64>; 2]) -> Point2<f64>>),
}

impl TimingFunction {
    pub fn scalar(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::Scalar(Box::new(f))
    }

    pub fn vector(f: impl Fn(f64, [Point2<f64>; 2]) -> Point2<f64> + 'static) -> Self {
        Self::Vector(Box::new(f))
    }

    /// Position between `from` and `to` at the relative time `t`.
    /// Linear blends are rounded to `precision` decimals.
    ///
    /// # Example
    /// ```
    /// use pathmorph::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let linear = TimingFunction::from(Easing::Linear);
    /// let p = linear.blend(0.25, &Point2::new(0., 0.), &Point2::new(1., 2.), 2);
    /// assert_eq!(p, Point2::new(0.25, 0.5));
    /// ```
    pub fn blend(
        &self,
        t: f64,
        from: &Point2<f64>,
        to: &Point2<f64>,
        precision: u32,
    ) -> Point2<f64> {
        match self {
            TimingFunction::Scalar(f) => {
                let p = from + (to - from) * f(t);
                Point2::new(p.x.round_to(precision), p.y.round_to(precision))
            }
            TimingFunction::Vector(f) => f(t, [*from, *to]),
        }
    }
}

impl Default for TimingFunction {
    fn default() -> Self {
        Easing::default().into()
    }
}

impl From<Easing> for TimingFunction {
    fn from(easing: Easing) -> Self {
        Self::scalar(move |t| easing.apply(t))
    }
}

impl FromStr for TimingFunction {
    type Err = PathError;

    /// Timing function of a named easing
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Easing>().map(Self::from)
    }
}

impl fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingFunction::Scalar(_) => f.write_str("TimingFunction::Scalar"),
            TimingFunction::Vector(_) => f.write_str("TimingFunction::Vector"),
        }
    }
}
