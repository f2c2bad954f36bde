pub mod definition_morph;
pub mod morph_set;
pub mod point_morph;
pub use morph_set::*;

#[cfg(test)]
mod tests;

use crate::{
    definition::{Definition, Schedule},
    error::PathError,
    normalize::DEFAULT_PRECISION,
    timing::TimingFunction,
};

/// Parameters of one interpolation step
#[derive(Debug)]
pub struct Interpolation<'a> {
    /// Time elapsed since the start of the transition, in milliseconds
    pub elapsed: f64,
    pub timing: &'a TimingFunction,
    /// Timing window of points which carry no schedule
    pub window: Schedule,
    /// Number of decimals of blended coordinates
    pub precision: u32,
}

impl<'a> Interpolation<'a> {
    pub fn new(elapsed: f64, timing: &'a TimingFunction, window: Schedule) -> Self {
        Self {
            elapsed,
            timing,
            window,
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }
}

/// A unified trait for morphing points and definitions toward a target of the same shape.
///
/// Each point moves during its own timing window `(delay, duration)`, taken from the target point's
/// schedule, or from the default window of the step when the target point has none:
/// - before its delay, the point stays at its source position
/// - during its window, it is blended by the timing function applied to the relative time
/// - afterwards, it is exactly the target point
///
/// # Implementations
///
/// This trait is implemented for:
/// - `PathPoint` - Morphs a single point
/// - `Definition` - Morphs the anchor and every cubic point of a definition
pub trait Morph {
    /// The output type after morphing, paired with whether every point reached its target
    type Output;

    /// Morphs `self` toward `target` at the elapsed time of `step`.
    ///
    /// # Returns
    ///
    /// The morphed entity, or an error if both entities do not share the same shape
    fn morph(&self, target: &Self, step: &Interpolation<'_>) -> Result<Self::Output, PathError>;
}

/// Interpolate two definitions of the same length at `elapsed` milliseconds,
/// rounding blended coordinates with the default precision.
///
/// Returns the intermediate definition and whether the transition is completed.
///
/// # Example
/// ```
/// use pathmorph::prelude::*;
///
/// let from: Definition = "M0 0L10 0L10 10z".parse().unwrap();
/// let to: Definition = "M0 0L20 0L20 20z".parse().unwrap();
/// let timing = TimingFunction::from(Easing::Linear);
/// let window = Schedule::new(0., 100.);
///
/// let (start, completed) = interpolate(&from, &to, 0., &timing, window).unwrap();
/// assert_eq!(start, from);
/// assert!(!completed);
///
/// let (half, _) = interpolate(&from, &to, 50., &timing, window).unwrap();
/// assert_eq!(half.to_string(), "M0 0C0 0 15 0 15 0 15 0 15 15 15 15 15 15 0 0 0 0z");
///
/// let (end, completed) = interpolate(&from, &to, 100., &timing, window).unwrap();
/// assert_eq!(end, to);
/// assert!(completed);
/// ```
pub fn interpolate(
    from: &Definition,
    to: &Definition,
    elapsed: f64,
    timing: &TimingFunction,
    window: Schedule,
) -> Result<(Definition, bool), PathError> {
    from.morph(to, &Interpolation::new(elapsed, timing, window))
}
