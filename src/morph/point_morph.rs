use crate::{
    definition::PathPoint,
    error::PathError,
    morph::{Interpolation, Morph},
};

impl Morph for PathPoint {
    type Output = (PathPoint, bool);

    /// Morphs a point toward its target.
    /// # Example
    ///
    /// ```
    /// use pathmorph::prelude::*;
    ///
    /// let from = PathPoint::new(0., 0.);
    /// let to = PathPoint::new(4., 2.).with_schedule(Schedule::new(100., 200.));
    /// let timing = TimingFunction::from(Easing::Linear);
    ///
    /// // the schedule of the target overrides the default window
    /// let step = Interpolation::new(150., &timing, Schedule::new(0., 1000.));
    /// let (morphed, completed) = from.morph(&to, &step).unwrap();
    /// assert_eq!(morphed.position, nalgebra::Point2::new(1., 0.5));
    /// assert!(!completed);
    /// ```
    fn morph(&self, target: &Self, step: &Interpolation<'_>) -> Result<Self::Output, PathError> {
        let window = target.schedule.unwrap_or(step.window);
        let relative = step.elapsed - window.delay;

        let point = if relative >= window.duration {
            target.clone()
        } else if relative <= 0. {
            self.clone()
        } else {
            PathPoint {
                position: step.timing.blend(
                    relative / window.duration,
                    &self.position,
                    &target.position,
                    step.precision,
                ),
                ..target.clone()
            }
        };

        Ok((point, relative >= window.duration))
    }
}
