use std::collections::HashMap;

use itertools::Itertools;
use nalgebra::Point2;
use rand::{rngs::ThreadRng, Rng};

use crate::{
    definition::{Definition, Schedule},
    schedule::MorphOptions,
};

/// Coordinates quantized to the scheduling precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleKey {
    x: i64,
    y: i64,
}

impl ScheduleKey {
    pub fn new(position: &Point2<f64>, precision: u32) -> Self {
        let scale = 10f64.powi(precision as i32);
        Self {
            x: (position.x * scale).round() as i64,
            y: (position.y * scale).round() as i64,
        }
    }
}

/// Assigns timing windows to the points of definitions.
///
/// Windows are memoized by coordinates, so that points sharing a position move together
/// within a definition and across the definitions of a batch.
#[derive(Debug, Clone)]
pub struct Scheduler<R = ThreadRng> {
    options: MorphOptions,
    rng: R,
    memo: HashMap<ScheduleKey, Schedule>,
}

impl Scheduler<ThreadRng> {
    pub fn new(options: MorphOptions) -> Self {
        Self::with_rng(options, rand::rng())
    }
}

impl<R: Rng> Scheduler<R> {
    pub fn with_rng(options: MorphOptions, rng: R) -> Self {
        Self {
            options,
            rng,
            memo: HashMap::new(),
        }
    }

    pub fn options(&self) -> &MorphOptions {
        &self.options
    }

    /// Number of memoized positions
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    /// Timing window of a position, picked in the option ranges on first use
    pub fn schedule_at(&mut self, position: &Point2<f64>) -> Schedule {
        let key = ScheduleKey::new(position, self.options.precision());
        let Self { options, rng, memo } = self;
        *memo.entry(key).or_insert_with(|| {
            let delay = options.delay().unwrap_or_else(|| {
                pick(rng, options.min_delay(), options.max_delay())
            });
            let duration = options.duration().unwrap_or_else(|| {
                pick(rng, options.min_duration(), options.max_duration())
            });
            Schedule::new(delay, duration)
        })
    }

    /// Assign a timing window to every point of a definition.
    ///
    /// Each point takes the window of the position it is attached to:
    /// - a start control follows the start of its segment (the previous end, or the anchor)
    /// - an end control follows the end of its segment
    /// - an end follows itself
    pub fn schedule(&mut self, definition: &mut Definition) {
        let anchor = definition.anchor().position;
        let schedule = self.schedule_at(&anchor);
        definition.anchor_mut().schedule = Some(schedule);

        let points = definition.points();
        let positions = (0..points.len())
            .map(|index| match index % 3 {
                0 if index == 0 => anchor,
                0 => points[index - 1].position,
                1 => points[index + 1].position,
                _ => points[index].position,
            })
            .collect_vec();

        let schedules = positions
            .iter()
            .map(|position| self.schedule_at(position))
            .collect_vec();
        definition
            .points_mut()
            .iter_mut()
            .zip(schedules)
            .for_each(|(point, schedule)| point.schedule = Some(schedule));
    }
}

/// Uniform value in `[min, max]`, or `min` for an empty range
fn pick<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min < max {
        rng.random_range(min..=max)
    } else {
        min
    }
}
