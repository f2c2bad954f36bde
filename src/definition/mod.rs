
use std::{fmt, str::FromStr};

use nalgebra::Point2;

use crate::{error::PathError, normalize::normalize, parse::parse, serialize::serialize};

/// Timing window of a point during a transition, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    pub delay: f64,
    pub duration: f64,
}

impl Schedule {
    pub fn new(delay: f64, duration: f64) -> Self {
        Self { delay, duration }
    }

    /// Time at which the point reaches its target
    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }
}

/// A point of a canonical definition
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathPoint {
    pub position: Point2<f64>,
    pub schedule: Option<Schedule>,
    /// Synthetic duplicate inserted to equalize point counts
    pub is_clone: bool,
}

impl PathPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self::from(Point2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Create a clone point sharing the position and schedule of `self`
    pub fn to_clone(&self) -> Self {
        Self {
            is_clone: true,
            ..self.clone()
        }
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = Some(schedule);
        self
    }
}

impl From<Point2<f64>> for PathPoint {
    fn from(position: Point2<f64>) -> Self {
        Self {
            position,
            schedule: None,
            is_clone: false,
        }
    }
}

/// Borrowed view of one cubic segment of a definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment<'a> {
    pub start_control: &'a PathPoint,
    pub end_control: &'a PathPoint,
    pub end: &'a PathPoint,
}

impl CubicSegment<'_> {
    /// Check if the segment is a zero motion segment inserted by the equalizer
    pub fn is_clone(&self) -> bool {
        self.start_control.is_clone && self.end_control.is_clone && self.end.is_clone
    }
}

/// Commands of the canonical form, always `[Move, Cubic, Close]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanonicalCommand<'a> {
    Move(&'a PathPoint),
    Cubic(&'a [PathPoint]),
    Close,
}

impl CanonicalCommand<'_> {
    pub fn letter(&self) -> char {
        match self {
            CanonicalCommand::Move(_) => 'M',
            CanonicalCommand::Cubic(_) => 'C',
            CanonicalCommand::Close => 'z',
        }
    }
}

/// Canonical representation of a path outline: an anchor, a flattened sequence of
/// cubic triples `(start control, end control, end)`, and a close command.
///
/// # Example
/// ```
/// use pathmorph::prelude::*;
///
/// let definition: Definition = "M0 0L1 1L2 0z".parse().unwrap();
/// assert_eq!(definition.len(), 9);
/// assert_eq!(definition.commands().len(), 3);
/// assert_eq!(definition.to_string(), "M0 0C0 0 1 1 1 1 1 1 2 0 2 0 2 0 0 0 0 0z");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Definition {
    anchor: PathPoint,
    points: Vec<PathPoint>,
}

impl Definition {
    /// Create a new definition
    /// # Failures
    /// - if the number of cubic points is not a multiple of 3
    pub fn try_new(anchor: PathPoint, points: Vec<PathPoint>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            points.len() % 3 == 0,
            "Invalid number of cubic points, got {}, expected a multiple of 3",
            points.len()
        );
        Ok(Self { anchor, points })
    }

    pub(crate) fn new_unchecked(anchor: PathPoint, points: Vec<PathPoint>) -> Self {
        debug_assert_eq!(points.len() % 3, 0);
        Self { anchor, points }
    }

    pub fn anchor(&self) -> &PathPoint {
        &self.anchor
    }

    pub fn anchor_mut(&mut self) -> &mut PathPoint {
        &mut self.anchor
    }

    /// Flattened points of the cubic command
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut Vec<PathPoint> {
        &mut self.points
    }

    /// Number of flattened cubic points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of cubic segments
    pub fn segment_count(&self) -> usize {
        self.points.len() / 3
    }

    pub fn segments(&self) -> impl Iterator<Item = CubicSegment<'_>> {
        self.points.chunks_exact(3).map(|triple| CubicSegment {
            start_control: &triple[0],
            end_control: &triple[1],
            end: &triple[2],
        })
    }

    /// The canonical `[Move, Cubic, Close]` commands
    pub fn commands(&self) -> [CanonicalCommand<'_>; 3] {
        [
            CanonicalCommand::Move(&self.anchor),
            CanonicalCommand::Cubic(&self.points),
            CanonicalCommand::Close,
        ]
    }

    /// Iterate over every point, the anchor first
    pub fn iter(&self) -> impl Iterator<Item = &PathPoint> {
        std::iter::once(&self.anchor).chain(self.points.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PathPoint> {
        std::iter::once(&mut self.anchor).chain(self.points.iter_mut())
    }
}

impl FromStr for Definition {
    type Err = PathError;

    /// Parse and normalize path data with the default precision
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(&parse(s)?)
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}
