
use itertools::Itertools;
use nalgebra::Point2;

use crate::{
    arc::{arc_to_cubic, EllipticalArc},
    command::{Command, CommandKind, Group, Parameter},
    definition::{Definition, PathPoint},
    error::PathError,
    misc::reflect,
};

/// Default number of decimals kept for computed coordinates
pub const DEFAULT_PRECISION: u32 = 2;

/// Largest number of decimals an `f64` coordinate can meaningfully keep
pub const MAX_PRECISION: u32 = 15;

/// Radii below this value draw a straight line instead of an arc
const RADIUS_TOLERANCE: f64 = 1e-9;

/// Converts parsed commands into the canonical `[Move, Cubic, Close]` form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    /// Number of decimals kept for coordinates computed from arcs
    precision: u32,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Normalizer {
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Normalize a sequence of commands into a canonical definition.
    ///
    /// Every drawing command becomes one or more cubic triples:
    /// - lines become `(current, end, end)`
    /// - quadratic curves are elevated to cubic curves
    /// - smooth curves reflect the previous control point only after a curve of the same family
    /// - arcs are converted to cubic slices, or to a line when a radius is zero
    ///
    /// A closing line is appended when the outline does not end on its anchor.
    ///
    /// # Failures
    /// - if there is no command or the first one is not a move command
    /// - if a parameter is not a number
    ///
    /// # Example
    /// ```
    /// use pathmorph::prelude::*;
    ///
    /// let commands = parse("M0 0H1V1").unwrap();
    /// let definition = Normalizer::default().normalize(&commands).unwrap();
    /// // two lines and the closing line
    /// assert_eq!(definition.segment_count(), 3);
    /// assert_eq!(definition.to_string(), "M0 0C0 0 1 0 1 0 1 0 1 1 1 1 1 1 0 0 0 0z");
    /// ```
    pub fn normalize(&self, commands: &[Command]) -> Result<Definition, PathError> {
        let (first, rest) = commands.split_first().ok_or(PathError::Empty)?;
        if first.kind() != CommandKind::Move {
            return Err(PathError::MissingMove {
                command: first.letter(),
            });
        }

        let (head, tail) = first
            .groups()
            .split_first()
            .ok_or(PathError::Arity {
                command: first.letter(),
                expected: CommandKind::Move.segment_arity(),
                found: 0,
            })?;

        // a relative first move resolves against the origin
        let anchor = position(head, &Point2::origin(), first.is_relative())?;
        let mut pen = Pen::new(anchor, self.precision);

        // extra pairs of a move command are implicit lines
        for group in tail {
            let end = pen.resolve(group, first.is_relative())?;
            pen.line_to(end);
        }

        for command in rest {
            pen.draw(command)?;
        }
        pen.close();

        Ok(Definition::new_unchecked(
            PathPoint::from(anchor),
            pen.points.into_iter().map(PathPoint::from).collect_vec(),
        ))
    }
}

/// Normalize commands with the default precision
pub fn normalize(commands: &[Command]) -> Result<Definition, PathError> {
    Normalizer::default().normalize(commands)
}

/// Control point carried over to the next smooth command
#[derive(Debug, Clone, Copy, PartialEq)]
enum Reflection {
    None,
    /// Second control point of a cubic or smooth cubic segment
    Cubic(Point2<f64>),
    /// Control point of a quadratic or smooth quadratic segment
    Quadratic(Point2<f64>),
}

/// Drawing state while walking the commands
struct Pen {
    anchor: Point2<f64>,
    current: Point2<f64>,
    reflection: Reflection,
    precision: u32,
    points: Vec<Point2<f64>>,
}

impl Pen {
    fn new(anchor: Point2<f64>, precision: u32) -> Self {
        Self {
            anchor,
            current: anchor,
            reflection: Reflection::None,
            precision,
            points: vec![],
        }
    }

    /// Absolute position of an `(x, y)` group
    fn resolve(&self, group: &Group, relative: bool) -> Result<Point2<f64>, PathError> {
        position(group, &self.current, relative)
    }

    fn draw(&mut self, command: &Command) -> Result<(), PathError> {
        let relative = command.is_relative();
        match command.kind() {
            CommandKind::Move | CommandKind::Line => {
                for group in command.groups() {
                    let end = self.resolve(group, relative)?;
                    self.line_to(end);
                }
            }
            CommandKind::HorizontalLine => {
                for group in command.groups() {
                    let x = group.value(Parameter::X)?;
                    let x = if relative { self.current.x + x } else { x };
                    self.line_to(Point2::new(x, self.current.y));
                }
            }
            CommandKind::VerticalLine => {
                for group in command.groups() {
                    let y = group.value(Parameter::Y)?;
                    let y = if relative { self.current.y + y } else { y };
                    self.line_to(Point2::new(self.current.x, y));
                }
            }
            CommandKind::Cubic => {
                for segment in command.segments() {
                    let c1 = self.resolve(&segment[0], relative)?;
                    let c2 = self.resolve(&segment[1], relative)?;
                    let end = self.resolve(&segment[2], relative)?;
                    self.cubic_to(c1, c2, end);
                }
            }
            CommandKind::SmoothCubic => {
                for segment in command.segments() {
                    let c1 = match self.reflection {
                        Reflection::Cubic(control) => reflect(&control, &self.current),
                        _ => self.current,
                    };
                    let c2 = self.resolve(&segment[0], relative)?;
                    let end = self.resolve(&segment[1], relative)?;
                    self.cubic_to(c1, c2, end);
                }
            }
            CommandKind::Quadratic => {
                for segment in command.segments() {
                    let control = self.resolve(&segment[0], relative)?;
                    let end = self.resolve(&segment[1], relative)?;
                    self.quadratic_to(control, end);
                }
            }
            CommandKind::SmoothQuadratic => {
                for group in command.groups() {
                    let control = match self.reflection {
                        Reflection::Quadratic(control) => reflect(&control, &self.current),
                        _ => self.current,
                    };
                    let end = self.resolve(group, relative)?;
                    self.quadratic_to(control, end);
                }
            }
            CommandKind::Arc => {
                for group in command.groups() {
                    let arc = EllipticalArc {
                        radius_x: group.value(Parameter::RadiusX)?.abs(),
                        radius_y: group.value(Parameter::RadiusY)?.abs(),
                        angle: group.value(Parameter::Angle)?,
                        large_arc: group.flag(Parameter::LargeArcFlag)?,
                        sweep: group.flag(Parameter::SweepFlag)?,
                        end: self.resolve(group, relative)?,
                    };
                    self.arc_to(&arc);
                }
            }
            CommandKind::Close => {
                self.close();
            }
        }
        Ok(())
    }

    /// Straight line expressed as a cubic segment whose control points are its endpoints
    fn line_to(&mut self, end: Point2<f64>) {
        self.points.extend([self.current, end, end]);
        self.current = end;
        self.reflection = Reflection::None;
    }

    fn cubic_to(&mut self, c1: Point2<f64>, c2: Point2<f64>, end: Point2<f64>) {
        self.points.extend([c1, c2, end]);
        self.current = end;
        self.reflection = Reflection::Cubic(c2);
    }

    /// Degree elevation of a quadratic segment
    fn quadratic_to(&mut self, control: Point2<f64>, end: Point2<f64>) {
        let start = self.current;
        let c1 = start + (control - start) * (2. / 3.);
        let c2 = end + (control - end) * (2. / 3.);
        self.points.extend([c1, c2, end]);
        self.current = end;
        self.reflection = Reflection::Quadratic(control);
    }

    fn arc_to(&mut self, arc: &EllipticalArc<f64>) {
        if arc.end == self.current {
            // an arc to the current point draws nothing
            self.reflection = Reflection::None;
            return;
        }
        if arc.radius_x < RADIUS_TOLERANCE || arc.radius_y < RADIUS_TOLERANCE {
            self.line_to(arc.end);
            return;
        }

        let points = arc_to_cubic(&self.current, arc, self.precision);
        if let Some(last) = points.last() {
            self.current = *last;
        }
        self.points.extend(points);
        self.reflection = Reflection::None;
    }

    /// Line back to the anchor unless the outline already ends on it
    fn close(&mut self) {
        if self.current != self.anchor {
            self.line_to(self.anchor);
        }
        self.current = self.anchor;
        self.reflection = Reflection::None;
    }
}

fn position(
    group: &Group,
    origin: &Point2<f64>,
    relative: bool,
) -> Result<Point2<f64>, PathError> {
    let point = Point2::new(group.value(Parameter::X)?, group.value(Parameter::Y)?);
    Ok(if relative {
        point + origin.coords
    } else {
        point
    })
}
