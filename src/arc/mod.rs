
use itertools::Itertools;
use nalgebra::Point2;

use crate::misc::{radians, rotate, FloatingPoint};

/// Maximum sweep of an arc slice approximated by a single cubic segment, in degrees
pub const MAX_SLICE_DEGREES: f64 = 120.;

/// Endpoint parameterization of an elliptical arc drawn from the current point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalArc<T: FloatingPoint> {
    pub radius_x: T,
    pub radius_y: T,
    /// Rotation of the ellipse's x axis in degrees
    pub angle: T,
    pub large_arc: bool,
    pub sweep: bool,
    pub end: Point2<T>,
}

/// Center parameterization of an arc, expressed in the unrotated frame of its ellipse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCenter<T: FloatingPoint> {
    pub center: Point2<T>,
    /// Radii after scaling up radii too small to reach the end point
    pub radius_x: T,
    pub radius_y: T,
    /// Start angle in radians
    pub theta1: T,
    /// End angle in radians, `theta2 - theta1` being the signed sweep
    pub theta2: T,
}

impl<T: FloatingPoint> ArcCenter<T> {
    /// Convert the endpoint parameterization of an arc starting at `start` to its center parameterization.
    /// `start` and the arc end point are given in the external frame.
    /// Radii must be non-zero.
    pub fn from_endpoints(start: &Point2<T>, arc: &EllipticalArc<T>) -> Self {
        let two = T::from_f64(2.).unwrap();
        let phi = radians(arc.angle);

        let p1 = rotate(start, -phi);
        let p2 = rotate(&arc.end, -phi);
        let x = (p1.x - p2.x) / two;
        let y = (p1.y - p2.y) / two;

        let mut rx = arc.radius_x.abs();
        let mut ry = arc.radius_y.abs();
        let h = (x * x) / (rx * rx) + (y * y) / (ry * ry);
        if h > T::one() {
            let scale = h.sqrt();
            rx *= scale;
            ry *= scale;
        }

        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let denominator = rx2 * y * y + ry2 * x * x;
        let sign = if arc.large_arc == arc.sweep {
            -T::one()
        } else {
            T::one()
        };
        let k = if denominator > T::zero() {
            sign * ((rx2 * ry2 - rx2 * y * y - ry2 * x * x) / denominator)
                .abs()
                .sqrt()
        } else {
            T::zero()
        };

        let center = Point2::new(
            k * rx * y / ry + (p1.x + p2.x) / two,
            k * -ry * x / rx + (p1.y + p2.y) / two,
        );

        let tau = T::two_pi();
        let mut theta1 = ellipse_angle(&p1, &center, ry);
        let mut theta2 = ellipse_angle(&p2, &center, ry);
        if arc.sweep && theta1 > theta2 {
            theta1 -= tau;
        }
        if !arc.sweep && theta2 > theta1 {
            theta2 -= tau;
        }

        Self {
            center,
            radius_x: rx,
            radius_y: ry,
            theta1,
            theta2,
        }
    }

    /// Point of the ellipse at `theta`, in the unrotated frame
    pub fn point_at(&self, theta: T) -> Point2<T> {
        Point2::new(
            self.center.x + self.radius_x * theta.cos(),
            self.center.y + self.radius_y * theta.sin(),
        )
    }

    /// Signed angular sweep in radians
    pub fn sweep(&self) -> T {
        self.theta2 - self.theta1
    }
}

/// Angle of a point of the ellipse around its center, in `[0, 2π)`
fn ellipse_angle<T: FloatingPoint>(point: &Point2<T>, center: &Point2<T>, radius_y: T) -> T {
    let sine = ((point.y - center.y) / radius_y)
        .round_to(9)
        .max(-T::one())
        .min(T::one());
    let mut theta = sine.asin();
    if point.x < center.x {
        theta = T::pi() - theta;
    }
    if theta < T::zero() {
        theta += T::two_pi();
    }
    theta
}

/// One slice of an arc, small enough to be drawn by a single cubic segment
#[derive(Debug, Clone, Copy)]
struct ArcSlice<T: FloatingPoint> {
    theta1: T,
    theta2: T,
    start: Point2<T>,
    end: Point2<T>,
}

/// Convert an elliptical arc drawn from `start` into flattened cubic triples
/// `(start control, end control, end position)`, rounded to `precision` decimals.
///
/// Arcs sweeping more than 120° are sliced, the state of the next slice being carried
/// forward from the end of the previous one.
/// Radii must be non-zero, which the normalizer checks before calling.
///
/// # Example
/// ```
/// use pathmorph::prelude::*;
/// use nalgebra::Point2;
///
/// // quarter of the unit circle
/// let arc = EllipticalArc {
///     radius_x: 1.,
///     radius_y: 1.,
///     angle: 0.,
///     large_arc: false,
///     sweep: true,
///     end: Point2::new(0., 1.),
/// };
/// let points = arc_to_cubic(&Point2::new(1., 0.), &arc, 4);
/// assert_eq!(
///     points,
///     vec![Point2::new(1., 0.5523), Point2::new(0.5523, 1.), Point2::new(0., 1.)]
/// );
/// ```
pub fn arc_to_cubic<T: FloatingPoint>(
    start: &Point2<T>,
    arc: &EllipticalArc<T>,
    precision: u32,
) -> Vec<Point2<T>> {
    let parameterization = ArcCenter::from_endpoints(start, arc);
    let phi = radians(arc.angle);

    let slices = slice(
        &parameterization,
        &rotate(start, -phi),
        &rotate(&arc.end, -phi),
        arc.sweep,
    );

    let three = T::from_f64(3.).unwrap();
    let four = T::from_f64(4.).unwrap();
    let ArcCenter {
        radius_x: rx,
        radius_y: ry,
        ..
    } = parameterization;

    slices
        .iter()
        .flat_map(|s| {
            let t = ((s.theta2 - s.theta1) / four).tan();
            let hx = four / three * rx * t;
            let hy = four / three * ry * t;
            let (sin1, cos1) = s.theta1.sin_cos();
            let (sin2, cos2) = s.theta2.sin_cos();
            [
                Point2::new(s.start.x - hx * sin1, s.start.y + hy * cos1),
                Point2::new(s.end.x + hx * sin2, s.end.y - hy * cos2),
                s.end,
            ]
        })
        .map(|p| {
            let p = rotate(&p, phi);
            Point2::new(p.x.round_to(precision), p.y.round_to(precision))
        })
        .collect_vec()
}

/// Split the sweep of an arc into slices of at most 120°
fn slice<T: FloatingPoint>(
    arc: &ArcCenter<T>,
    start: &Point2<T>,
    end: &Point2<T>,
    sweep: bool,
) -> Vec<ArcSlice<T>> {
    let limit = radians(T::from_f64(MAX_SLICE_DEGREES).unwrap());
    let direction = if sweep { T::one() } else { -T::one() };

    let mut slices = vec![];
    let mut theta1 = arc.theta1;
    let mut from = *start;
    while (arc.theta2 - theta1).abs() > limit {
        let theta2 = theta1 + limit * direction;
        let to = arc.point_at(theta2);
        slices.push(ArcSlice {
            theta1,
            theta2,
            start: from,
            end: to,
        });
        theta1 = theta2;
        from = to;
    }
    slices.push(ArcSlice {
        theta1,
        theta2: arc.theta2,
        start: from,
        end: *end,
    });
    slices
}
