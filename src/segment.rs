//! Bounded line segments.

use serde::{Deserialize, Serialize};

use crate::contains::Contains;
use crate::error::{Error, Result};
use crate::intersect::Intersect;
use crate::line::Line;
use crate::point::Point;
use crate::vector::Vector;
use crate::EPSILON;

/// A bounded line segment, defined by a begin point and a direction vector.
///
/// The end point is the begin point translated by the direction vector.
/// The direction vector is guaranteed non-zero by construction, so the
/// segment always has positive length.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    begin: Point,
    vector: Vector,
}

impl Segment {
    /// Creates a new [`Segment`] starting at `begin` and spanning `vector`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::DegenerateDirection`] if the vector has
    /// (near-)zero length.
    pub fn new(begin: Point, vector: Vector) -> Result<Self> {
        if vector.norm() < EPSILON {
            return Err(Error::DegenerateDirection);
        }
        Ok(Self { begin, vector })
    }

    /// Creates the segment between two distinct endpoints.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::DegenerateDirection`] if the endpoints coincide.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let s = Segment::from_endpoints(Point::zero(), Point::new(3.0, 4.0))?;
    /// assert_eq!(s.length(), 5.0);
    /// let p = Point::new(1.0, 1.0);
    /// assert!(Segment::from_endpoints(p, p).is_err());
    /// # Ok::<(), geometry2d::error::Error>(())
    /// ```
    pub fn from_endpoints(begin: Point, end: Point) -> Result<Self> {
        Self::new(begin, Vector::from_points(begin, end))
    }

    /// Caller must guarantee a non-zero vector.
    pub(crate) fn new_unchecked(begin: Point, vector: Vector) -> Self {
        Self { begin, vector }
    }

    /// Returns the begin point of the segment.
    pub fn begin(&self) -> Point {
        self.begin
    }

    /// Returns the end point of the segment.
    pub fn end(&self) -> Point {
        self.begin.translate(self.vector)
    }

    /// Returns the direction vector spanning the segment.
    pub fn vector(&self) -> Vector {
        self.vector
    }

    /// Returns the length of the segment.
    pub fn length(&self) -> f64 {
        self.vector.norm()
    }

    /// Returns the infinite line this segment lies on.
    pub fn line(&self) -> Line {
        Line::new_unchecked(self.begin, self.vector)
    }

    /// Returns the shortest distance from `point` to the segment.
    pub fn distance_to(&self, point: Point) -> f64 {
        let relation = Vector::from_points(self.begin, point);
        let t = (relation.dot(self.vector) / self.vector.norm_squared()).clamp(0.0, 1.0);
        point.distance_to(self.begin.translate(self.vector * t))
    }

    /// Returns true if the two segments cross.
    ///
    /// Parallel segments never cross, including the collinear overlapping
    /// case.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let a = Segment::from_endpoints(Point::new(0.0, 0.0), Point::new(2.0, 2.0))?;
    /// let b = Segment::from_endpoints(Point::new(0.0, 2.0), Point::new(2.0, 0.0))?;
    /// assert!(a.intercepts(&b));
    /// # Ok::<(), geometry2d::error::Error>(())
    /// ```
    pub fn intercepts(&self, other: &Segment) -> bool {
        self.coefficient_to(other)
            .is_some_and(|t| (0.0..=1.0).contains(&t))
    }

    /// Solves for the parameter `t` along this segment such that
    /// `begin + t * vector` lies on the infinite line of `other`.
    ///
    /// Returns [`None`] when the direction vectors are parallel, detected
    /// with a near-zero determinant tolerance.
    fn coefficient_to(&self, other: &Segment) -> Option<f64> {
        let det = self.vector.cross(other.vector);
        if det.abs() < EPSILON {
            return None;
        }
        let relation = Vector::from_points(self.begin, other.begin);
        Some(relation.cross(other.vector) / det)
    }
}

impl Contains<Point> for Segment {
    /// Returns true if `point` lies on the segment.
    ///
    /// Requires collinearity with the underlying line, then checks the
    /// point against the bounding box of the endpoints on every axis.
    /// The bounds are strict on each axis, so points at a bounding
    /// extreme that are not an interior match are rejected.
    fn contains(&self, point: &Point) -> bool {
        if !self.line().contains(point) {
            return false;
        }

        let begin = self.begin();
        let end = self.end();
        for i in 0..2 {
            if point[i] <= begin[i].min(end[i]) || point[i] >= begin[i].max(end[i]) {
                return false;
            }
        }

        true
    }
}

impl Intersect<Segment> for Segment {
    type Output = Point;

    /// Returns the point where the two segments cross, if any.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let a = Segment::from_endpoints(Point::new(0.0, 0.0), Point::new(2.0, 2.0))?;
    /// let b = Segment::from_endpoints(Point::new(0.0, 2.0), Point::new(2.0, 0.0))?;
    /// assert_eq!(a.intersect(&b), Some(Point::new(1.0, 1.0)));
    /// # Ok::<(), geometry2d::error::Error>(())
    /// ```
    fn intersect(&self, other: &Segment) -> Option<Point> {
        let t = self.coefficient_to(other)?;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        Some(self.begin.translate(self.vector * t))
    }
}
