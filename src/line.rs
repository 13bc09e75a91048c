//! Infinite lines through a point with a direction.

use serde::{Deserialize, Serialize};

use crate::contains::Contains;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::vector::Vector;
use crate::EPSILON;

/// An infinite line, defined by an anchor point and a direction vector.
///
/// The direction vector is guaranteed non-zero by construction.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Line {
    anchor: Point,
    direction: Vector,
}

impl Line {
    /// Creates a new [`Line`] through `anchor` with the given direction.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::DegenerateDirection`] if the direction has
    /// (near-)zero length.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let line = Line::new(Point::zero(), Vector::new(1.0, 1.0))?;
    /// assert!(Line::new(Point::zero(), Vector::zero()).is_err());
    /// # Ok::<(), geometry2d::error::Error>(())
    /// ```
    pub fn new(anchor: Point, direction: Vector) -> Result<Self> {
        if direction.norm() < EPSILON {
            return Err(Error::DegenerateDirection);
        }
        Ok(Self { anchor, direction })
    }

    /// Creates the line passing through two distinct points.
    ///
    /// The direction is the vector from `a` to `b`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::DegenerateDirection`] if the points coincide.
    pub fn through(a: Point, b: Point) -> Result<Self> {
        Self::new(a, Vector::from_points(a, b))
    }

    /// Caller must guarantee a non-zero direction.
    pub(crate) fn new_unchecked(anchor: Point, direction: Vector) -> Self {
        Self { anchor, direction }
    }

    /// Returns the anchor point of the line.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Returns the direction vector of the line.
    pub fn direction(&self) -> Vector {
        self.direction
    }
}

impl Contains<Point> for Line {
    /// Returns true if `point` lies on the infinite line.
    ///
    /// Collinearity is tested with a cross product against [`EPSILON`],
    /// never with exact equality.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let line = Line::through(Point::zero(), Point::new(2.0, 2.0))?;
    /// assert!(line.contains(&Point::new(-1.0, -1.0)));
    /// assert!(!line.contains(&Point::new(1.0, 0.0)));
    /// # Ok::<(), geometry2d::error::Error>(())
    /// ```
    fn contains(&self, point: &Point) -> bool {
        let relation = Vector::from_points(self.anchor, *point);
        self.direction.cross(relation).abs() < EPSILON
    }
}
