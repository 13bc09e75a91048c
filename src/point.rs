//! 2-D points.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, Sub};

use crate::translate::TranslateMut;
use crate::vector::Vector;

/// A point in two-dimensional space.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: f64,
    /// The y-coordinate of the point.
    pub y: f64,
}

impl Point {
    /// Creates a new [`Point`] from (x, y) coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the origin, `(0, 0)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let origin = Point::zero();
    /// assert_eq!(origin, Point::new(0.0, 0.0));
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Returns this point shifted by the given vector.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let p = Point::new(1.0, 2.0).translate(Vector::new(0.5, -2.0));
    /// assert_eq!(p, Point::new(1.5, 0.0));
    /// ```
    pub fn translate(&self, offset: Vector) -> Point {
        Point::new(self.x + offset.dx, self.y + offset.dy)
    }

    /// Returns the Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        Vector::from_points(*self, other).norm()
    }
}

impl Index<usize> for Point {
    type Output = f64;

    /// Gets the coordinate at `index`: 0 is x, 1 is y.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 1.
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("point coordinate index out of range: {index}"),
        }
    }
}

impl TranslateMut for Point {
    fn translate_mut(&mut self, offset: Vector) {
        self.x += offset.dx;
        self.y += offset.dy;
    }
}

impl Add<Vector> for Point {
    type Output = Self;
    fn add(self, rhs: Vector) -> Self::Output {
        self.translate(rhs)
    }
}

impl Sub<Point> for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Self::Output {
        Vector::from_points(rhs, self)
    }
}
