//! 2-D directional quantities.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use crate::point::Point;

/// A directional quantity in two-dimensional space.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Vector {
    /// The x-component of the vector.
    pub dx: f64,
    /// The y-component of the vector.
    pub dy: f64,
}

impl Vector {
    /// Creates a new [`Vector`] from (dx, dy) components.
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Returns the zero vector, `(0, 0)`.
    #[inline]
    pub const fn zero() -> Self {
        Self { dx: 0.0, dy: 0.0 }
    }

    /// Creates the vector going from `a` to `b`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let v = Vector::from_points(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
    /// assert_eq!(v, Vector::new(3.0, 4.0));
    /// ```
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::new(b.x - a.x, b.y - a.y)
    }

    /// Computes the dot product with `other`.
    ///
    /// Commutative: `a.dot(b) == b.dot(a)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let a = Vector::new(1.0, 2.0);
    /// let b = Vector::new(3.0, -1.0);
    /// assert_eq!(a.dot(b), 1.0);
    /// ```
    pub fn dot(&self, other: Vector) -> f64 {
        self.dx * other.dx + self.dy * other.dy
    }

    /// Computes the 2-D cross product with `other`.
    ///
    /// Zero iff the two vectors are parallel.
    pub fn cross(&self, other: Vector) -> f64 {
        self.dx * other.dy - self.dy * other.dx
    }

    /// Returns a vector perpendicular to this one.
    ///
    /// The rotation direction is fixed: `(dx, dy)` maps to `(-dy, dx)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let v = Vector::new(1.0, 0.0);
    /// assert_eq!(v.normal(), Vector::new(0.0, 1.0));
    /// assert_eq!(v.normal().dot(v), 0.0);
    /// ```
    pub fn normal(&self) -> Vector {
        Vector::new(-self.dy, self.dx)
    }

    /// Returns the Euclidean length of the vector.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// assert_eq!(Vector::new(3.0, 4.0).norm(), 5.0);
    /// ```
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Returns the squared Euclidean length of the vector.
    ///
    /// Avoids the square root when only relative magnitudes matter.
    pub fn norm_squared(&self) -> f64 {
        self.dx * self.dx + self.dy * self.dy
    }
}

impl From<Point> for Vector {
    /// Converts a point into its position vector from the origin.
    #[inline]
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl Add<Vector> for Vector {
    type Output = Self;
    fn add(self, rhs: Vector) -> Self::Output {
        Self::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub<Vector> for Vector {
    type Output = Self;
    fn sub(self, rhs: Vector) -> Self::Output {
        Self::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.dx, -self.dy)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.dx * rhs, self.dy * rhs)
    }
}
