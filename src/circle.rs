//! Circles.

use serde::{Deserialize, Serialize};

use crate::collide::Collide;
use crate::contains::Contains;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::translate::TranslateMut;
use crate::vector::Vector;

/// A circle, defined by a center point and a non-negative radius.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a new [`Circle`] with the given center and radius.
    ///
    /// A radius of zero is valid and reduces collision tests to
    /// point-vs-shape tests.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NegativeRadius`] if `radius < 0`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let c = Circle::new(Point::zero(), 2.0)?;
    /// assert_eq!(c.radius(), 2.0);
    /// assert!(Circle::new(Point::zero(), -1.0).is_err());
    /// # Ok::<(), geometry2d::error::Error>(())
    /// ```
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(Error::NegativeRadius { radius });
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the radius of the circle.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl TranslateMut for Circle {
    fn translate_mut(&mut self, offset: Vector) {
        self.center.translate_mut(offset);
    }
}

impl Contains<Point> for Circle {
    /// Returns true if `point` lies within the closed disk.
    fn contains(&self, point: &Point) -> bool {
        Vector::from_points(self.center, *point).norm_squared() <= self.radius * self.radius
    }
}

impl Collide<Circle> for Circle {
    /// Two circles overlap iff the distance between their centers does not
    /// exceed the sum of their radii. Tangent circles count as colliding.
    fn collides(&self, other: &Circle) -> bool {
        let reach = self.radius + other.radius;
        Vector::from_points(self.center, other.center).norm_squared() <= reach * reach
    }
}
