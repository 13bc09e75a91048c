//! An enumeration of geometric shapes and their properties.

use serde::{Deserialize, Serialize};

use crate::circle::Circle;
use crate::collide::Collide;
use crate::contains::Contains;
use crate::convex::ConvexPolygon;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::translate::TranslateMut;
use crate::vector::Vector;

/// An enumeration of geometric shapes.
///
/// Collision dispatch is closed over the variants: pairs of convex shapes
/// (circles and convex polygons) run the separating-axis engine, while any
/// pair involving a plain [`Polygon`] falls back to the generic edge-based
/// overlap test.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Shape {
    /// A circle.
    Circle(Circle),
    /// A convex polygon.
    Convex(ConvexPolygon),
    /// A polygon with no convexity guarantee.
    Polygon(Polygon),
}

impl Shape {
    /// If this shape is a circle, returns the contained circle.
    /// Otherwise, returns [`None`].
    pub fn circle(&self) -> Option<Circle> {
        match self {
            Self::Circle(c) => Some(*c),
            _ => None,
        }
    }

    /// If this shape is a convex polygon, returns the contained polygon.
    /// Otherwise, returns [`None`].
    pub fn convex(&self) -> Option<&ConvexPolygon> {
        match self {
            Self::Convex(p) => Some(p),
            _ => None,
        }
    }

    /// If this shape is a plain polygon, returns the contained polygon.
    /// Otherwise, returns [`None`].
    pub fn polygon(&self) -> Option<&Polygon> {
        match self {
            Self::Polygon(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Circle> for Shape {
    #[inline]
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<ConvexPolygon> for Shape {
    #[inline]
    fn from(value: ConvexPolygon) -> Self {
        Self::Convex(value)
    }
}

impl From<Polygon> for Shape {
    #[inline]
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl TranslateMut for Shape {
    fn translate_mut(&mut self, offset: Vector) {
        match self {
            Shape::Circle(circle) => circle.translate_mut(offset),
            Shape::Convex(convex) => convex.translate_mut(offset),
            Shape::Polygon(polygon) => polygon.translate_mut(offset),
        }
    }
}

impl Contains<Point> for Shape {
    fn contains(&self, p: &Point) -> bool {
        match self {
            Shape::Circle(circle) => circle.contains(p),
            Shape::Convex(convex) => convex.contains(p),
            Shape::Polygon(polygon) => polygon.contains(p),
        }
    }
}

/// Generic polygon-vs-circle fallback for polygons without a convexity
/// guarantee: the shapes overlap if the center lies inside the polygon or
/// any edge passes within the radius.
fn polygon_circle_collides(polygon: &Polygon, circle: &Circle) -> bool {
    if polygon.contains(&circle.center()) {
        return true;
    }
    polygon
        .edges()
        .iter()
        .any(|edge| edge.distance_to(circle.center()) <= circle.radius())
}

impl Collide<Shape> for Shape {
    /// Dispatches a collision query on the pair of runtime variants.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let square: Shape = ConvexPolygon::from_vertices(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(2.0, 0.0),
    ///     Point::new(2.0, 2.0),
    ///     Point::new(0.0, 2.0),
    /// ])?
    /// .into();
    /// let circle: Shape = Circle::new(Point::new(1.0, 1.0), 0.5)?.into();
    /// assert!(square.collides(&circle));
    /// assert!(circle.collides(&square));
    /// # Ok::<(), geometry2d::error::Error>(())
    /// ```
    fn collides(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Circle(a), Shape::Circle(b)) => a.collides(b),
            (Shape::Circle(a), Shape::Convex(b)) | (Shape::Convex(b), Shape::Circle(a)) => {
                b.collides(a)
            }
            (Shape::Convex(a), Shape::Convex(b)) => a.collides(b),
            (Shape::Polygon(a), Shape::Polygon(b)) => a.collides(b),
            (Shape::Polygon(a), Shape::Convex(b)) | (Shape::Convex(b), Shape::Polygon(a)) => {
                a.collides(b.as_polygon())
            }
            (Shape::Polygon(a), Shape::Circle(b)) | (Shape::Circle(b), Shape::Polygon(a)) => {
                polygon_circle_collides(a, b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convex_square(x: f64, y: f64, side: f64) -> Shape {
        ConvexPolygon::from_vertices(vec![
            Point::new(x, y),
            Point::new(x + side, y),
            Point::new(x + side, y + side),
            Point::new(x, y + side),
        ])
        .unwrap()
        .into()
    }

    fn concave_l_shape() -> Shape {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 4.0),
            Point::new(0.0, 4.0),
        ])
        .unwrap()
        .into()
    }

    #[test]
    fn convex_pairs_use_the_separating_axis_engine() {
        let a = convex_square(0.0, 0.0, 1.0);
        let b = convex_square(2.0, 0.0, 1.0);
        let c = convex_square(0.5, 0.5, 1.0);
        assert!(!a.collides(&b));
        assert!(a.collides(&c));
    }

    #[test]
    fn circle_dispatch_is_symmetric() {
        let square = convex_square(0.0, 0.0, 2.0);
        let circle: Shape = Circle::new(Point::new(3.0, 1.0), 1.0).unwrap().into();
        assert!(square.collides(&circle));
        assert_eq!(square.collides(&circle), circle.collides(&square));
    }

    #[test]
    fn plain_polygon_pairs_use_the_generic_fallback() {
        let l_shape = concave_l_shape();
        let overlapping = convex_square(1.0, 1.0, 1.0);
        let in_the_notch = convex_square(2.5, 2.5, 1.0);
        assert!(l_shape.collides(&overlapping));
        // SAT would wrongly report the notch square as colliding; the
        // fallback handles the concave outline.
        assert!(!l_shape.collides(&in_the_notch));
    }

    #[test]
    fn plain_polygon_vs_circle_uses_edge_distance() {
        let l_shape = concave_l_shape();
        let inside: Shape = Circle::new(Point::new(1.0, 1.0), 0.5).unwrap().into();
        let in_the_notch: Shape = Circle::new(Point::new(3.25, 3.25), 0.5).unwrap().into();
        let touching_notch: Shape = Circle::new(Point::new(3.0, 3.0), 1.0).unwrap().into();
        assert!(l_shape.collides(&inside));
        assert!(!l_shape.collides(&in_the_notch));
        assert!(l_shape.collides(&touching_notch));
    }

    #[test]
    fn variant_accessors_filter_by_kind() {
        let circle = Circle::new(Point::zero(), 1.0).unwrap();
        let shape = Shape::from(circle);
        assert_eq!(shape.circle(), Some(circle));
        assert!(shape.convex().is_none());
        assert!(shape.polygon().is_none());
    }
}
