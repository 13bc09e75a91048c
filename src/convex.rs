//! Convex polygons and the separating-axis collision engine.

use serde::{Deserialize, Serialize};

use crate::circle::Circle;
use crate::collide::Collide;
use crate::contains::Contains;
use crate::error::Result;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::segment::Segment;
use crate::translate::TranslateMut;
use crate::vector::Vector;
use crate::EPSILON;

/// A convex polygon, supporting separating-axis collision tests.
///
/// Wraps a [`Polygon`] whose vertices are assumed to form a convex hull in
/// their stored winding order. Convexity is a caller-guaranteed
/// precondition and is not validated; collision results for non-convex
/// input are undefined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConvexPolygon {
    inner: Polygon,
}

impl ConvexPolygon {
    /// Wraps an existing polygon, assuming it is convex.
    pub fn new(polygon: Polygon) -> Self {
        Self { inner: polygon }
    }

    /// Creates a convex polygon directly from vertices.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Polygon::new`].
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let triangle = ConvexPolygon::from_vertices(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(2.0, 0.0),
    ///     Point::new(1.0, 2.0),
    /// ])?;
    /// assert!(triangle.collides(&triangle.clone()));
    /// # Ok::<(), geometry2d::error::Error>(())
    /// ```
    pub fn from_vertices(vertices: Vec<Point>) -> Result<Self> {
        Ok(Self::new(Polygon::new(vertices)?))
    }

    /// Returns a view of the wrapped polygon.
    pub fn as_polygon(&self) -> &Polygon {
        &self.inner
    }

    /// Unwraps into the underlying polygon.
    pub fn into_polygon(self) -> Polygon {
        self.inner
    }

    /// Returns the vertices of the polygon, in winding order.
    pub fn vertices(&self) -> &[Point] {
        self.inner.vertices()
    }

    /// Returns the edges of the polygon as segments.
    pub fn edges(&self) -> Vec<Segment> {
        self.inner.edges()
    }

    /// Projects every vertex onto `axis`, returning the [min, max]
    /// interval of dot products.
    fn project(&self, axis: Vector) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &vertex in self.vertices() {
            let projection = axis.dot(Vector::from(vertex));
            min = min.min(projection);
            max = max.max(projection);
        }
        (min, max)
    }

    /// Returns the vector from `center` to the polygon vertex nearest to
    /// it, minimizing squared distance. The first minimum in vertex order
    /// wins ties.
    fn nearest_vertex_axis(&self, center: Point) -> Vector {
        let mut min_distance = f64::INFINITY;
        let mut nearest = Vector::zero();
        for &vertex in self.vertices() {
            let relation = Vector::from_points(center, vertex);
            let distance = relation.norm_squared();
            if distance < min_distance {
                min_distance = distance;
                nearest = relation;
            }
        }
        nearest
    }
}

impl TranslateMut for ConvexPolygon {
    fn translate_mut(&mut self, offset: Vector) {
        self.inner.translate_mut(offset);
    }
}

impl Contains<Point> for ConvexPolygon {
    fn contains(&self, point: &Point) -> bool {
        self.inner.contains(point)
    }
}

impl Collide<ConvexPolygon> for ConvexPolygon {
    /// Separating-axis test between two convex polygons.
    ///
    /// Candidate axes are the normals of every edge of both polygons.
    /// The shapes are disjoint iff some axis separates their projection
    /// intervals; touching intervals count as overlap.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let a = ConvexPolygon::from_vertices(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 0.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(0.0, 1.0),
    /// ])?;
    /// let mut far = a.clone();
    /// far.translate_mut(Vector::new(2.0, 0.0));
    /// assert!(!a.collides(&far));
    /// let mut near = a.clone();
    /// near.translate_mut(Vector::new(0.5, 0.0));
    /// assert!(a.collides(&near));
    /// # Ok::<(), geometry2d::error::Error>(())
    /// ```
    fn collides(&self, other: &ConvexPolygon) -> bool {
        for edge in self.edges().into_iter().chain(other.edges()) {
            let axis = edge.vector().normal();
            let (my_min, my_max) = self.project(axis);
            let (his_min, his_max) = other.project(axis);
            if my_min > his_max || my_max < his_min {
                return false;
            }
        }
        true
    }
}

impl Collide<Circle> for ConvexPolygon {
    /// Separating-axis test between a convex polygon and a circle.
    ///
    /// Candidate axes are the normals of every polygon edge plus the
    /// vector from the circle center to the nearest polygon vertex. Axes
    /// are normalized so the circle's projection interval is exactly
    /// `[c - r, c + r]` on every axis.
    fn collides(&self, circle: &Circle) -> bool {
        let vertex_axis = self.nearest_vertex_axis(circle.center());
        let axes = self
            .edges()
            .into_iter()
            .map(|edge| edge.vector().normal())
            .chain(std::iter::once(vertex_axis));

        for axis in axes {
            let norm = axis.norm();
            if norm < EPSILON {
                // The center coincides with a vertex; this axis cannot
                // separate anything.
                continue;
            }
            let axis = axis * (1.0 / norm);
            let (my_min, my_max) = self.project(axis);
            let center = axis.dot(Vector::from(circle.center()));
            let (his_min, his_max) = (center - circle.radius(), center + circle.radius());
            if my_min > his_max || my_max < his_min {
                return false;
            }
        }

        true
    }
}

impl Collide<ConvexPolygon> for Circle {
    fn collides(&self, other: &ConvexPolygon) -> bool {
        other.collides(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, side: f64) -> ConvexPolygon {
        ConvexPolygon::from_vertices(vec![
            Point::new(x, y),
            Point::new(x + side, y),
            Point::new(x + side, y + side),
            Point::new(x, y + side),
        ])
        .unwrap()
    }

    fn circle(x: f64, y: f64, radius: f64) -> Circle {
        Circle::new(Point::new(x, y), radius).unwrap()
    }

    #[test]
    fn disjoint_squares_do_not_collide() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(2.0, 0.0, 1.0);
        assert!(!a.collides(&b));
        assert!(!b.collides(&a));
    }

    #[test]
    fn overlapping_squares_collide() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(0.5, 0.0, 1.0);
        assert!(a.collides(&b));
        assert!(b.collides(&a));
    }

    #[test]
    fn touching_squares_collide() {
        // Shared edge: projection intervals touch without overlapping.
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);
        assert!(a.collides(&b));
        assert!(b.collides(&a));
    }

    #[test]
    fn polygon_collides_with_itself() {
        let pentagon = ConvexPolygon::from_vertices(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 2.0),
            Point::new(1.0, 3.0),
            Point::new(-1.0, 2.0),
        ])
        .unwrap();
        assert!(pentagon.collides(&pentagon.clone()));
    }

    #[test]
    fn collision_is_symmetric_for_rotated_triangles() {
        let a = ConvexPolygon::from_vertices(vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 1.0),
            Point::new(1.0, 3.0),
        ])
        .unwrap();
        let b = ConvexPolygon::from_vertices(vec![
            Point::new(2.0, 2.0),
            Point::new(5.0, 2.0),
            Point::new(2.0, 5.0),
        ])
        .unwrap();
        let c = ConvexPolygon::from_vertices(vec![
            Point::new(10.0, 10.0),
            Point::new(12.0, 10.0),
            Point::new(10.0, 12.0),
        ])
        .unwrap();
        assert_eq!(a.collides(&b), b.collides(&a));
        assert!(a.collides(&b));
        assert_eq!(a.collides(&c), c.collides(&a));
        assert!(!a.collides(&c));
    }

    #[test]
    fn circle_inside_polygon_collides() {
        let a = square(0.0, 0.0, 4.0);
        assert!(a.collides(&circle(2.0, 2.0, 0.5)));
    }

    #[test]
    fn distant_circle_does_not_collide() {
        let a = square(0.0, 0.0, 1.0);
        let c = circle(5.0, 5.0, 1.0);
        assert!(!a.collides(&c));
        assert!(!c.collides(&a));
    }

    #[test]
    fn circle_tangent_to_edge_collides() {
        // Center at perpendicular distance exactly r from the top edge.
        let a = square(0.0, 0.0, 2.0);
        let tangent = circle(1.0, 3.0, 1.0);
        let separated = circle(1.0, 3.0, 0.9);
        assert!(a.collides(&tangent));
        assert!(!a.collides(&separated));
    }

    #[test]
    fn circle_near_corner_uses_vertex_axis() {
        let a = square(0.0, 0.0, 2.0);
        // Diagonally past the (2, 2) corner. The edge-normal axes alone
        // would report a collision; only the nearest-vertex axis
        // separates the shapes.
        let near = circle(2.5, 2.5, 0.8);
        let far = circle(2.5, 2.5, 0.5);
        assert!(a.collides(&near));
        assert!(!a.collides(&far));
    }

    #[test]
    fn zero_radius_circle_at_vertex_collides() {
        let a = square(0.0, 0.0, 2.0);
        assert!(a.collides(&circle(0.0, 0.0, 0.0)));
        assert!(a.collides(&circle(2.0, 2.0, 0.0)));
    }

    #[test]
    fn zero_radius_circle_outside_does_not_collide() {
        let a = square(0.0, 0.0, 2.0);
        assert!(!a.collides(&circle(3.0, 3.0, 0.0)));
    }
}
