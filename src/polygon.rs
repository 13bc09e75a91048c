//! Polygons with real-valued vertex coordinates.

use serde::{Deserialize, Serialize};

use crate::collide::Collide;
use crate::contains::Contains;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::segment::Segment;
use crate::translate::TranslateMut;
use crate::vector::Vector;
use crate::EPSILON;

/// A polygon, with vertex coordinates given in winding order.
///
/// Vertices are stored in insertion order, which is significant: edges are
/// derived from consecutive vertex pairs, wrapping from the last vertex
/// back to the first. Cloning a polygon produces independent vertex
/// storage, so mutating the clone never affects the original.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon with the given vertices.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TooFewVertices`] if fewer than 3 vertices are
    /// given, and with [`Error::DegenerateEdge`] if two consecutive
    /// vertices (including the wrap-around pair) coincide. Rejecting
    /// zero-length edges at construction keeps [`Polygon::edges`]
    /// infallible.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let triangle = Polygon::new(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(2.0, 0.0),
    ///     Point::new(1.0, 2.0),
    /// ])?;
    /// assert_eq!(triangle.vertices().len(), 3);
    /// assert_eq!(triangle.edges().len(), 3);
    /// # Ok::<(), geometry2d::error::Error>(())
    /// ```
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::TooFewVertices {
                count: vertices.len(),
            });
        }
        for (i, &vertex) in vertices.iter().enumerate() {
            let next = vertices[(i + 1) % vertices.len()];
            if Vector::from_points(vertex, next).norm() < EPSILON {
                return Err(Error::DegenerateEdge);
            }
        }
        Ok(Self { vertices })
    }

    /// Returns the vertices of the polygon, in winding order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Returns the edges of the polygon as segments.
    ///
    /// Edges connect consecutive vertices, wrapping from the last vertex
    /// back to the first.
    pub fn edges(&self) -> Vec<Segment> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, &vertex)| {
                let next = self.vertices[(i + 1) % self.vertices.len()];
                Segment::new_unchecked(vertex, Vector::from_points(vertex, next))
            })
            .collect()
    }
}

impl TranslateMut for Polygon {
    fn translate_mut(&mut self, offset: Vector) {
        self.vertices.translate_mut(offset);
    }
}

impl Contains<Point> for Polygon {
    /// Returns true if `point` lies inside the polygon.
    ///
    /// Uses even-odd ray casting, valid for convex and non-convex
    /// polygons alike.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry2d::prelude::*;
    /// let square = Polygon::new(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(4.0, 0.0),
    ///     Point::new(4.0, 4.0),
    ///     Point::new(0.0, 4.0),
    /// ])?;
    /// assert!(square.contains(&Point::new(2.0, 2.0)));
    /// assert!(!square.contains(&Point::new(5.0, 2.0)));
    /// # Ok::<(), geometry2d::error::Error>(())
    /// ```
    fn contains(&self, point: &Point) -> bool {
        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.y > point.y) != (b.y > point.y) {
                let x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if point.x < x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

impl Collide<Polygon> for Polygon {
    /// Generic polygon overlap test, usable for non-convex polygons.
    ///
    /// Two polygons overlap if any pair of edges crosses, or if either
    /// polygon fully contains the other (detected by testing a single
    /// vertex, since containment without edge crossings is total).
    fn collides(&self, other: &Polygon) -> bool {
        for edge in self.edges() {
            for other_edge in other.edges() {
                if edge.intercepts(&other_edge) && other_edge.intercepts(&edge) {
                    return true;
                }
            }
        }
        self.contains(&other.vertices[0]) || other.contains(&self.vertices[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::Translate;

    fn square(x: f64, y: f64, side: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(x, y),
            Point::new(x + side, y),
            Point::new(x + side, y + side),
            Point::new(x, y + side),
        ])
        .unwrap()
    }

    #[test]
    fn under_three_vertices_is_rejected() {
        assert_eq!(
            Polygon::new(vec![Point::zero(), Point::new(1.0, 0.0)]),
            Err(Error::TooFewVertices { count: 2 })
        );
        assert_eq!(Polygon::new(vec![]), Err(Error::TooFewVertices { count: 0 }));
    }

    #[test]
    fn repeated_consecutive_vertices_are_rejected() {
        assert_eq!(
            Polygon::new(vec![
                Point::zero(),
                Point::zero(),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
            ]),
            Err(Error::DegenerateEdge)
        );
    }

    #[test]
    fn edges_wrap_around() {
        let triangle = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 2.0),
        ])
        .unwrap();
        let edges = triangle.edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].begin(), Point::new(0.0, 2.0));
        assert_eq!(edges[2].end(), Point::new(0.0, 0.0));
    }

    #[test]
    fn ray_casting_handles_concave_polygons() {
        // An L-shaped hexagon with a notch in the upper right.
        let l_shape = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 4.0),
            Point::new(0.0, 4.0),
        ])
        .unwrap();
        assert!(l_shape.contains(&Point::new(1.0, 3.0)));
        assert!(l_shape.contains(&Point::new(3.0, 1.0)));
        assert!(!l_shape.contains(&Point::new(3.0, 3.0)));
    }

    #[test]
    fn overlapping_and_nested_polygons_collide() {
        let a = square(0.0, 0.0, 4.0);
        let b = square(2.0, 2.0, 4.0);
        let inner = square(1.0, 1.0, 1.0);
        let far = square(10.0, 0.0, 1.0);
        assert!(a.collides(&b));
        assert!(a.collides(&inner));
        assert!(inner.collides(&a));
        assert!(!a.collides(&far));
    }

    #[test]
    fn clone_has_independent_vertex_storage() {
        let original = square(0.0, 0.0, 2.0);
        let moved = original.clone().translate(Vector::new(10.0, 0.0));
        assert_eq!(original.vertices()[0], Point::new(0.0, 0.0));
        assert_eq!(moved.vertices()[0], Point::new(10.0, 0.0));
    }
}
