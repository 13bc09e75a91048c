//! 2-D computational geometry with convex collision detection.
//!
//! Points, vectors, lines, segments, polygons and circles, plus collision
//! detection between convex shapes via the separating axis theorem.
//!
//! # Examples
//!
//! Test two convex polygons for overlap:
//!
//! ```
//! # use geometry2d::prelude::*;
//! let a = ConvexPolygon::from_vertices(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ])?;
//! let b = ConvexPolygon::from_vertices(vec![
//!     Point::new(2.0, 0.0),
//!     Point::new(3.0, 0.0),
//!     Point::new(3.0, 1.0),
//!     Point::new(2.0, 1.0),
//! ])?;
//! assert!(!a.collides(&b));
//! # Ok::<(), geometry2d::error::Error>(())
//! ```
#![warn(missing_docs)]

pub mod circle;
pub mod collide;
pub mod contains;
pub mod convex;
pub mod error;
pub mod intersect;
pub mod line;
pub mod point;
pub mod polygon;
pub mod prelude;
pub mod segment;
pub mod shape;
pub mod translate;
pub mod vector;

/// Tolerance used in place of exact equality for floating-point
/// collinearity and parallelism tests.
pub const EPSILON: f64 = 1e-9;
