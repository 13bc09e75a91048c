//! An import prelude that re-exports commonly used items.

pub use crate::circle::Circle;
pub use crate::collide::Collide;
pub use crate::contains::Contains;
pub use crate::convex::ConvexPolygon;
pub use crate::error::{Error, Result};
pub use crate::intersect::Intersect;
pub use crate::line::Line;
pub use crate::point::Point;
pub use crate::polygon::Polygon;
pub use crate::segment::Segment;
pub use crate::shape::Shape;
pub use crate::translate::{Translate, TranslateMut};
pub use crate::vector::Vector;
