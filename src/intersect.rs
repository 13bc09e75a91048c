//! Intersections of geometric objects.

/// Trait for calculating the intersection with another geometric object.
pub trait Intersect<T: ?Sized> {
    /// The type of the output representing the intersection.
    type Output;
    /// Calculates the intersection of this object with `other`.
    ///
    /// Returns [`None`] when the two objects do not intersect.
    fn intersect(&self, other: &T) -> Option<Self::Output>;
}
