//! Boolean collision queries between shapes.

/// Trait for testing whether two shapes overlap.
///
/// Implementations are symmetric where both orderings exist:
/// `a.collides(&b) == b.collides(&a)`.
pub trait Collide<T: ?Sized> {
    /// Returns true if this shape and `other` overlap.
    ///
    /// Touching boundaries count as overlap.
    fn collides(&self, other: &T) -> bool;
}
