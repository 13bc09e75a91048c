//! Containment tests between geometric objects.

/// Trait for testing whether a geometric object contains another.
pub trait Contains<T: ?Sized> {
    /// Returns true if `other` lies on or within this object.
    fn contains(&self, other: &T) -> bool;
}

impl<T, U> Contains<U> for &T
where
    T: Contains<U>,
{
    fn contains(&self, other: &U) -> bool {
        T::contains(*self, other)
    }
}
