//! Translation of geometric objects by a [`Vector`].

use crate::vector::Vector;

/// A trait for specifying how a shape is translated by a [`Vector`].
pub trait TranslateMut {
    /// Translates the shape by a [`Vector`] through mutation.
    fn translate_mut(&mut self, offset: Vector);
}

impl<T: TranslateMut> TranslateMut for Vec<T> {
    fn translate_mut(&mut self, offset: Vector) {
        for i in self.iter_mut() {
            i.translate_mut(offset);
        }
    }
}

impl<T: TranslateMut> TranslateMut for Option<T> {
    fn translate_mut(&mut self, offset: Vector) {
        if let Some(inner) = self.as_mut() {
            inner.translate_mut(offset);
        }
    }
}

/// A trait for specifying how a shape is translated by a [`Vector`].
///
/// Takes in an owned copy of the shape and returns the translated version.
pub trait Translate: TranslateMut + Sized {
    /// Creates a new shape at a location equal to the translation of the original.
    fn translate(mut self, offset: Vector) -> Self {
        self.translate_mut(offset);
        self
    }
}

impl<T: TranslateMut + Sized> Translate for T {}
