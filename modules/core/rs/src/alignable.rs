use derive_getters::Dissolve;
use derive_more::Constructor;

/// Read-only, randomly accessible sequence of symbols that can be fed to the aligners.
pub trait Alignable {
    type Symbol;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize;

    /// Symbol at the given position. Must be O(1).
    fn at(&self, pos: usize) -> &Self::Symbol;

    /// View of the same symbols in the reversed order.
    fn reversed(&self) -> Reversed<'_, Self>
    where
        Self: Sized,
    {
        Reversed::new(self)
    }
}

impl<T: Copy> Alignable for &[T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T: Copy> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

/// Reversed view over an alignable object. Position `0` refers to the last symbol of the base.
#[derive(Dissolve, Constructor, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reversed<'a, T: Alignable> {
    base: &'a T,
}

impl<T: Alignable> Alignable for Reversed<'_, T> {
    type Symbol = T::Symbol;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.base.len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        self.base.at(self.base.len() - pos - 1)
    }
}
