//! Iterators for Maybe

use core::iter::FusedIterator;

use super::Maybe;

/// Iterator over a reference to the payload of a [`Maybe`], if present.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    next: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(next: Option<&'a T>) -> Self {
        Iter { next }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Yield the payload once, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        self.next.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.next.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the payload of a [`Maybe`], if present.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    next: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.next.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            next: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator adaptor yielding the payloads of present values, in order, and
/// skipping absent ones.
#[derive(Debug, Clone)]
pub struct Present<I> {
    iter: I,
}

impl<T, I> Iterator for Present<I>
where
    I: Iterator<Item = Maybe<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(v) = self.iter.next()?.into_option() {
                return Some(v);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<T, I> DoubleEndedIterator for Present<I>
where
    I: DoubleEndedIterator<Item = Maybe<T>>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(v) = self.iter.next_back()?.into_option() {
                return Some(v);
            }
        }
    }
}

impl<T, I> FusedIterator for Present<I> where I: FusedIterator<Item = Maybe<T>> {}

/// Flatten a sequence of [`Maybe`] into the payloads of its present values.
///
/// ```
/// use optmatch::{flatten, Maybe};
///
/// let values = [Maybe::some(1), Maybe::none(), Maybe::some(3)];
/// assert_eq!(flatten(values).collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub fn flatten<T, I>(iter: I) -> Present<I::IntoIter>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    Present {
        iter: iter.into_iter(),
    }
}

/// Extension methods for iterators of [`Maybe`].
pub trait MaybeIterExt<T>: Iterator<Item = Maybe<T>> + Sized {
    /// See [`flatten`].
    fn present(self) -> Present<Self> {
        Present { iter: self }
    }
}

impl<T, I> MaybeIterExt<T> for I where I: Iterator<Item = Maybe<T>> {}
