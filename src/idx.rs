use std::{fmt, marker::PhantomData, num::NonZeroUsize, ops};

/// A typed handle into one of the arenas (`Vec<T>`) owned by a builder.
///
/// Stored off by one so `Option<Idx<T>>` stays pointer sized.
pub struct Idx<T> {
    slot: NonZeroUsize,
    _arena: PhantomData<fn() -> T>,
}

impl<T> Idx<T> {
    pub fn new(index: usize) -> Self {
        // Saturates for `usize::MAX`, which no arena can reach, so the handle indexes out of bounds
        let slot = NonZeroUsize::MIN.saturating_add(index);
        Self { slot, _arena: PhantomData }
    }

    pub fn usize(&self) -> usize {
        self.slot.get() - 1
    }
}

/// How handles into an arena of `Self` are printed, e.g. `t3` for trapezoids
pub trait IdxDisplay {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result;
}

impl<T: IdxDisplay> fmt::Display for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::fmt(f, self.usize())
    }
}

impl<T> fmt::Debug for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.usize())
    }
}

// Written out so `T` needs none of these traits itself
impl<T> Clone for Idx<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Idx<T> { }

impl<T> PartialEq for Idx<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T> Eq for Idx<T> { }

impl<T> ops::Index<Idx<T>> for [T] {
    type Output = T;

    fn index(&self, idx: Idx<T>) -> &T {
        &self[idx.usize()]
    }
}

impl<T> ops::IndexMut<Idx<T>> for [T] {
    fn index_mut(&mut self, idx: Idx<T>) -> &mut T {
        &mut self[idx.usize()]
    }
}

impl<T> ops::Index<Idx<T>> for Vec<T> {
    type Output = T;

    fn index(&self, idx: Idx<T>) -> &T {
        &self.as_slice()[idx]
    }
}

impl<T> ops::IndexMut<Idx<T>> for Vec<T> {
    fn index_mut(&mut self, idx: Idx<T>) -> &mut T {
        &mut self.as_mut_slice()[idx]
    }
}

pub trait SliceExt<T> {
    /// Handles to every element, detached from the borrow of the arena
    fn iter_index(&self) -> SliceIndexIter<T>;
}

impl<T> SliceExt<T> for [T] {
    fn iter_index(&self) -> SliceIndexIter<T> {
        SliceIndexIter { range: 0..self.len(), _arena: PhantomData }
    }
}

impl<T> SliceExt<T> for Vec<T> {
    fn iter_index(&self) -> SliceIndexIter<T> {
        self.as_slice().iter_index()
    }
}

pub trait VecExt<T>: SliceExt<T> {
    fn push_get_index(&mut self, value: T) -> Idx<T>;

    /// The handle the next pushed element will get
    fn next_index(&self) -> Idx<T>;
}

impl<T> VecExt<T> for Vec<T> {
    fn push_get_index(&mut self, value: T) -> Idx<T> {
        let idx = self.next_index();
        self.push(value);
        idx
    }

    fn next_index(&self) -> Idx<T> {
        Idx::new(self.len())
    }
}

pub struct SliceIndexIter<T> {
    range: ops::Range<usize>,
    _arena: PhantomData<fn() -> T>,
}

impl<T> Iterator for SliceIndexIter<T> {
    type Item = Idx<T>;

    fn next(&mut self) -> Option<Idx<T>> {
        self.range.next().map(Idx::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<T> ExactSizeIterator for SliceIndexIter<T> { }
