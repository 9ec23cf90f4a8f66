use crate::Cursor;
use std::fmt::{Debug, Formatter};

/// A position inside a borrowed slice.
///
/// Two slice cursors are equal when they point into the same slice at the
/// same index.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn begin(slice: &'a [T]) -> Self {
        Self { slice, index: 0 }
    }

    pub fn end(slice: &'a [T]) -> Self {
        Self {
            slice,
            index: slice.len(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    fn get(&self) -> &'a T {
        debug_assert!(self.index < self.slice.len(), "read from a slice cursor at its end");
        &self.slice[self.index]
    }

    fn advance(&mut self) -> &mut Self {
        debug_assert!(self.index < self.slice.len(), "advanced a slice cursor past its end");
        self.index += 1;
        self
    }
}

impl<'a, T> Clone for SliceCursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SliceCursor<'a, T> {}

impl<'a, T> PartialEq for SliceCursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice, other.slice) && self.index == other.index
    }
}

impl<'a, T> Eq for SliceCursor<'a, T> {}

impl<'a, T> Debug for SliceCursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SliceCursor {{ index: {}, len: {} }}", self.index, self.slice.len())
    }
}
