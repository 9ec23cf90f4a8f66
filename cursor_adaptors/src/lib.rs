//! Lazy cursor adaptors.
//!
//! A [`Cursor`] is a position inside a sequence: it can be read, moved one
//! step forward and compared with another position. Termination is decided by
//! comparing against a separately obtained end position, not by the cursor
//! itself.
//!
//! [`FilterCursor`] and [`TransformCursor`] wrap an existing cursor and expose
//! a filtered or transformed view of the sequence without building an
//! intermediate container. Both are cursors again, so they compose.
//!
//! ```
//! use cursor_adaptors::*;
//!
//! let values = [1, 2, 3, 4, 5, 6];
//! let even = |x: &&i32| **x % 2 == 0;
//! let begin = make_filter_cursor(even, SliceCursor::begin(&values), SliceCursor::end(&values));
//! let end = make_filter_cursor(even, SliceCursor::end(&values), SliceCursor::end(&values));
//! let square = |x: &i32| x * x;
//! let squares: Vec<i32> = walk(
//!     make_transform_cursor(square, begin),
//!     make_transform_cursor(square, end),
//! )
//! .collect();
//! assert_eq!(squares, vec![4, 16, 36]);
//! ```

pub use crate::filter::{make_filter_cursor, FilterCursor};
pub use crate::slice::SliceCursor;
pub use crate::transform::{make_transform_cursor, TransformCursor};
pub use crate::walk::{walk, Walk};

mod filter;
mod slice;
mod transform;
mod walk;


/// A position in a sequence.
///
/// Reading and advancing a cursor that sits at the end of its sequence is a
/// contract violation. Implementations check this with debug assertions only.
pub trait Cursor {
    type Item;

    /// Reads the element at the current position.
    fn get(&self) -> Self::Item;

    /// Moves one position forward.
    fn advance(&mut self) -> &mut Self;
}

pub trait CursorExt: Cursor {
    fn filter<P>(self, predicate: P, end: Self) -> FilterCursor<P, Self>
    where
        Self: Sized + PartialEq,
        P: Fn(&Self::Item) -> bool,
    {
        FilterCursor::new(predicate, self, end)
    }

    fn transform<R, F>(self, transform: F) -> TransformCursor<F, Self>
    where
        Self: Sized,
        F: Fn(Self::Item) -> R,
    {
        TransformCursor::new(transform, self)
    }
}

impl<C: Cursor> CursorExt for C {}
