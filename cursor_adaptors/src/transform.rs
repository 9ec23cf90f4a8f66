use crate::Cursor;
use log::trace;
use std::fmt::{Debug, Formatter};

/// A cursor that yields `transform(element)` for each element it passes.
///
/// The transform runs on every [`Cursor::get`] and never on
/// [`Cursor::advance`]. Results are not cached. There is no end bound: stop by
/// comparing against a transform cursor built from the end position.
#[derive(Clone)]
pub struct TransformCursor<F, C> {
    transform: F,
    current: C,
}

impl<F, C> TransformCursor<F, C> {
    pub fn new<R>(transform: F, position: C) -> Self
    where
        C: Cursor,
        F: Fn(C::Item) -> R,
    {
        trace!("Transform cursor created");
        TransformCursor {
            transform,
            current: position,
        }
    }

    /// The position of the wrapped cursor.
    pub fn position(&self) -> &C {
        &self.current
    }
}

impl<R, F: Fn(C::Item) -> R, C: Cursor> Cursor for TransformCursor<F, C> {
    type Item = R;

    fn get(&self) -> R {
        (self.transform)(self.current.get())
    }

    fn advance(&mut self) -> &mut Self {
        self.current.advance();
        self
    }
}

impl<F, G, C: PartialEq> PartialEq<TransformCursor<G, C>> for TransformCursor<F, C> {
    fn eq(&self, other: &TransformCursor<G, C>) -> bool {
        self.current == other.current
    }
}

impl<F, C: Debug> Debug for TransformCursor<F, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformCursor")
            .field("current", &self.current)
            .finish()
    }
}

/// Builds a [`TransformCursor`] at `position`, inferring its type.
pub fn make_transform_cursor<R, F, C>(transform: F, position: C) -> TransformCursor<F, C>
where
    C: Cursor,
    F: Fn(C::Item) -> R,
{
    TransformCursor::new(transform, position)
}

#[cfg(test)]
mod tests {
    use crate::*;
    use std::cell::Cell;

    #[test]
    fn test_starts_at_position() {
        let values = [1, 2, 3];
        let mut start = SliceCursor::begin(&values);
        start.advance();
        let cursor = make_transform_cursor(|x: &i32| x * 10, start);
        assert_eq!(cursor.position().index(), 1);
        assert_eq!(cursor.get(), 20);
    }

    #[test]
    fn test_construction_is_lazy() {
        let calls = Cell::new(0);
        let values = [1, 2, 3];
        let _cursor = make_transform_cursor(
            |x: &i32| {
                calls.set(calls.get() + 1);
                *x
            },
            SliceCursor::begin(&values),
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_changes_item_type() {
        let values = ["a", "bb", "ccc"];
        let mut cursor = make_transform_cursor(|s: &&str| s.len(), SliceCursor::begin(&values));
        assert_eq!(cursor.get(), 1);
        cursor.advance().advance();
        assert_eq!(cursor.get(), 3);
    }

    #[test]
    fn test_equality_ignores_transform() {
        let values = [1, 2, 3];
        let doubled = make_transform_cursor(|x: &i32| x * 2, SliceCursor::begin(&values));
        let negated = make_transform_cursor(|x: &i32| -x, SliceCursor::begin(&values));
        assert!(doubled == negated);

        let mut moved = doubled.clone();
        moved.advance();
        assert!(moved != doubled);
        assert!(moved != negated);
    }

    #[test]
    fn test_method_syntax() {
        let values = [4, 5];
        let cursor = SliceCursor::begin(&values).transform(|x| x + 1);
        assert_eq!(cursor.get(), 5);
    }
}
