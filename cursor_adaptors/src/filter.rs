use crate::Cursor;
use log::trace;
use std::fmt::{Debug, Formatter};

/// A cursor that only stops on elements accepted by a predicate.
///
/// Outside of its own methods the cursor is always either at `end` or on an
/// element for which the predicate holds. Construction already skips to the
/// first accepted element, so a fresh cursor can be read right away.
#[derive(Clone)]
pub struct FilterCursor<P, C> {
    predicate: P,
    current: C,
    end: C,
}

impl<P: Fn(&C::Item) -> bool, C: Cursor + PartialEq> FilterCursor<P, C> {
    pub fn new(predicate: P, begin: C, end: C) -> Self {
        let mut filter = FilterCursor {
            predicate,
            current: begin,
            end,
        };
        let mut skipped = 0usize;
        while !filter.is_at_end() && !filter.accepts_current() {
            filter.current.advance();
            skipped += 1;
        }
        trace!("Filter cursor created, skipped {} positions", skipped);
        filter
    }

    fn accepts_current(&self) -> bool {
        (self.predicate)(&self.current.get())
    }

    pub fn is_at_end(&self) -> bool {
        self.current == self.end
    }
}

impl<P, C> FilterCursor<P, C> {
    /// The position of the wrapped cursor.
    pub fn position(&self) -> &C {
        &self.current
    }
}

impl<P: Fn(&C::Item) -> bool, C: Cursor + PartialEq> Cursor for FilterCursor<P, C> {
    type Item = C::Item;

    /// # Panics
    ///
    /// In debug builds, if the cursor is at its end or the predicate rejects
    /// the current element.
    fn get(&self) -> C::Item {
        debug_assert!(!self.is_at_end(), "read from a filter cursor at its end");
        let item = self.current.get();
        debug_assert!(
            (self.predicate)(&item),
            "filter cursor positioned on a rejected element"
        );
        item
    }

    /// Steps forward to the next accepted element, or to `end`.
    ///
    /// # Panics
    ///
    /// In debug builds, if the cursor is already at its end. Release builds
    /// leave the cursor where it is.
    fn advance(&mut self) -> &mut Self {
        debug_assert!(!self.is_at_end(), "advanced a filter cursor past its end");
        while !self.is_at_end() {
            self.current.advance();
            if self.is_at_end() || self.accepts_current() {
                break;
            }
        }
        self
    }
}

impl<P, Q, C: PartialEq> PartialEq<FilterCursor<Q, C>> for FilterCursor<P, C> {
    fn eq(&self, other: &FilterCursor<Q, C>) -> bool {
        self.current == other.current
    }
}

impl<P, C: Debug> Debug for FilterCursor<P, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterCursor")
            .field("current", &self.current)
            .field("end", &self.end)
            .finish()
    }
}

/// Builds a [`FilterCursor`] over `begin..end`, inferring its type.
pub fn make_filter_cursor<P, C>(predicate: P, begin: C, end: C) -> FilterCursor<P, C>
where
    C: Cursor + PartialEq,
    P: Fn(&C::Item) -> bool,
{
    FilterCursor::new(predicate, begin, end)
}
