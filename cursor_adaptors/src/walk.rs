use crate::Cursor;
use std::iter::FusedIterator;

/// Iterates from a cursor up to, but not including, an end cursor.
#[derive(Clone, Debug)]
pub struct Walk<C> {
    current: C,
    end: C,
}

pub fn walk<C: Cursor + PartialEq>(begin: C, end: C) -> Walk<C> {
    Walk {
        current: begin,
        end,
    }
}

impl<C: Cursor + PartialEq> Iterator for Walk<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.current == self.end {
            return None;
        }
        let item = self.current.get();
        self.current.advance();
        Some(item)
    }
}

impl<C: Cursor + PartialEq> FusedIterator for Walk<C> {}
