//! The core split state machine.
//!
//! A [`SplitCursor`] owns a shrinking window over the source buffer and a
//! [`Delimiter`] strategy. Each call to `next` either locates the earliest
//! match and yields the piece before it, or yields everything left as the
//! final piece and becomes exhausted.
//!
//! Invariants
//! - `remaining` never re-grows; every emission shrinks it by at least the
//!   matched delimiter length plus one element, or consumes all of it. This
//!   bounds every traversal by the source length.
//! - N delimiter occurrences produce exactly N+1 pieces, including an empty
//!   leading piece when the buffer starts with a delimiter and an empty
//!   trailing piece when it ends with one. The one exception is an empty
//!   source, which produces no pieces at all and is decided at construction.
//! - Every yielded piece borrows from the source buffer; the cursor never
//!   copies.

use core::iter::FusedIterator;

use crate::matcher::Delimiter;

/// A forward-only iterator over the pieces of a buffer, delimited by a
/// [`Delimiter`] strategy.
///
/// Constructed by [`split`], [`split_sequence`], [`split_any`], or
/// [`SplitCursor::new`]. The cursor is single-use: to traverse again,
/// construct a new one.
///
/// # Examples
///
/// ```rust
/// use spansplit::split;
///
/// let pieces: Vec<&[i32]> = split(&[1, 2, 0, 3], 0).collect();
/// assert_eq!(pieces, [&[1, 2][..], &[3][..]]);
/// ```
#[derive(Debug, Clone)]
pub struct SplitCursor<'a, 'd, T> {
    remaining: &'a [T],
    delimiter: Delimiter<'d, T>,
    done: bool,
}

impl<'a, 'd, T> SplitCursor<'a, 'd, T> {
    /// Creates a cursor over `source` with the given delimiter strategy.
    #[must_use]
    pub fn new(source: &'a [T], delimiter: Delimiter<'d, T>) -> Self {
        Self {
            remaining: source,
            delimiter,
            done: source.is_empty(),
        }
    }
}

impl<'a, T: PartialEq> Iterator for SplitCursor<'a, '_, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<&'a [T]> {
        if self.done {
            return None;
        }
        match self.delimiter.find(self.remaining) {
            Some(hit) => {
                let piece = &self.remaining[..hit.start];
                self.remaining = &self.remaining[hit.start + hit.len..];
                Some(piece)
            }
            None => {
                self.done = true;
                let piece = self.remaining;
                self.remaining = &[];
                Some(piece)
            }
        }
    }
}

impl<T: PartialEq> FusedIterator for SplitCursor<'_, '_, T> {}

/// Splits `source` at every element equal to `delimiter`.
#[must_use]
pub fn split<T: PartialEq>(source: &[T], delimiter: T) -> SplitCursor<'_, 'static, T> {
    SplitCursor::new(source, Delimiter::Single(delimiter))
}

/// Splits `source` at every occurrence of the contiguous subsequence
/// `delimiter`. An empty `delimiter` never matches.
#[must_use]
pub fn split_sequence<'a, 'd, T: PartialEq>(
    source: &'a [T],
    delimiter: &'d [T],
) -> SplitCursor<'a, 'd, T> {
    SplitCursor::new(source, Delimiter::Sequence(delimiter))
}

/// Splits `source` at every element contained in `delimiters`. An empty set
/// matches nothing; for character buffers with a whitespace default, see
/// [`split_any_str`](crate::split_any_str).
#[must_use]
pub fn split_any<'a, 'd, T: PartialEq>(
    source: &'a [T],
    delimiters: &'d [T],
) -> SplitCursor<'a, 'd, T> {
    SplitCursor::new(source, Delimiter::AnyOf(delimiters))
}
