//! Count ceiling decorator over the split cursor.

use alloc::borrow::Cow;
use core::iter::FusedIterator;

use crate::{cursor::SplitCursor, options::OverflowPolicy};

/// A count-bounded split over an element buffer.
///
/// Wraps a [`SplitCursor`] and emits at most `max` views, resolving overflow
/// per the configured [`OverflowPolicy`]. Every view is borrowed except the
/// single merged view an [`OverflowPolicy::AppendLastElements`] overflow can
/// produce, which is owned.
///
/// # Examples
///
/// ```rust
/// use std::borrow::Cow;
///
/// use spansplit::{OverflowPolicy, split};
///
/// let pieces: Vec<Cow<'_, [i32]>> =
///     split(&[1, 0, 2, 0, 3], 0).counted(2, OverflowPolicy::CutLastElements).collect();
/// assert_eq!(pieces, [&[1][..], &[2][..]]);
/// ```
#[derive(Debug, Clone)]
pub struct CountedSplit<'a, 'd, T> {
    inner: SplitCursor<'a, 'd, T>,
    produced: usize,
    max: usize,
    policy: OverflowPolicy,
}

impl<'a, 'd, T> SplitCursor<'a, 'd, T> {
    /// Bounds this cursor to at most `max` emitted views, resolving overflow
    /// with `policy`. A `max` of zero produces no views at all.
    #[must_use]
    pub fn counted(self, max: usize, policy: OverflowPolicy) -> CountedSplit<'a, 'd, T> {
        CountedSplit {
            inner: self,
            produced: 0,
            max,
            policy,
        }
    }
}

impl<'a, T: PartialEq + Clone> Iterator for CountedSplit<'a, '_, T> {
    type Item = Cow<'a, [T]>;

    fn next(&mut self) -> Option<Cow<'a, [T]>> {
        if self.produced >= self.max {
            return None;
        }
        if self.policy == OverflowPolicy::AppendLastElements && self.produced + 1 == self.max {
            // The delimiter between the two pieces was already consumed by
            // the wrapped cursor, so merging is plain concatenation.
            let head = self.inner.next()?;
            self.produced = self.max;
            return match self.inner.next() {
                None => Some(Cow::Borrowed(head)),
                Some(tail) => {
                    let mut merged = head.to_vec();
                    merged.extend_from_slice(tail);
                    Some(Cow::Owned(merged))
                }
            };
        }
        let piece = self.inner.next()?;
        self.produced += 1;
        Some(Cow::Borrowed(piece))
    }
}

impl<T: PartialEq + Clone> FusedIterator for CountedSplit<'_, '_, T> {}
