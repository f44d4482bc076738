//! Character-buffer splitting: patterns, the whitespace set, and the trim /
//! drop-empty postprocessing layer.
//!
//! The text engine mirrors the element engine in `cursor`/`counted` but works
//! on `&str` with byte offsets. Sequence and single-char matches go through
//! `bstr`'s accelerated searchers; char-set matches walk `char_indices`,
//! because a set may contain non-ASCII code points for which a byte-level
//! table would be incorrect. All match offsets land on `char` boundaries by
//! construction (a valid UTF-8 needle can only occur at a boundary of a valid
//! UTF-8 haystack), so re-slicing the source is safe and borrow-only.

use alloc::{borrow::Cow, string::String};
use core::iter::FusedIterator;

use bstr::ByteSlice;

use crate::{
    matcher::Hit,
    options::{OverflowPolicy, TextOptions},
};

/// The fixed, ordered set of Unicode whitespace code points used for the
/// empty-set substitution in [`split_any_str`] and for
/// [`TextOptions::trim_entries`]: space, tab, line feed, vertical tab, form
/// feed, carriage return, NEL, NBSP, and the `Zs`/line/paragraph separators
/// through U+3000.
pub const WHITESPACE: &[char] = &[
    ' ', '\t', '\n', '\u{000B}', '\u{000C}', '\r', '\u{0085}', '\u{00A0}', '\u{1680}', '\u{2000}',
    '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}', '\u{2007}', '\u{2008}',
    '\u{2009}', '\u{200A}', '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}', '\u{3000}',
];

/// A delimiter strategy for splitting character buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern<'d> {
    /// Split at every occurrence of the given char.
    Char(char),

    /// Split at every occurrence of the given substring. An empty substring
    /// never matches.
    Sequence(&'d str),

    /// Split at every char contained in the given set. An empty set matches
    /// nothing here; the whitespace substitution is performed by the
    /// [`split_any_str`] constructor, not by the pattern itself.
    AnyOf(&'d [char]),
}

impl Pattern<'_> {
    fn find(&self, haystack: &str) -> Option<Hit> {
        match self {
            Pattern::Char(ch) => haystack.as_bytes().find_char(*ch).map(|start| Hit {
                start,
                len: ch.len_utf8(),
            }),
            Pattern::Sequence(needle) => {
                if needle.is_empty() {
                    return None;
                }
                haystack.as_bytes().find(needle).map(|start| Hit {
                    start,
                    len: needle.len(),
                })
            }
            Pattern::AnyOf(set) => haystack
                .char_indices()
                .find(|(_, ch)| set.contains(ch))
                .map(|(start, ch)| Hit {
                    start,
                    len: ch.len_utf8(),
                }),
        }
    }
}

/// A forward-only iterator over the pieces of a character buffer, delimited
/// by a [`Pattern`].
///
/// Same state machine and emission shape as
/// [`SplitCursor`](crate::SplitCursor): N delimiter occurrences yield N+1
/// borrowed pieces, an empty source yields none.
#[derive(Debug, Clone)]
pub struct TextCursor<'a, 'd> {
    remaining: &'a str,
    pattern: Pattern<'d>,
    done: bool,
}

impl<'a, 'd> TextCursor<'a, 'd> {
    /// Creates a cursor over `source` with the given pattern.
    #[must_use]
    pub fn new(source: &'a str, pattern: Pattern<'d>) -> Self {
        Self {
            remaining: source,
            pattern,
            done: source.is_empty(),
        }
    }

    /// Bounds this cursor to at most `max` emitted views, resolving overflow
    /// with `policy`. A `max` of zero produces no views at all.
    #[must_use]
    pub fn counted(self, max: usize, policy: OverflowPolicy) -> CountedText<'a, 'd> {
        CountedText {
            inner: self,
            produced: 0,
            max,
            policy,
        }
    }

    /// Applies trim / drop-empty postprocessing to every emitted view.
    #[must_use]
    pub fn with_options(self, options: TextOptions) -> Postprocess<'a, 'd> {
        Postprocess {
            inner: Pieces::Plain(self),
            options,
        }
    }
}

impl<'a> Iterator for TextCursor<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }
        match self.pattern.find(self.remaining) {
            Some(hit) => {
                let piece = &self.remaining[..hit.start];
                self.remaining = &self.remaining[hit.start + hit.len..];
                Some(piece)
            }
            None => {
                self.done = true;
                let piece = self.remaining;
                self.remaining = "";
                Some(piece)
            }
        }
    }
}

impl FusedIterator for TextCursor<'_, '_> {}

/// A count-bounded split over a character buffer.
///
/// The text counterpart of [`CountedSplit`](crate::CountedSplit): at most
/// `max` views, all borrowed except the one owned view an
/// [`OverflowPolicy::AppendLastElements`] overflow can produce.
#[derive(Debug, Clone)]
pub struct CountedText<'a, 'd> {
    inner: TextCursor<'a, 'd>,
    produced: usize,
    max: usize,
    policy: OverflowPolicy,
}

impl<'a, 'd> CountedText<'a, 'd> {
    /// Applies trim / drop-empty postprocessing to every emitted view.
    ///
    /// Note that the ceiling is consumed by what the wrapped cursor emits:
    /// a piece dropped here as empty still counted toward `max`.
    #[must_use]
    pub fn with_options(self, options: TextOptions) -> Postprocess<'a, 'd> {
        Postprocess {
            inner: Pieces::Counted(self),
            options,
        }
    }
}

impl<'a> Iterator for CountedText<'a, '_> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Cow<'a, str>> {
        if self.produced >= self.max {
            return None;
        }
        if self.policy == OverflowPolicy::AppendLastElements && self.produced + 1 == self.max {
            let head = self.inner.next()?;
            self.produced = self.max;
            return match self.inner.next() {
                None => Some(Cow::Borrowed(head)),
                Some(tail) => {
                    let mut merged = String::with_capacity(head.len() + tail.len());
                    merged.push_str(head);
                    merged.push_str(tail);
                    Some(Cow::Owned(merged))
                }
            };
        }
        let piece = self.inner.next()?;
        self.produced += 1;
        Some(Cow::Borrowed(piece))
    }
}

impl FusedIterator for CountedText<'_, '_> {}

#[derive(Debug, Clone)]
enum Pieces<'a, 'd> {
    Plain(TextCursor<'a, 'd>),
    Counted(CountedText<'a, 'd>),
}

impl<'a> Iterator for Pieces<'a, '_> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Cow<'a, str>> {
        match self {
            Pieces::Plain(cursor) => cursor.next().map(Cow::Borrowed),
            Pieces::Counted(counted) => counted.next(),
        }
    }
}

/// The trim / drop-empty postprocessing decorator over a plain or counted
/// text split.
///
/// Applies [`TextOptions`] to every emission of the wrapped iterator,
/// including the final no-match piece and any append-merged piece. Dropping
/// empties loops to the next wrapped emission; the wrapped cursor strictly
/// shrinks its remaining input, so the loop always terminates.
#[derive(Debug, Clone)]
pub struct Postprocess<'a, 'd> {
    inner: Pieces<'a, 'd>,
    options: TextOptions,
}

impl<'a> Iterator for Postprocess<'a, '_> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Cow<'a, str>> {
        loop {
            let mut piece = self.inner.next()?;
            if self.options.trim_entries {
                piece = trim_cow(piece);
            }
            if self.options.remove_empty_entries && piece.is_empty() {
                continue;
            }
            return Some(piece);
        }
    }
}

impl FusedIterator for Postprocess<'_, '_> {}

fn trim_text(text: &str) -> &str {
    text.trim_matches(|ch: char| WHITESPACE.contains(&ch))
}

fn trim_cow(piece: Cow<'_, str>) -> Cow<'_, str> {
    match piece {
        Cow::Borrowed(text) => Cow::Borrowed(trim_text(text)),
        Cow::Owned(text) => {
            let trimmed = trim_text(&text);
            if trimmed.len() == text.len() {
                Cow::Owned(text)
            } else {
                Cow::Owned(String::from(trimmed))
            }
        }
    }
}

/// Splits `source` at every occurrence of the substring `delimiter`. An
/// empty `delimiter` never matches, so the whole buffer comes back as a
/// single piece.
///
/// # Examples
///
/// ```rust
/// let pieces: Vec<&str> = spansplit::split_str("a,b,,c", ",").collect();
/// assert_eq!(pieces, ["a", "b", "", "c"]);
/// ```
#[must_use]
pub fn split_str<'a, 'd>(source: &'a str, delimiter: &'d str) -> TextCursor<'a, 'd> {
    TextCursor::new(source, Pattern::Sequence(delimiter))
}

/// Splits `source` at every occurrence of the char `delimiter`.
#[must_use]
pub fn split_char(source: &str, delimiter: char) -> TextCursor<'_, 'static> {
    TextCursor::new(source, Pattern::Char(delimiter))
}

/// Splits `source` at every char contained in `delimiters`. An empty set is
/// substituted with the fixed [`WHITESPACE`] set, so `split_any_str(s, &[])`
/// splits at every whitespace char.
#[must_use]
pub fn split_any_str<'a, 'd>(source: &'a str, delimiters: &'d [char]) -> TextCursor<'a, 'd> {
    let set = if delimiters.is_empty() {
        WHITESPACE
    } else {
        delimiters
    };
    TextCursor::new(source, Pattern::AnyOf(set))
}
