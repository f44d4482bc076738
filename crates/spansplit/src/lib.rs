//! Zero-allocation, forward-only splitting of contiguous buffers.
//!
//! A family of view-producing iterators that partition a read-only buffer
//! into sub-views according to a delimiter strategy — a single element, an
//! exact subsequence, or any element of a set — without copying. Each
//! produced view borrows from the source buffer; the one exception is the
//! [`OverflowPolicy::AppendLastElements`] overflow path of a count-bounded
//! split, which materializes a single owned view.
//!
//! The layers compose as decorators: a [`SplitCursor`] (or [`TextCursor`]
//! for `&str`) drives the scan, `counted` bounds how many views come out,
//! and `with_options` applies trim / drop-empty postprocessing to character
//! buffers.
//!
//! ```rust
//! use spansplit::{TextOptions, split_any_str, split_str};
//!
//! let pieces: Vec<&str> = split_str("a,b,,c", ",").collect();
//! assert_eq!(pieces, ["a", "b", "", "c"]);
//!
//! // An empty set splits at the fixed Unicode whitespace table.
//! let fields: Vec<_> = split_any_str(" pick  three\twords ", &[])
//!     .with_options(TextOptions {
//!         remove_empty_entries: true,
//!         ..Default::default()
//!     })
//!     .collect();
//! assert_eq!(fields, ["pick", "three", "words"]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod counted;
mod cursor;
mod matcher;
mod options;
pub mod select;
mod text;

#[cfg(test)]
mod tests;

pub use counted::CountedSplit;
pub use cursor::{SplitCursor, split, split_any, split_sequence};
pub use matcher::Delimiter;
pub use options::{OverflowPolicy, TextOptions};
pub use select::SelectError;
pub use text::{
    CountedText, Pattern, Postprocess, TextCursor, WHITESPACE, split_any_str, split_char,
    split_str,
};
