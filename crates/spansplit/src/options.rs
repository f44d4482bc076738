/// How a count-bounded split resolves content beyond its ceiling.
///
/// A counted iterator never emits more views than its ceiling allows; this
/// policy decides what happens to the source content that the ceiling cuts
/// off.
///
/// # Default
///
/// [`OverflowPolicy::CutLastElements`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverflowPolicy {
    /// Stop emitting once the ceiling is reached. Remaining delimiters are
    /// ignored and everything after the last emitted view is discarded.
    #[default]
    CutLastElements,

    /// When one view short of the ceiling, merge the current piece and the
    /// next piece into a single final view, dropping the delimiter between
    /// them, then stop. This is the only path in the engine that allocates:
    /// the two source pieces are no longer contiguous once the delimiter is
    /// excised, so the merged view is materialized as an owned buffer.
    AppendLastElements,
}

/// Post-processing applied to each view produced from a character buffer.
///
/// Both toggles are independent and both default to off. They are applied in
/// order: a view is trimmed first, and only then tested for emptiness.
///
/// # Examples
///
/// ```rust
/// use spansplit::{TextOptions, split_any_str};
///
/// let fields: Vec<_> = split_any_str("  a  b ", &[])
///     .with_options(TextOptions {
///         remove_empty_entries: true,
///         ..Default::default()
///     })
///     .collect();
/// assert_eq!(fields, ["a", "b"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextOptions {
    /// Strip leading and trailing whitespace (the fixed
    /// [`WHITESPACE`](crate::WHITESPACE) set) from each view before it is
    /// handed to the caller.
    ///
    /// # Default
    ///
    /// `false`
    pub trim_entries: bool,

    /// Skip views that are empty after any trimming, instead of emitting
    /// them.
    ///
    /// # Default
    ///
    /// `false`
    pub remove_empty_entries: bool,
}
