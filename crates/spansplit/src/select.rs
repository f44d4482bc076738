//! Extremum and single-element selection over contiguous buffers.
//!
//! Simple scalar scans; every helper rejects inputs it has no answer for via
//! [`SelectError`] rather than panicking.

use thiserror::Error;

/// Why a selection helper could not produce an element.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// The buffer holds no elements to select from.
    #[error("buffer is empty")]
    EmptyBuffer,

    /// No element satisfied the predicate.
    #[error("no element satisfied the predicate")]
    NoMatch,

    /// More than one element was eligible where exactly one was required.
    #[error("more than one element was eligible")]
    Ambiguous,
}

/// Returns the minimum element of `source`.
///
/// # Errors
///
/// [`SelectError::EmptyBuffer`] if `source` is empty.
pub fn min<T: PartialOrd>(source: &[T]) -> Result<&T, SelectError> {
    let (first, rest) = source.split_first().ok_or(SelectError::EmptyBuffer)?;
    let mut min = first;
    for candidate in rest {
        if candidate < min {
            min = candidate;
        }
    }
    Ok(min)
}

/// Returns the maximum element of `source`.
///
/// # Errors
///
/// [`SelectError::EmptyBuffer`] if `source` is empty.
pub fn max<T: PartialOrd>(source: &[T]) -> Result<&T, SelectError> {
    let (first, rest) = source.split_first().ok_or(SelectError::EmptyBuffer)?;
    let mut max = first;
    for candidate in rest {
        if candidate > max {
            max = candidate;
        }
    }
    Ok(max)
}

/// Applies `key` to each element of `source` and returns the minimum
/// resulting value.
///
/// # Errors
///
/// [`SelectError::EmptyBuffer`] if `source` is empty.
pub fn min_by_key<T, K, F>(source: &[T], mut key: F) -> Result<K, SelectError>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let (first, rest) = source.split_first().ok_or(SelectError::EmptyBuffer)?;
    let mut min = key(first);
    for candidate in rest {
        let value = key(candidate);
        if value < min {
            min = value;
        }
    }
    Ok(min)
}

/// Applies `key` to each element of `source` and returns the maximum
/// resulting value.
///
/// # Errors
///
/// [`SelectError::EmptyBuffer`] if `source` is empty.
pub fn max_by_key<T, K, F>(source: &[T], mut key: F) -> Result<K, SelectError>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let (first, rest) = source.split_first().ok_or(SelectError::EmptyBuffer)?;
    let mut max = key(first);
    for candidate in rest {
        let value = key(candidate);
        if value > max {
            max = value;
        }
    }
    Ok(max)
}

/// Returns the only element of `source`.
///
/// # Errors
///
/// [`SelectError::EmptyBuffer`] if `source` is empty,
/// [`SelectError::Ambiguous`] if it holds more than one element.
pub fn single<T>(source: &[T]) -> Result<&T, SelectError> {
    match source {
        [only] => Ok(only),
        [] => Err(SelectError::EmptyBuffer),
        _ => Err(SelectError::Ambiguous),
    }
}

/// Returns the only element of `source` satisfying `predicate`.
///
/// # Errors
///
/// [`SelectError::NoMatch`] if no element satisfies the predicate,
/// [`SelectError::Ambiguous`] if more than one does.
pub fn single_with<T, F>(source: &[T], mut predicate: F) -> Result<&T, SelectError>
where
    F: FnMut(&T) -> bool,
{
    let mut found = None;
    for candidate in source {
        if predicate(candidate) {
            if found.is_some() {
                return Err(SelectError::Ambiguous);
            }
            found = Some(candidate);
        }
    }
    found.ok_or(SelectError::NoMatch)
}
