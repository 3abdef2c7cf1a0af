//! Seed-driven rotation of ordered sequences.
//!
//! Output position `i` holds the input element at `(i + seed) mod len`, where
//! `mod` is the Euclidean modulus. A truncating `%` would yield negative
//! indices for negative seeds.

use thiserror::Error;

/// Failure raised by the rotation core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RotateError {
    /// The sequence was empty, so no modulus exists.
    #[error("invalid argument: cannot rotate an empty sequence")]
    InvalidArgument,
}

/// Reduce `seed` to an offset in `[0, len)`.
///
/// Accepts the full `i64` range, including `i64::MIN`.
pub fn normalized_offset(seed: i64, len: usize) -> Result<usize, RotateError> {
    if len == 0 {
        return Err(RotateError::InvalidArgument);
    }
    let offset = i128::from(seed).rem_euclid(len as i128);
    Ok(offset as usize)
}

/// Return a new sequence where element `i` is `items[(i + seed) mod len]`.
///
/// `items` is never mutated. Returns [`RotateError::InvalidArgument`] when it
/// is empty.
pub fn rotate<T: Clone>(items: &[T], seed: i64) -> Result<Vec<T>, RotateError> {
    let offset = normalized_offset(seed, items.len())?;
    Ok(rotate_by_offset(items, offset))
}

/// Rotate by an offset already reduced by [`normalized_offset`].
pub(crate) fn rotate_by_offset<T: Clone>(items: &[T], offset: usize) -> Vec<T> {
    let (head, tail) = items.split_at(offset);
    let mut rotated = Vec::with_capacity(items.len());
    rotated.extend_from_slice(tail);
    rotated.extend_from_slice(head);
    rotated
}
