//! Replaying edit scripts against a sequence.
//!
//! [`apply`] rebuilds the modified sequence from the original, [`revert`]
//! rebuilds the original from the modified one. Both verify every element the
//! script claims to consume and fail on the first inconsistency; a script
//! that was not derived from the given sequence is never silently patched
//! over.

use crate::error::{DiffError, DiffResult};
use crate::script::Edit;

/// Rebuild the modified sequence by replaying `script` over `original`.
///
/// # Errors
///
/// - [`DiffError::Exhausted`] if an `Equal`/`Delete`/`Replace` entry has no
///   element of `original` left to consume
/// - [`DiffError::Mismatch`] if such an entry records a value different from
///   the element under the cursor
/// - [`DiffError::Incomplete`] if the script ends before `original` does
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(len = original.len(), entries = script.len()))
)]
pub fn apply<T: PartialEq + Clone>(original: &[T], script: &[Edit<T>]) -> DiffResult<Vec<T>> {
    replay(original, script, Edit::original_value, Edit::modified_value)
}

/// Rebuild the original sequence by replaying `script` backwards over `modified`.
///
/// `Replace` entries restore their `old_value`.
///
/// # Errors
///
/// Same as [`apply`], with `Equal`/`Insert`/`Replace` entries consuming
/// elements of `modified`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(len = modified.len(), entries = script.len()))
)]
pub fn revert<T: PartialEq + Clone>(modified: &[T], script: &[Edit<T>]) -> DiffResult<Vec<T>> {
    replay(modified, script, Edit::modified_value, Edit::original_value)
}

/// Walk `script` once with a cursor into `source`.
///
/// `consumed` picks the value an entry expects at the cursor (entries without
/// one leave the cursor alone); `produced` picks what it emits.
fn replay<'s, T, C, P>(source: &[T], script: &'s [Edit<T>], consumed: C, produced: P) -> DiffResult<Vec<T>>
where
    T: PartialEq + Clone + 's,
    C: Fn(&'s Edit<T>) -> Option<&'s T>,
    P: Fn(&'s Edit<T>) -> Option<&'s T>,
{
    let mut out = Vec::with_capacity(script.len());
    let mut cursor = 0;

    for (position, edit) in script.iter().enumerate() {
        if let Some(expected) = consumed(edit) {
            let Some(actual) = source.get(cursor) else {
                return Err(DiffError::Exhausted { kind: edit.kind(), position, len: source.len() });
            };
            if actual != expected {
                return Err(DiffError::Mismatch { kind: edit.kind(), position, cursor });
            }
            cursor += 1;
        }
        if let Some(value) = produced(edit) {
            out.push(value.clone());
        }
    }

    if cursor != source.len() {
        return Err(DiffError::Incomplete { consumed: cursor, len: source.len() });
    }
    Ok(out)
}
