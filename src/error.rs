//! Error types for tola-diff.
//!
//! Computing a script never fails. Only applying a script to a sequence it
//! was not derived from does.

use thiserror::Error;

use crate::script::OpKind;

/// Errors raised while replaying an edit script against a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// The script wants to consume an element past the end of the source
    #[error("{kind} entry at script position {position} runs past the end of the source ({len} elements)")]
    Exhausted {
        /// Kind of the offending entry
        kind: OpKind,
        /// Index of the entry within the script
        position: usize,
        /// Length of the source sequence
        len: usize,
    },

    /// The recorded value differs from the source element under the cursor
    #[error("{kind} entry at script position {position} does not match source element {cursor}")]
    Mismatch {
        /// Kind of the offending entry
        kind: OpKind,
        /// Index of the entry within the script
        position: usize,
        /// Index into the source sequence
        cursor: usize,
    },

    /// The script ended before the whole source was consumed
    #[error("script incomplete: consumed {consumed} of {len} source elements")]
    Incomplete {
        /// Number of source elements consumed
        consumed: usize,
        /// Length of the source sequence
        len: usize,
    },
}

/// Result type alias for script replay.
pub type DiffResult<T> = Result<T, DiffError>;

impl DiffError {
    /// Position of the failing entry within the script, if the failure is tied to one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Exhausted { position, .. } | Self::Mismatch { position, .. } => Some(*position),
            Self::Incomplete { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DiffError::Incomplete { consumed: 2, len: 5 };
        assert_eq!(err.to_string(), "script incomplete: consumed 2 of 5 source elements");

        let err = DiffError::Mismatch { kind: OpKind::Equal, position: 3, cursor: 1 };
        assert_eq!(err.to_string(), "equal entry at script position 3 does not match source element 1");

        let err = DiffError::Exhausted { kind: OpKind::Delete, position: 0, len: 0 };
        assert_eq!(
            err.to_string(),
            "delete entry at script position 0 runs past the end of the source (0 elements)"
        );
    }

    #[test]
    fn test_error_position() {
        assert_eq!(DiffError::Mismatch { kind: OpKind::Delete, position: 4, cursor: 2 }.position(), Some(4));
        assert_eq!(DiffError::Incomplete { consumed: 0, len: 1 }.position(), None);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DiffError>();
    }
}
