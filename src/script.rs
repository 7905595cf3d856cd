//! Edit script model
//!
//! An [`EditScript`] is the only thing the engines produce: an ordered list
//! of [`Edit`] entries. Reading the `Equal`/`Delete` values in order yields
//! the original sequence; reading the `Equal`/`Insert` values yields the
//! modified one.

use std::fmt;

// =============================================================================
// Public Types
// =============================================================================

/// Kind of a single edit entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OpKind {
    /// Element present only in the modified sequence
    Insert,
    /// Element present only in the original sequence
    Delete,
    /// Element kept unchanged
    Equal,
    /// Paired delete + insert at one position. Never emitted by the engines,
    /// only by [`coalesce_replacements`](crate::analysis::coalesce_replacements).
    Replace,
}

impl OpKind {
    /// All kinds, in declaration order.
    pub const ALL: [OpKind; 4] = [OpKind::Insert, OpKind::Delete, OpKind::Equal, OpKind::Replace];

    /// Lowercase name (`"insert"`, `"delete"`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            OpKind::Insert => "insert",
            OpKind::Delete => "delete",
            OpKind::Equal => "equal",
            OpKind::Replace => "replace",
        }
    }

    /// True for everything except `Equal`.
    #[inline]
    pub const fn is_change(self) -> bool {
        !matches!(self, OpKind::Equal)
    }

    /// True if an entry of this kind consumes an element of the original sequence.
    #[inline]
    pub const fn consumes_original(self) -> bool {
        !matches!(self, OpKind::Insert)
    }

    /// True if an entry of this kind produces an element of the modified sequence.
    #[inline]
    pub const fn consumes_modified(self) -> bool {
        !matches!(self, OpKind::Delete)
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of an edit script.
///
/// For `Insert`/`Delete`/`Equal`, `value` is the element inserted, deleted or
/// kept and `old_value` is `None`. For `Replace`, `value` is the new element
/// and `old_value` the one it replaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edit<T> {
    kind: OpKind,
    value: T,
    old_value: Option<T>,
}

impl<T> Edit<T> {
    /// Element present only in the modified sequence.
    #[inline]
    pub fn insert(value: T) -> Self {
        Self { kind: OpKind::Insert, value, old_value: None }
    }

    /// Element present only in the original sequence.
    #[inline]
    pub fn delete(value: T) -> Self {
        Self { kind: OpKind::Delete, value, old_value: None }
    }

    /// Element kept unchanged.
    #[inline]
    pub fn equal(value: T) -> Self {
        Self { kind: OpKind::Equal, value, old_value: None }
    }

    /// `old_value` replaced by `new_value`.
    #[inline]
    pub fn replace(new_value: T, old_value: T) -> Self {
        Self { kind: OpKind::Replace, value: new_value, old_value: Some(old_value) }
    }

    #[inline]
    pub fn kind(&self) -> OpKind {
        self.kind
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn old_value(&self) -> Option<&T> {
        self.old_value.as_ref()
    }

    #[inline]
    pub fn is_equal(&self) -> bool {
        self.kind == OpKind::Equal
    }

    #[inline]
    pub fn is_change(&self) -> bool {
        self.kind.is_change()
    }

    /// The element this entry contributes to the original sequence, if any.
    pub fn original_value(&self) -> Option<&T> {
        match self.kind {
            OpKind::Equal | OpKind::Delete => Some(&self.value),
            OpKind::Replace => self.old_value.as_ref(),
            OpKind::Insert => None,
        }
    }

    /// The element this entry contributes to the modified sequence, if any.
    pub fn modified_value(&self) -> Option<&T> {
        match self.kind {
            OpKind::Equal | OpKind::Insert | OpKind::Replace => Some(&self.value),
            OpKind::Delete => None,
        }
    }

    /// Map the carried element(s), keeping the kind.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Edit<U> {
        Edit { kind: self.kind, value: f(self.value), old_value: self.old_value.map(f) }
    }

    /// Consume the entry, returning `(kind, value, old_value)`.
    pub fn into_parts(self) -> (OpKind, T, Option<T>) {
        (self.kind, self.value, self.old_value)
    }
}

/// Ordered list of edits transforming one sequence into another.
pub type EditScript<T> = Vec<Edit<T>>;

/// Per-kind counts of an edit script
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScriptStats {
    pub equal: usize,
    pub inserted: usize,
    pub deleted: usize,
    pub replaced: usize,
}

impl ScriptStats {
    /// Count the entries of `script` by kind.
    pub fn of<T>(script: &[Edit<T>]) -> Self {
        let mut stats = Self::default();
        for edit in script {
            match edit.kind {
                OpKind::Equal => stats.equal += 1,
                OpKind::Insert => stats.inserted += 1,
                OpKind::Delete => stats.deleted += 1,
                OpKind::Replace => stats.replaced += 1,
            }
        }
        stats
    }

    /// Number of non-`Equal` entries
    pub fn edit_count(&self) -> usize {
        self.inserted + self.deleted + self.replaced
    }

    /// Total number of entries
    pub fn total(&self) -> usize {
        self.equal + self.edit_count()
    }

    /// Check if there are no changes
    pub fn is_empty(&self) -> bool {
        self.edit_count() == 0
    }
}

// =============================================================================
// Projections
// =============================================================================

/// Original sequence as recorded by the script (no verification).
pub fn original_of<T: Clone>(script: &[Edit<T>]) -> Vec<T> {
    script.iter().filter_map(Edit::original_value).cloned().collect()
}

/// Modified sequence as recorded by the script (no verification).
pub fn modified_of<T: Clone>(script: &[Edit<T>]) -> Vec<T> {
    script.iter().filter_map(Edit::modified_value).cloned().collect()
}

// =============================================================================
// Tests
// =============================================================================
