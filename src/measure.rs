//! Distance and similarity measures.
//!
//! Every measure is read off one shortest edit script: the edit distance is
//! its number of changes, the LCS its `Equal` entries.

use crate::algo::{self, DiffAlgorithm};
use crate::config::DiffConfig;
use crate::script::{Edit, EditScript, ScriptStats};

/// Minimum number of inserts and deletes turning `old` into `new`.
pub fn edit_distance<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    algo::myers::distance(old, new)
}

/// Length of a longest common subsequence of `old` and `new`.
pub fn lcs_length<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    // distance = (n - lcs) + (m - lcs)
    (old.len() + new.len() - edit_distance(old, new)) / 2
}

/// A longest common subsequence of `old` and `new`.
///
/// Which one is returned when several exist follows the quadratic engine's
/// tie-break.
pub fn lcs<T: PartialEq + Clone>(old: &[T], new: &[T]) -> Vec<T> {
    algo::diff(old, new)
        .into_iter()
        .filter(Edit::is_equal)
        .map(|edit| edit.into_parts().1)
        .collect()
}

/// `2 * lcs / (n + m)`, or `1.0` when both sequences are empty.
pub fn similarity_ratio<T: PartialEq>(old: &[T], new: &[T]) -> f64 {
    ratio(lcs_length(old, new), old.len() + new.len())
}

fn ratio(lcs: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    2.0 * lcs as f64 / total as f64
}

/// A script together with the measures derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffSummary<T> {
    pub script: EditScript<T>,
    pub old_len: usize,
    pub new_len: usize,
    pub stats: ScriptStats,
    pub edit_distance: usize,
    pub lcs_length: usize,
    pub similarity: f64,
}

impl<T: PartialEq + Clone> DiffSummary<T> {
    /// Diff `old` against `new` with the engine selected by `config` and
    /// summarize the result.
    pub fn compute(old: &[T], new: &[T], config: &DiffConfig) -> Self {
        let script = algo::Algorithm::from(config).diff(old, new);
        Self::from_script(script)
    }
}

impl<T> DiffSummary<T> {
    /// Summarize an existing script.
    ///
    /// `Replace` entries count once toward the distance, matching the
    /// script's own change count.
    pub fn from_script(script: EditScript<T>) -> Self {
        let stats = ScriptStats::of(&script);
        let old_len = stats.equal + stats.deleted + stats.replaced;
        let new_len = stats.equal + stats.inserted + stats.replaced;
        Self {
            old_len,
            new_len,
            edit_distance: stats.edit_count(),
            lcs_length: stats.equal,
            similarity: ratio(stats.equal, old_len + new_len),
            stats,
            script,
        }
    }

    pub fn is_identical(&self) -> bool {
        self.stats.is_empty()
    }
}
