//! Linear-space diff by forward/backward edit distance rows.
//!
//! Hirschberg's formulation: split `old` at its midpoint, compute one DP row
//! of insert/delete distances from the top half against every prefix of
//! `new`, and one from the bottom half against every suffix of `new`. The
//! column `j` minimizing `forward[j] + backward[m - j]` is where some
//! shortest script crosses the midpoint, so the halves are solved
//! independently.
//!
//! # Complexity
//!
//! - Time: O(n·m)
//! - Space: O(m) for the rows, O(log n) recursion depth
//!
//! The backward row runs the forward recurrence over both ranges read in
//! reverse; nothing is copied.

use std::ops::Range;

use super::DiffAlgorithm;
use super::base::{push_single, push_trivial};
use crate::script::EditScript;

/// Hirschberg score-split engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreSplit;

impl ScoreSplit {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for ScoreSplit {
    fn diff<T: PartialEq + Clone>(&self, old: &[T], new: &[T]) -> EditScript<T> {
        diff(old, new)
    }
}

/// Compute a shortest edit script from `old` to `new` in linear space.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(n = old.len(), m = new.len()))
)]
pub fn diff<T: PartialEq + Clone>(old: &[T], new: &[T]) -> EditScript<T> {
    let rows = new.len() + 1;
    let mut split = Split {
        old,
        new,
        forward: vec![0; rows],
        backward: vec![0; rows],
        scratch: vec![0; rows],
        script: Vec::with_capacity(old.len().max(new.len())),
    };
    split.run(0..old.len(), 0..new.len());

    #[cfg(feature = "tracing")]
    tracing::trace!(
        distance = crate::script::ScriptStats::of(&split.script).edit_count(),
        "score split search finished"
    );

    split.script
}

// =============================================================================
// Score rows
// =============================================================================

/// Fill `prev` with the distance from the first `n` items of one side to
/// every prefix `0..=m` of the other, where `eq(i, j)` compares item `i`
/// against item `j`.
///
/// `curr` is scratch space of the same length.
fn score_row(
    n: usize,
    m: usize,
    eq: impl Fn(usize, usize) -> bool,
    prev: &mut [usize],
    curr: &mut [usize],
) {
    for (j, cell) in prev[..=m].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=n {
        curr[0] = i;
        for j in 1..=m {
            curr[j] = if eq(i - 1, j - 1) {
                prev[j - 1]
            } else {
                1 + prev[j].min(curr[j - 1])
            };
        }
        prev[..=m].copy_from_slice(&curr[..=m]);
    }
}

struct Split<'a, T> {
    old: &'a [T],
    new: &'a [T],
    forward: Vec<usize>,
    backward: Vec<usize>,
    scratch: Vec<usize>,
    script: EditScript<T>,
}

impl<T: PartialEq + Clone> Split<'_, T> {
    fn run(&mut self, old_r: Range<usize>, new_r: Range<usize>) {
        let (all_old, all_new) = (self.old, self.new);
        let (old, new) = (&all_old[old_r.clone()], &all_new[new_r.clone()]);

        if push_trivial(&mut self.script, old, new) {
            return;
        }
        if old.len() == 1 || new.len() == 1 {
            push_single(&mut self.script, old, new);
            return;
        }

        let mid = old_r.start + old.len() / 2;
        let column = new_r.start + self.split_column(old_r.start..mid, mid..old_r.end, new_r.clone());

        self.run(old_r.start..mid, new_r.start..column);
        self.run(mid..old_r.end, column..new_r.end);
    }

    /// Offset into `new_r` where a shortest script crosses between `top` and `bottom`.
    ///
    /// Ties resolve to the smallest offset.
    fn split_column(&mut self, top: Range<usize>, bottom: Range<usize>, new_r: Range<usize>) -> usize {
        let (old, new) = (self.old, self.new);
        let m = new_r.len();

        score_row(
            top.len(),
            m,
            |i, j| old[top.start + i] == new[new_r.start + j],
            &mut self.forward,
            &mut self.scratch,
        );
        score_row(
            bottom.len(),
            m,
            |i, j| old[bottom.end - 1 - i] == new[new_r.end - 1 - j],
            &mut self.backward,
            &mut self.scratch,
        );

        let (forward, backward) = (&self.forward, &self.backward);
        (0..=m)
            .min_by_key(|&j| forward[j] + backward[m - j])
            .unwrap_or(0)
    }
}

// =============================================================================
// Tests
// =============================================================================
