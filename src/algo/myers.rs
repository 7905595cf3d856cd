//! Myers greedy diff with a full search trace.
//!
//! | Engine | Time | Space |
//! |--------|------|-------|
//! | **Myers (this)** | O((n+m)·d) | O((n+m)·d) |
//! | Middle snake | O((n+m)·d) | O(n+m) |
//! | Score split | O(n·m) | O(n+m) |
//!
//! The search keeps one frontier snapshot per depth so the path can be
//! walked back from `(n, m)`. That trace is why space is not linear; the
//! divide and conquer engines in [`snake`](super::snake) and
//! [`score`](super::score) drop it.
//!
//! # Tie-break
//!
//! When both neighbouring diagonals can reach diagonal `k`, the one that got
//! strictly further wins and ties go to the delete (`k - 1`). At `k == -d`
//! only the insert exists. The backward walk applies the same rule, so
//! scripts are reproducible byte for byte.
//!
//! # References
//!
//! - Myers, E.W. "An O(ND) Difference Algorithm and Its Variations" (1986)

use super::DiffAlgorithm;
use super::base::{push_delete, push_insert, snake_len};
use super::frontier::Frontier;
use crate::script::{Edit, EditScript};

/// Quadratic-space Myers engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Myers;

impl Myers {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for Myers {
    fn diff<T: PartialEq + Clone>(&self, old: &[T], new: &[T]) -> EditScript<T> {
        diff(old, new)
    }

    fn distance<T: PartialEq + Clone>(&self, old: &[T], new: &[T]) -> usize {
        distance(old, new)
    }
}

// =============================================================================
// Main API
// =============================================================================

/// Compute the shortest edit script from `old` to `new`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(n = old.len(), m = new.len()))
)]
pub fn diff<T: PartialEq + Clone>(old: &[T], new: &[T]) -> EditScript<T> {
    let mut script = Vec::with_capacity(old.len().max(new.len()));
    if old.is_empty() {
        push_insert(&mut script, new);
        return script;
    }
    if new.is_empty() {
        push_delete(&mut script, old);
        return script;
    }

    let trace = search(old, new);

    #[cfg(feature = "tracing")]
    tracing::trace!(distance = trace.len() - 1, "myers search finished");

    backtrack(old, new, &trace, &mut script);
    script
}

/// Edit distance from `old` to `new`.
///
/// Runs the same forward search without keeping the trace, so it only needs
/// O(n+m) space.
pub fn distance<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    if old.is_empty() || new.is_empty() {
        return old.len() + new.len();
    }

    let (n, m) = (old.len() as isize, new.len() as isize);
    let max_d = old.len() + new.len();
    let mut v = Frontier::new(max_d);

    for d in 0..=max_d as isize {
        for k in (-d..=d).step_by(2) {
            let x = v.step(k, d);
            let x = x + snake_len(old, new, x, x - k);
            v.set(k, x);
            if x >= n && x - k >= m {
                return d as usize;
            }
        }
    }
    max_d
}

// =============================================================================
// Search
// =============================================================================

/// Forward search from `(0, 0)`.
///
/// `trace[d]` is the frontier as it stood before depth `d` ran. The search
/// stops at the first depth reaching `(n, m)`, so `trace.len() - 1` is the
/// edit distance.
fn search<T: PartialEq>(old: &[T], new: &[T]) -> Vec<Frontier> {
    let (n, m) = (old.len() as isize, new.len() as isize);
    let max_d = old.len() + new.len();

    let mut v = Frontier::new(max_d);
    let mut trace = Vec::new();

    for d in 0..=max_d as isize {
        trace.push(v.clone());

        // Diagonals in [-d, d] with the same parity as d
        for k in (-d..=d).step_by(2) {
            let x = v.step(k, d);
            let x = x + snake_len(old, new, x, x - k);
            v.set(k, x);

            if x >= n && x - k >= m {
                return trace;
            }
        }
    }

    // Depth n + m always reaches the corner
    unreachable!("myers search exhausted {max_d} edits without reaching the end")
}

/// Walk the trace back from `(n, m)` to `(0, 0)`.
///
/// Each depth contributes its snake as `Equal` entries and then the single
/// insert or delete that entered it.
fn backtrack<T: Clone>(old: &[T], new: &[T], trace: &[Frontier], script: &mut EditScript<T>) {
    let start = script.len();
    let mut x = old.len() as isize;
    let mut y = new.len() as isize;

    for (d, v) in trace.iter().enumerate().skip(1).rev() {
        let d = d as isize;
        let k = x - y;

        let prev_k = if v.enters_by_insert(k, d) { k + 1 } else { k - 1 };
        let prev_x = v.get(prev_k);
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
            script.push(Edit::equal(old[x as usize].clone()));
        }

        if x == prev_x {
            y -= 1;
            script.push(Edit::insert(new[y as usize].clone()));
        } else {
            x -= 1;
            script.push(Edit::delete(old[x as usize].clone()));
        }
    }

    // Depth 0 snake from the origin
    debug_assert_eq!(x, y);
    while x > 0 {
        x -= 1;
        script.push(Edit::equal(old[x as usize].clone()));
    }

    script[start..].reverse();
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{OpKind, ScriptStats, modified_of, original_of};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn check(old: &str, new: &str) -> EditScript<char> {
        let (old, new) = (chars(old), chars(new));
        let script = diff(&old, &new);
        assert_eq!(original_of(&script), old);
        assert_eq!(modified_of(&script), new);
        script
    }

    #[test]
    fn test_empty_sequences() {
        let script = diff::<char>(&[], &[]);
        assert!(script.is_empty());
        assert_eq!(distance::<char>(&[], &[]), 0);
    }

    #[test]
    fn test_insert_all() {
        let script = check("", "abc");
        assert_eq!(script, vec![Edit::insert('a'), Edit::insert('b'), Edit::insert('c')]);
    }

    #[test]
    fn test_delete_all() {
        let script = check("abc", "");
        assert_eq!(script, vec![Edit::delete('a'), Edit::delete('b'), Edit::delete('c')]);
    }

    #[test]
    fn test_no_changes() {
        let script = check("abc", "abc");
        assert!(script.iter().all(Edit::is_equal));
    }

    #[test]
    fn test_single_insert() {
        let script = diff(&["a", "c"], &["a", "b", "c"]);
        assert_eq!(script, vec![Edit::equal("a"), Edit::insert("b"), Edit::equal("c")]);
    }

    #[test]
    fn test_single_delete() {
        let script = diff(&["a", "b", "c"], &["a", "c"]);
        assert_eq!(script, vec![Edit::equal("a"), Edit::delete("b"), Edit::equal("c")]);
    }

    #[test]
    fn test_classic_paper_example() {
        // ABCABBA -> CBABAC has distance 5 and LCS 4
        let script = check("ABCABBA", "CBABAC");
        let stats = ScriptStats::of(&script);
        assert_eq!(stats.edit_count(), 5);
        assert_eq!(stats.equal, 4);
        assert_eq!(distance(&chars("ABCABBA"), &chars("CBABAC")), 5);
    }

    #[test]
    fn test_tie_break_is_stable() {
        // a -> b: delete first, then insert
        let script = check("a", "b");
        assert_eq!(script, vec![Edit::delete('a'), Edit::insert('b')]);

        let first = check("abcabba", "cbabac");
        let second = check("abcabba", "cbabac");
        assert_eq!(first, second);
    }

    #[test]
    fn test_many_to_few() {
        let old = vec!["x"; 10];
        let new = vec!["y"; 2];
        let script = diff(&old, &new);
        assert_eq!(modified_of(&script), new);
        assert_eq!(script.iter().filter(|e| e.kind() == OpKind::Delete).count(), 10);
    }

    #[test]
    fn test_mixed_operations() {
        let script = check("abcd", "aec");
        let stats = ScriptStats::of(&script);
        assert_eq!(stats.equal, 2); // a and c
        assert_eq!(stats.deleted, 2); // b and d
        assert_eq!(stats.inserted, 1); // e
    }

    #[test]
    fn test_prefix_and_suffix() {
        let script = check("12345x", "12345y");
        assert_eq!(ScriptStats::of(&script).equal, 5);

        let script = check("x12345", "y12345");
        assert_eq!(ScriptStats::of(&script).equal, 5);
    }

    #[test]
    fn test_distance_matches_script() {
        for (old, new) in [("kitten", "sitting"), ("", "abc"), ("abc", "cba"), ("aaaa", "aa")] {
            let script = check(old, new);
            let expected = ScriptStats::of(&script).edit_count();
            assert_eq!(distance(&chars(old), &chars(new)), expected);
        }
    }

    #[test]
    fn test_trait_dispatch() {
        let engine = Myers::new();
        let script = engine.diff(&[1, 2, 3], &[2, 3, 4]);
        assert_eq!(script.first(), Some(&Edit::delete(1)));
        assert_eq!(engine.distance(&[1, 2, 3], &[2, 3, 4]), 2);
    }
}
