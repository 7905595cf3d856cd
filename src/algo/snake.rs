//! Linear-space Myers: divide and conquer on the middle snake.
//!
//! A forward search from `(0, 0)` and a backward search from `(n, m)` run in
//! lockstep, keeping only the current frontier of each. The first depth at
//! which they overlap on a common diagonal yields the edit distance `D` and a
//! snake lying on some shortest path. The problem is then split into the part
//! before the snake and the part after it.
//!
//! Both frontiers are allocated once for the top-level problem and reused by
//! every sub-problem; sub-problems are index ranges into the caller's slices.
//! Auxiliary space is O(n+m), plus a recursion depth of O(log d).
//!
//! # Parity
//!
//! With `delta = n - m`, a forward diagonal `k` faces backward diagonal
//! `delta - k`. If `delta` is odd the total distance is odd, so overlap is
//! tested after each forward half-step (`D = 2d - 1`). Otherwise it is tested
//! after each backward half-step (`D = 2d`).

use std::ops::Range;

use super::DiffAlgorithm;
use super::base::{
    common_prefix_len, common_suffix_len, push_equal, push_one_edit, push_single, push_trivial,
    reverse_snake_len, snake_len,
};
use super::frontier::Frontier;
use crate::script::EditScript;

/// Linear-space Myers engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiddleSnake;

impl MiddleSnake {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for MiddleSnake {
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
    let max_d = (old.len() + new.len()).div_ceil(2) + 1;
    let mut conquer = Conquer {
        old,
        new,
        forward: Frontier::new(max_d),
        backward: Frontier::new(max_d),
        script: Vec::with_capacity(old.len().max(new.len())),
    };
    conquer.run(0..old.len(), 0..new.len());

    #[cfg(feature = "tracing")]
    tracing::trace!(
        distance = crate::script::ScriptStats::of(&conquer.script).edit_count(),
        "middle snake search finished"
    );

    conquer.script
}

// =============================================================================
// Middle snake
// =============================================================================

/// A diagonal run on a shortest path, in absolute indices.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snake {
    old: Range<usize>,
    new: Range<usize>,
    /// Edit distance of the sub-problem the snake was found in
    d: usize,
}

/// A reached point on some diagonal, relative to the current sub-problem.
#[derive(Debug, Clone, Copy)]
struct Point {
    x: isize,
    y: isize,
}

impl Point {
    fn within(self, n: isize, m: isize) -> bool {
        (0..=n).contains(&self.x) && (0..=m).contains(&self.y)
    }
}

struct Conquer<'a, T> {
    old: &'a [T],
    new: &'a [T],
    forward: Frontier,
    backward: Frontier,
    script: EditScript<T>,
}

impl<T: PartialEq + Clone> Conquer<'_, T> {
    fn run(&mut self, mut old_r: Range<usize>, mut new_r: Range<usize>) {
        let (old, new) = (self.old, self.new);

        let prefix = common_prefix_len(&old[old_r.clone()], &new[new_r.clone()]);
        push_equal(&mut self.script, &old[old_r.start..old_r.start + prefix]);
        old_r.start += prefix;
        new_r.start += prefix;

        let suffix = common_suffix_len(&old[old_r.clone()], &new[new_r.clone()]);
        old_r.end -= suffix;
        new_r.end -= suffix;

        self.solve(old_r.clone(), new_r);

        push_equal(&mut self.script, &old[old_r.end..old_r.end + suffix]);
    }

    fn solve(&mut self, old_r: Range<usize>, new_r: Range<usize>) {
        let (all_old, all_new) = (self.old, self.new);
        let (old, new) = (&all_old[old_r.clone()], &all_new[new_r.clone()]);

        if push_trivial(&mut self.script, old, new) {
            return;
        }
        if old.len() == 1 || new.len() == 1 {
            push_single(&mut self.script, old, new);
            return;
        }

        let snake = self.find_middle_snake(old_r.clone(), new_r.clone());
        if snake.d <= 1 {
            push_one_edit(&mut self.script, old, new);
            return;
        }

        self.run(old_r.start..snake.old.start, new_r.start..snake.new.start);
        push_equal(&mut self.script, &all_old[snake.old.clone()]);
        self.run(snake.old.end..old_r.end, snake.new.end..new_r.end);
    }

    /// Run both searches over `old[old_r]` and `new[new_r]` until they meet.
    ///
    /// The first overlap lies on a shortest path, so the snake and the point
    /// the opposite search reached on its diagonal are inside the edit graph.
    fn find_middle_snake(&mut self, old_r: Range<usize>, new_r: Range<usize>) -> Snake {
        let (all_old, all_new) = (self.old, self.new);
        let (old, new) = (&all_old[old_r.clone()], &all_new[new_r.clone()]);
        let (n, m) = (old.len() as isize, new.len() as isize);
        let delta = n - m;
        let odd = delta & 1 != 0;
        let max_d = (n + m + 1) / 2;

        let fwd = &mut self.forward;
        let bwd = &mut self.backward;
        fwd.reset();
        bwd.reset();

        let meet = |from: Point, to: Point, partner: Point, d: isize| -> Snake {
            debug_assert!(
                from.within(n, m) && to.within(n, m) && partner.within(n, m),
                "middle snake {from:?} -> {to:?} (partner {partner:?}) outside {n}x{m} graph"
            );
            Snake {
                old: old_r.start + from.x as usize..old_r.start + to.x as usize,
                new: new_r.start + from.y as usize..new_r.start + to.y as usize,
                d: d as usize,
            }
        };

        for d in 0..=max_d {
            // Forward half-step
            for k in (-d..=d).step_by(2) {
                let x0 = fwd.step(k, d);
                let x = x0 + snake_len(old, new, x0, x0 - k);
                fwd.set(k, x);

                if odd && (k - delta).abs() < d {
                    let back = bwd.get(delta - k);
                    if x + back >= n {
                        let partner = Point { x: n - back, y: m - (back - (delta - k)) };
                        let from = Point { x: x0, y: x0 - k };
                        let to = Point { x, y: x - k };
                        return meet(from, to, partner, 2 * d - 1);
                    }
                }
            }

            // Backward half-step, in coordinates mirrored from (n, m)
            for k in (-d..=d).step_by(2) {
                let x0 = bwd.step(k, d);
                let x = x0 + reverse_snake_len(old, new, x0, x0 - k);
                bwd.set(k, x);

                if !odd && (delta - k).abs() <= d {
                    let ahead = fwd.get(delta - k);
                    if ahead + x >= n {
                        let partner = Point { x: ahead, y: ahead - (delta - k) };
                        let from = Point { x: n - x, y: m - (x - k) };
                        let to = Point { x: n - x0, y: m - (x0 - k) };
                        return meet(from, to, partner, 2 * d);
                    }
                }
            }
        }

        unreachable!("forward and backward searches always meet by depth {max_d}")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::myers;
    use crate::script::{Edit, ScriptStats, modified_of, original_of};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn check(old: &str, new: &str) -> EditScript<char> {
        let (old, new) = (chars(old), chars(new));
        let script = diff(&old, &new);
        assert_eq!(original_of(&script), old);
        assert_eq!(modified_of(&script), new);
        assert_eq!(
            ScriptStats::of(&script).edit_count(),
            myers::distance(&old, &new),
            "non-minimal script for {old:?} -> {new:?}"
        );
        script
    }

    #[test]
    fn test_empty_sequences() {
        assert!(diff::<u8>(&[], &[]).is_empty());
        assert_eq!(check("", "ab"), vec![Edit::insert('a'), Edit::insert('b')]);
        assert_eq!(check("ab", ""), vec![Edit::delete('a'), Edit::delete('b')]);
    }

    #[test]
    fn test_identical() {
        let script = check("abcdef", "abcdef");
        assert!(script.iter().all(Edit::is_equal));
    }

    #[test]
    fn test_single_changes() {
        let script = check("ac", "abc");
        assert_eq!(script, vec![Edit::equal('a'), Edit::insert('b'), Edit::equal('c')]);
        let script = check("abc", "ac");
        assert_eq!(script, vec![Edit::equal('a'), Edit::delete('b'), Edit::equal('c')]);
    }

    #[test]
    fn test_classic_paper_example() {
        let script = check("ABCABBA", "CBABAC");
        assert_eq!(ScriptStats::of(&script).edit_count(), 5);
    }

    #[test]
    fn test_odd_and_even_delta() {
        check("abcdefg", "xbcdyfz");
        check("abcdefgh", "bxdyfh");
        check("abab", "baba");
        check("abcabc", "cbacba");
    }

    #[test]
    fn test_lopsided_lengths() {
        check("ab", "xaxxxxxxbx");
        check("xaxxxxxxbx", "ab");
        check("qz", "abcdefghij");
        check("abcdefghijklmnop", "ph");
    }

    #[test]
    fn test_repeated_elements() {
        check("aaaaaaaaaa", "yy");
        check("aaaabbbb", "bbbbaaaa");
        check("abababab", "babababa");
    }

    #[test]
    fn test_snake_search_split() {
        let old = chars("abcxyzdef");
        let new = chars("abcuvwdef");
        let mut conquer = Conquer {
            old: &old,
            new: &new,
            forward: Frontier::new(10),
            backward: Frontier::new(10),
            script: Vec::new(),
        };
        let snake = conquer.find_middle_snake(3..6, 3..6);
        assert_eq!(snake.d, 6);
        assert!(snake.old.start >= 3 && snake.old.end <= 6);
        assert!(snake.new.start >= 3 && snake.new.end <= 6);
    }

    /// Every pair of binary sequences up to length 6: each split lands inside
    /// the edit graph (checked by the debug assertion in the search) and the
    /// script is minimal.
    #[test]
    fn test_exhaustive_binary_sequences() {
        let seqs: Vec<Vec<u8>> = (0..=6u32)
            .flat_map(|len| (0..1u32 << len).map(move |bits| (0..len).map(|i| (bits >> i & 1) as u8).collect()))
            .collect();
        for old in &seqs {
            for new in &seqs {
                let script = diff(old, new);
                assert_eq!(&original_of(&script), old);
                assert_eq!(&modified_of(&script), new);
                assert_eq!(ScriptStats::of(&script).edit_count(), myers::distance(old, new));
            }
        }
    }

    #[test]
    fn test_lopsided_search_stays_in_graph() {
        let old: Vec<u8> = (0..2000u32).map(|i| (i * 7 % 5) as u8).collect();
        let new: Vec<u8> = (0..13u32).map(|i| (i * 3 % 5) as u8).collect();
        for (a, b) in [(&old, &new), (&new, &old)] {
            let script = diff(a, b);
            assert_eq!(&modified_of(&script), b);
            assert_eq!(ScriptStats::of(&script).edit_count(), myers::distance(a, b));
        }
    }

    #[test]
    fn test_trait_dispatch() {
        let script = MiddleSnake::new().diff(&[1, 2, 3, 4], &[1, 3, 4, 5]);
        assert_eq!(ScriptStats::of(&script).edit_count(), 2);
        assert_eq!(MiddleSnake.distance(&[1, 2], &[3]), 3);
    }
}
