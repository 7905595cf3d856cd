//! Base cases and sliding primitives shared by the engines.
//!
//! Every function appends to an existing script so the divide and conquer
//! engines can emit in order without concatenating partial results.

use crate::script::{Edit, EditScript};

// =============================================================================
// Runs
// =============================================================================

#[inline]
pub(crate) fn push_equal<T: Clone>(script: &mut EditScript<T>, items: &[T]) {
    script.extend(items.iter().cloned().map(Edit::equal));
}

#[inline]
pub(crate) fn push_insert<T: Clone>(script: &mut EditScript<T>, items: &[T]) {
    script.extend(items.iter().cloned().map(Edit::insert));
}

#[inline]
pub(crate) fn push_delete<T: Clone>(script: &mut EditScript<T>, items: &[T]) {
    script.extend(items.iter().cloned().map(Edit::delete));
}

// =============================================================================
// Sliding
// =============================================================================

/// Length of the common prefix of `old` and `new`.
#[inline]
pub(crate) fn common_prefix_len<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    old.iter().zip(new).take_while(|(a, b)| a == b).count()
}

/// Length of the common suffix of `old` and `new`.
#[inline]
pub(crate) fn common_suffix_len<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    old.iter().rev().zip(new.iter().rev()).take_while(|(a, b)| a == b).count()
}

/// Diagonal moves available forward from `(x, y)`.
///
/// Points outside the edit graph have no matches.
#[inline]
pub(crate) fn snake_len<T: PartialEq>(old: &[T], new: &[T], x: isize, y: isize) -> isize {
    if x < 0 || y < 0 {
        return 0;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= old.len() || y >= new.len() {
        return 0;
    }
    common_prefix_len(&old[x..], &new[y..]) as isize
}

/// Diagonal moves available backward from `(n - x, m - y)`, where `(x, y)`
/// are coordinates mirrored from the end of both sequences.
#[inline]
pub(crate) fn reverse_snake_len<T: PartialEq>(old: &[T], new: &[T], x: isize, y: isize) -> isize {
    if x < 0 || y < 0 {
        return 0;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= old.len() || y >= new.len() {
        return 0;
    }
    common_suffix_len(&old[..old.len() - x], &new[..new.len() - y]) as isize
}

// =============================================================================
// Base cases
// =============================================================================

/// Solve a pair where one side is empty. Returns false if neither is.
pub(crate) fn push_trivial<T: Clone>(script: &mut EditScript<T>, old: &[T], new: &[T]) -> bool {
    if old.is_empty() {
        push_insert(script, new);
        true
    } else if new.is_empty() {
        push_delete(script, old);
        true
    } else {
        false
    }
}

/// Solve a pair where at least one side holds a single element.
///
/// The single element is matched against its first occurrence on the other
/// side. If it never occurs, it is deleted (or inserted) outright: before the
/// other side's inserts, after its deletes.
pub(crate) fn push_single<T: PartialEq + Clone>(script: &mut EditScript<T>, old: &[T], new: &[T]) {
    debug_assert!(old.len() == 1 || new.len() == 1);

    if old.len() == 1 {
        let item = &old[0];
        match new.iter().position(|b| b == item) {
            Some(at) => {
                push_insert(script, &new[..at]);
                script.push(Edit::equal(item.clone()));
                push_insert(script, &new[at + 1..]);
            }
            None => {
                script.push(Edit::delete(item.clone()));
                push_insert(script, new);
            }
        }
    } else {
        let item = &new[0];
        match old.iter().position(|a| a == item) {
            Some(at) => {
                push_delete(script, &old[..at]);
                script.push(Edit::equal(item.clone()));
                push_delete(script, &old[at + 1..]);
            }
            None => {
                push_delete(script, old);
                script.push(Edit::insert(item.clone()));
            }
        }
    }
}

/// Solve a pair whose edit distance is known to be 0 or 1.
///
/// The longer side carries one extra element; removing it at the first
/// mismatch leaves the shorter side.
pub(crate) fn push_one_edit<T: PartialEq + Clone>(script: &mut EditScript<T>, old: &[T], new: &[T]) {
    debug_assert!(old.len().abs_diff(new.len()) <= 1);

    let at = common_prefix_len(old, new);
    push_equal(script, &old[..at]);
    if old.len() > new.len() {
        script.push(Edit::delete(old[at].clone()));
        push_equal(script, &old[at + 1..]);
    } else if new.len() > old.len() {
        script.push(Edit::insert(new[at].clone()));
        push_equal(script, &old[at..]);
    } else {
        push_equal(script, &old[at..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{modified_of, original_of};

    fn run(f: fn(&mut EditScript<char>, &[char], &[char]), old: &str, new: &str) -> EditScript<char> {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();
        let mut script = Vec::new();
        f(&mut script, &old, &new);
        assert_eq!(original_of(&script), old);
        assert_eq!(modified_of(&script), new);
        script
    }

    #[test]
    fn test_prefix_suffix() {
        assert_eq!(common_prefix_len(&[1, 2, 3], &[1, 2, 4]), 2);
        assert_eq!(common_suffix_len(&[0, 2, 3], &[1, 2, 3]), 2);
        assert_eq!(common_prefix_len::<u8>(&[], &[1]), 0);
    }

    #[test]
    fn test_snake_len_bounds() {
        let old = [1, 2, 3];
        let new = [1, 2, 3];
        assert_eq!(snake_len(&old, &new, 0, 0), 3);
        assert_eq!(snake_len(&old, &new, 3, 0), 0);
        assert_eq!(snake_len(&old, &new, -1, 0), 0);
        assert_eq!(reverse_snake_len(&old, &new, 0, 0), 3);
        assert_eq!(reverse_snake_len(&old, &new, 1, 1), 2);
        assert_eq!(reverse_snake_len(&old, &new, 0, 4), 0);
    }

    #[test]
    fn test_trivial() {
        let mut script = Vec::new();
        assert!(!push_trivial(&mut script, &[1], &[2]));
        assert!(push_trivial(&mut script, &[], &[1, 2]));
        assert_eq!(script, vec![Edit::insert(1), Edit::insert(2)]);
    }

    #[test]
    fn test_single_old_found() {
        let script = run(push_single, "b", "abc");
        assert_eq!(script, vec![Edit::insert('a'), Edit::equal('b'), Edit::insert('c')]);
    }

    #[test]
    fn test_single_old_missing() {
        let script = run(push_single, "x", "ab");
        assert_eq!(script, vec![Edit::delete('x'), Edit::insert('a'), Edit::insert('b')]);
    }

    #[test]
    fn test_single_new() {
        let script = run(push_single, "abca", "a");
        assert_eq!(script.iter().filter(|e| e.is_equal()).count(), 1);
        assert_eq!(script[0], Edit::equal('a'));

        let script = run(push_single, "ab", "z");
        assert_eq!(script.last(), Some(&Edit::insert('z')));
    }

    #[test]
    fn test_one_edit() {
        let script = run(push_one_edit, "abc", "abc");
        assert!(script.iter().all(Edit::is_equal));

        let script = run(push_one_edit, "abxc", "abc");
        assert_eq!(script[2], Edit::delete('x'));

        let script = run(push_one_edit, "aa", "aaa");
        assert_eq!(script.iter().filter(|e| e.is_change()).count(), 1);
    }
}
