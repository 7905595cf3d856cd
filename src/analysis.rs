//! Script analysis for presentation layers.
//!
//! Nothing here renders text. These functions slice and annotate an
//! [`EditScript`] so formatters (unified, side-by-side, HTML) can treat it as
//! opaque ordered data.

use std::ops::Range;

use smallvec::SmallVec;

use crate::config::DiffConfig;
use crate::script::{Edit, EditScript, OpKind};

// =============================================================================
// Grouping
// =============================================================================

/// A run of consecutive entries of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a, T> {
    pub kind: OpKind,
    /// Carried values in script order (the new value for `Replace`)
    pub values: SmallVec<[&'a T; 4]>,
}

impl<T> Group<'_, T> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Run-length encode `script` by kind, preserving order.
pub fn group_consecutive<T>(script: &[Edit<T>]) -> Vec<Group<'_, T>> {
    let mut groups: Vec<Group<'_, T>> = Vec::new();
    for edit in script {
        match groups.last_mut() {
            Some(group) if group.kind == edit.kind() => group.values.push(edit.value()),
            _ => groups.push(Group {
                kind: edit.kind(),
                values: SmallVec::from_elem(edit.value(), 1),
            }),
        }
    }
    groups
}

// =============================================================================
// Hunks
// =============================================================================

/// Index ranges of the windows around changes.
///
/// Each change gets `context` entries on either side, clipped to the script.
/// Windows that overlap or touch are merged.
fn window_ranges<T>(script: &[Edit<T>], context: usize) -> Vec<Range<usize>> {
    let last = script.len().saturating_sub(1);
    let mut ranges: Vec<Range<usize>> = Vec::new();

    for (idx, _) in script.iter().enumerate().filter(|(_, e)| e.is_change()) {
        let start = idx.saturating_sub(context);
        let end = idx.saturating_add(context).min(last) + 1;
        match ranges.last_mut() {
            Some(current) if start <= current.end => current.end = end,
            _ => ranges.push(start..end),
        }
    }
    ranges
}

/// Split `script` into windows around its changes.
///
/// Returns one slice per merged window, in script order. A script without
/// changes yields no windows.
pub fn window_into_hunks<T>(script: &[Edit<T>], context: usize) -> Vec<&[Edit<T>]> {
    window_ranges(script, context)
        .into_iter()
        .map(|range| &script[range])
        .collect()
}

/// A window of the script with its position on both sides.
///
/// Starts are 0-based; unified headers print `start + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<'a, T> {
    pub old_start: usize,
    pub old_len: usize,
    pub new_start: usize,
    pub new_len: usize,
    pub edits: &'a [Edit<T>],
}

impl<T> Hunk<'_, T> {
    pub fn has_changes(&self) -> bool {
        self.edits.iter().any(Edit::is_change)
    }
}

/// Count the elements `edits` consume on each side.
fn side_lens<T>(edits: &[Edit<T>]) -> (usize, usize) {
    edits.iter().fold((0, 0), |(old, new), edit| {
        let kind = edit.kind();
        (old + kind.consumes_original() as usize, new + kind.consumes_modified() as usize)
    })
}

/// Windows of `script` with the header data a unified diff needs.
pub fn hunks<T>(script: &[Edit<T>], context: usize) -> Vec<Hunk<'_, T>> {
    let (mut old_pos, mut new_pos, mut at) = (0, 0, 0);

    window_ranges(script, context)
        .into_iter()
        .map(|range| {
            let (skipped_old, skipped_new) = side_lens(&script[at..range.start]);
            old_pos += skipped_old;
            new_pos += skipped_new;

            let edits = &script[range.clone()];
            let (old_len, new_len) = side_lens(edits);
            let hunk = Hunk { old_start: old_pos, old_len, new_start: new_pos, new_len, edits };

            old_pos += old_len;
            new_pos += new_len;
            at = range.end;
            hunk
        })
        .collect()
}

/// [`hunks`] with the context width taken from `config`.
pub fn hunks_with_config<'a, T>(script: &'a [Edit<T>], config: &DiffConfig) -> Vec<Hunk<'a, T>> {
    hunks(script, config.context)
}

// =============================================================================
// Line numbers
// =============================================================================

/// 1-based line numbers on each side for every entry.
///
/// `Delete` has no modified line and `Insert` no original line.
pub fn line_numbers<T>(script: &[Edit<T>]) -> Vec<(Option<usize>, Option<usize>)> {
    let (mut old_line, mut new_line) = (0, 0);
    script
        .iter()
        .map(|edit| {
            let kind = edit.kind();
            let old = kind.consumes_original().then(|| {
                old_line += 1;
                old_line
            });
            let new = kind.consumes_modified().then(|| {
                new_line += 1;
                new_line
            });
            (old, new)
        })
        .collect()
}

// =============================================================================
// Replace coalescing
// =============================================================================

/// Pair each run of `Delete`s directly followed by a run of `Insert`s into
/// `Replace` entries.
///
/// Pairing is positional. Unpaired deletes, then unpaired inserts, follow
/// the replacements, so the result still replays over both sequences.
pub fn coalesce_replacements<T>(script: EditScript<T>) -> EditScript<T> {
    let mut out = Vec::with_capacity(script.len());
    let mut iter = script.into_iter().peekable();

    while let Some(edit) = iter.next() {
        if edit.kind() != OpKind::Delete {
            out.push(edit);
            continue;
        }

        let mut deleted: SmallVec<[Edit<T>; 4]> = SmallVec::new();
        deleted.push(edit);
        while let Some(next) = iter.next_if(|e| e.kind() == OpKind::Delete) {
            deleted.push(next);
        }
        let mut inserted: SmallVec<[Edit<T>; 4]> = SmallVec::new();
        while let Some(next) = iter.next_if(|e| e.kind() == OpKind::Insert) {
            inserted.push(next);
        }

        let paired = deleted.len().min(inserted.len());
        let mut deleted = deleted.into_iter();
        let mut inserted = inserted.into_iter();
        for (del, ins) in deleted.by_ref().take(paired).zip(inserted.by_ref().take(paired)) {
            let (_, old, _) = del.into_parts();
            let (_, new, _) = ins.into_parts();
            out.push(Edit::replace(new, old));
        }
        out.extend(deleted);
        out.extend(inserted);
    }
    out
}
