//! Diagonal search state shared by the Myers engines.
//!
//! `V[k]` holds the furthest x reached on diagonal `k = x - y`. Diagonals at
//! depth `d` lie in `[-d, d]`, so a flat array offset by the maximum depth
//! replaces a map keyed by `k`.

/// Furthest reaching x per diagonal, indexed by `k + offset`.
#[derive(Debug, Clone)]
pub(crate) struct Frontier {
    v: Vec<isize>,
    offset: isize,
}

impl Frontier {
    /// Frontier able to hold every diagonal up to depth `max_d`.
    ///
    /// Depth `d` reads `k ± 1`, so one extra slot is kept on each side.
    pub(crate) fn new(max_d: usize) -> Self {
        let offset = max_d as isize + 1;
        Self {
            v: vec![0; 2 * max_d + 3],
            offset,
        }
    }

    #[inline]
    pub(crate) fn get(&self, k: isize) -> isize {
        self.v[(k + self.offset) as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, k: isize, x: isize) {
        self.v[(k + self.offset) as usize] = x;
    }

    /// Seed the virtual diagonal read by depth 0 so the search starts at `(0, 0)`.
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.set(1, 0);
    }

    /// Whether diagonal `k` at depth `d` is entered from `k + 1` (an insert,
    /// moving down) rather than from `k - 1` (a delete, moving right).
    ///
    /// At `k == -d` only the insert exists; at `k == d` only the delete.
    /// Otherwise the neighbour that got strictly further wins, ties going to
    /// the delete.
    #[inline]
    pub(crate) fn enters_by_insert(&self, k: isize, d: isize) -> bool {
        k == -d || (k != d && self.get(k - 1) < self.get(k + 1))
    }

    /// x on diagonal `k` right after the single edit of depth `d`, before sliding.
    #[inline]
    pub(crate) fn step(&self, k: isize, d: isize) -> isize {
        if self.enters_by_insert(k, d) {
            self.get(k + 1)
        } else {
            self.get(k - 1) + 1
        }
    }
}
