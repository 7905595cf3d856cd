//! Edit script engines.
//!
//! - `myers`: greedy Myers with a full trace (quadratic space)
//! - `snake`: linear-space Myers on the middle snake
//! - `score`: linear-space Hirschberg split on DP distance rows
//!
//! All three return a shortest script. On inputs with several shortest
//! scripts they may pick different ones; only `myers` fixes a documented
//! tie-break.

mod base;
mod frontier;
pub mod myers;
pub mod score;
pub mod snake;

pub use myers::Myers;
pub use score::ScoreSplit;
pub use snake::MiddleSnake;

use crate::config::{DiffConfig, LinearStrategy, Mode};
use crate::script::{EditScript, ScriptStats};

/// Trait for edit script engines.
///
/// Engines hold no state between calls, so one value can be shared freely
/// across threads.
pub trait DiffAlgorithm: Send + Sync {
    /// Compute a shortest edit script transforming `old` into `new`.
    fn diff<T: PartialEq + Clone>(&self, old: &[T], new: &[T]) -> EditScript<T>;

    /// Edit distance between `old` and `new`.
    fn distance<T: PartialEq + Clone>(&self, old: &[T], new: &[T]) -> usize {
        ScriptStats::of(&self.diff(old, new)).edit_count()
    }
}

/// Engine selected from a [`DiffConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Myers,
    MiddleSnake,
    ScoreSplit,
}

impl Algorithm {
    /// Engine for a mode, using the default linear strategy.
    pub fn for_mode(mode: Mode) -> Self {
        Self::from(&DiffConfig::from(mode))
    }
}

impl From<&DiffConfig> for Algorithm {
    fn from(config: &DiffConfig) -> Self {
        match (config.mode, config.strategy) {
            (Mode::Quadratic, _) => Self::Myers,
            (Mode::Linear, LinearStrategy::MiddleSnake) => Self::MiddleSnake,
            (Mode::Linear, LinearStrategy::ScoreSplit) => Self::ScoreSplit,
        }
    }
}

impl DiffAlgorithm for Algorithm {
    fn diff<T: PartialEq + Clone>(&self, old: &[T], new: &[T]) -> EditScript<T> {
        match self {
            Self::Myers => myers::diff(old, new),
            Self::MiddleSnake => snake::diff(old, new),
            Self::ScoreSplit => score::diff(old, new),
        }
    }

    fn distance<T: PartialEq + Clone>(&self, old: &[T], new: &[T]) -> usize {
        match self {
            // The distance-only search keeps no trace either way
            Self::Myers | Self::MiddleSnake => myers::distance(old, new),
            Self::ScoreSplit => ScoreSplit.distance(old, new),
        }
    }
}

// =============================================================================
// Main API
// =============================================================================

/// Compute the edit script from `old` to `new` with the default configuration
/// (quadratic Myers).
pub fn diff<T: PartialEq + Clone>(old: &[T], new: &[T]) -> EditScript<T> {
    myers::diff(old, new)
}

/// Compute the edit script with the engine selected by `config`.
pub fn diff_with_config<T: PartialEq + Clone>(old: &[T], new: &[T], config: &DiffConfig) -> EditScript<T> {
    Algorithm::from(config).diff(old, new)
}

/// Compute the edit script in the given mode.
pub fn compute_edit_script<T: PartialEq + Clone>(old: &[T], new: &[T], mode: Mode) -> EditScript<T> {
    Algorithm::for_mode(mode).diff(old, new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{Edit, modified_of, original_of};

    const ALL: [Algorithm; 3] = [Algorithm::Myers, Algorithm::MiddleSnake, Algorithm::ScoreSplit];

    #[test]
    fn test_algorithm_from_config() {
        assert_eq!(Algorithm::from(&DiffConfig::default()), Algorithm::Myers);
        assert_eq!(Algorithm::from(&DiffConfig::linear()), Algorithm::MiddleSnake);
        assert_eq!(Algorithm::from(&DiffConfig::score_split()), Algorithm::ScoreSplit);
        assert_eq!(
            Algorithm::from(&DiffConfig::quadratic().with_strategy(LinearStrategy::ScoreSplit)),
            Algorithm::Myers
        );
        assert_eq!(Algorithm::for_mode(Mode::Linear), Algorithm::MiddleSnake);
    }

    #[test]
    fn test_engines_agree() {
        let cases: &[(&str, &str)] = &[
            ("", ""),
            ("abc", ""),
            ("", "abc"),
            ("abcabba", "cbabac"),
            ("the quick brown fox", "the quack brown box"),
            ("aaaaaaaaaa", "yy"),
            ("abcdefgh", "hgfedcba"),
            ("0123456789", "0123x456789y"),
        ];
        for &(old, new) in cases {
            let (old, new): (Vec<char>, Vec<char>) = (old.chars().collect(), new.chars().collect());
            let expected = myers::distance(&old, &new);
            for alg in ALL {
                let script = alg.diff(&old, &new);
                assert_eq!(original_of(&script), old, "{alg:?}");
                assert_eq!(modified_of(&script), new, "{alg:?}");
                assert_eq!(ScriptStats::of(&script).edit_count(), expected, "{alg:?}");
                assert_eq!(alg.distance(&old, &new), expected, "{alg:?}");
            }
        }
    }

    #[test]
    fn test_compute_edit_script_modes() {
        let quadratic = compute_edit_script(&["a", "c"], &["a", "b", "c"], Mode::Quadratic);
        let linear = compute_edit_script(&["a", "c"], &["a", "b", "c"], Mode::Linear);
        let expected = vec![Edit::equal("a"), Edit::insert("b"), Edit::equal("c")];
        assert_eq!(quadratic, expected);
        assert_eq!(linear, expected);
    }

    #[test]
    fn test_diff_with_config() {
        let script = diff_with_config(&[1, 2, 3], &[1, 3], &DiffConfig::score_split());
        assert_eq!(script, vec![Edit::equal(1), Edit::delete(2), Edit::equal(3)]);
        assert_eq!(diff(&[1, 2, 3], &[1, 3]), script);
    }
}
