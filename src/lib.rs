//! tola-diff - Shortest edit scripts for arbitrary sequences
//!
//! ## Core Concepts
//!
//! An [`EditScript`] lists, in order, which elements of the original are kept
//! (`Equal`), dropped (`Delete`), and which elements of the modified sequence
//! are added (`Insert`). Every engine returns a script with the fewest possible
//! changes; reading it back yields both input sequences.
//!
//! ## Modules
//! - `script`: `Edit`, `OpKind`, `EditScript`, `ScriptStats`
//! - `algo`: engines (`Myers`, `MiddleSnake`, `ScoreSplit`) behind `DiffAlgorithm`
//! - `patch`: `apply` / `revert` with verification
//! - `analysis`: grouping, hunks, line numbers, replace coalescing
//! - `measure`: edit distance, LCS, similarity ratio
//! - `token`: line / word / char text diffs
//! - `batch`: many diffs at once (parallel with the `parallel` feature)
//!
//! ## Usage
//!
//! ```
//! use tola_diff::{apply, diff, Edit};
//!
//! let old = ["a", "c"];
//! let new = ["a", "b", "c"];
//! let script = diff(&old, &new);
//! assert_eq!(script, vec![Edit::equal("a"), Edit::insert("b"), Edit::equal("c")]);
//! assert_eq!(apply(&old, &script).unwrap(), new);
//! ```
//!
//! ## Features
//! - `parallel`: run [`BatchDiffer`] on rayon's thread pool
//! - `tracing`: trace-level spans on engine entry points

// =============================================================================
// Core modules
// =============================================================================

/// Edit script model
pub mod script;

/// Engine selection
pub mod config;

/// Engines: myers, middle snake, score split
pub mod algo;

/// Script replay
pub mod patch;

/// Presentation helpers
pub mod analysis;

/// Distance and similarity
pub mod measure;

/// Text tokenization
pub mod token;

/// Batch diffing
pub mod batch;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Script model
pub use script::{Edit, EditScript, OpKind, ScriptStats, modified_of, original_of};

// Configuration
pub use config::{DEFAULT_CONTEXT, DiffConfig, LinearStrategy, Mode};

// Engines
pub use algo::{
    Algorithm, DiffAlgorithm, MiddleSnake, Myers, ScoreSplit, compute_edit_script, diff,
    diff_with_config,
};

// Replay
pub use patch::{apply, revert};

// Analysis
pub use analysis::{
    Group, Hunk, coalesce_replacements, group_consecutive, hunks, hunks_with_config, line_numbers,
    window_into_hunks,
};

// Measures
pub use measure::{DiffSummary, edit_distance, lcs, lcs_length, similarity_ratio};

// Text
pub use token::{Granularity, diff_text, join, tokenize};

// Batch
pub use batch::BatchDiffer;

// Error types
pub use error::{DiffError, DiffResult};

// =============================================================================
// Tests
// =============================================================================
