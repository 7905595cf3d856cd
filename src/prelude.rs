//! Prelude module for common imports.
//!
//! ```
//! use tola_diff::prelude::*;
//! ```

// Script model
pub use crate::script::{Edit, EditScript, OpKind, ScriptStats, modified_of, original_of};

// Configuration
pub use crate::config::{DiffConfig, LinearStrategy, Mode};

// Engines
pub use crate::algo::{Algorithm, DiffAlgorithm, compute_edit_script, diff, diff_with_config};

// Replay
pub use crate::patch::{apply, revert};

// Analysis
pub use crate::analysis::{group_consecutive, hunks, hunks_with_config, line_numbers, window_into_hunks};

// Measures
pub use crate::measure::{DiffSummary, edit_distance, lcs_length, similarity_ratio};

// Text
pub use crate::token::{Granularity, diff_text};

// Error
pub use crate::error::{DiffError, DiffResult};
