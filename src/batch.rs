//! Diffing many pairs at once.
//!
//! Each pair is independent, so with the `parallel` feature the pairs are
//! spread over rayon's global pool. Output order always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::algo::{Algorithm, DiffAlgorithm};
use crate::config::DiffConfig;
use crate::script::EditScript;

/// Runs one configured engine over many inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchDiffer {
    pub config: DiffConfig,
}

impl BatchDiffer {
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::from(&self.config)
    }

    /// Diff every `(old, new)` pair.
    #[cfg(not(feature = "parallel"))]
    pub fn diff_pairs<T>(&self, pairs: &[(Vec<T>, Vec<T>)]) -> Vec<EditScript<T>>
    where
        T: PartialEq + Clone + Send + Sync,
    {
        let alg = self.algorithm();
        pairs.iter().map(|(old, new)| alg.diff(old, new)).collect()
    }

    /// Diff every `(old, new)` pair.
    #[cfg(feature = "parallel")]
    pub fn diff_pairs<T>(&self, pairs: &[(Vec<T>, Vec<T>)]) -> Vec<EditScript<T>>
    where
        T: PartialEq + Clone + Send + Sync,
    {
        let alg = self.algorithm();
        pairs.par_iter().map(|(old, new)| alg.diff(old, new)).collect()
    }

    /// Diff `base` against each target.
    #[cfg(not(feature = "parallel"))]
    pub fn diff_against_base<T>(&self, base: &[T], targets: &[Vec<T>]) -> Vec<EditScript<T>>
    where
        T: PartialEq + Clone + Send + Sync,
    {
        let alg = self.algorithm();
        targets.iter().map(|target| alg.diff(base, target)).collect()
    }

    /// Diff `base` against each target.
    #[cfg(feature = "parallel")]
    pub fn diff_against_base<T>(&self, base: &[T], targets: &[Vec<T>]) -> Vec<EditScript<T>>
    where
        T: PartialEq + Clone + Send + Sync,
    {
        let alg = self.algorithm();
        targets.par_iter().map(|target| alg.diff(base, target)).collect()
    }
}
