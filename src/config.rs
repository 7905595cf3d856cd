//! Engine selection and presentation defaults.

/// Default number of context entries around each hunk.
pub const DEFAULT_CONTEXT: usize = 3;

/// Which family of engine computes the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Greedy Myers with a full search trace. O((N+M)·D) space.
    #[default]
    Quadratic,
    /// Divide and conquer, O(N+M) auxiliary space. See [`LinearStrategy`].
    Linear,
}

/// Splitting strategy used in [`Mode::Linear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LinearStrategy {
    /// Split on the middle snake found by opposing diagonal searches.
    #[default]
    MiddleSnake,
    /// Split on the column minimizing forward + backward DP edit distance.
    ScoreSplit,
}

/// Configuration for script computation and hunking.
///
/// - `quadratic()` is the default and produces the reproducible tie-break
///   of the greedy algorithm.
/// - `linear()` bounds memory for large inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffConfig {
    /// Engine family.
    /// Default: `Mode::Quadratic`
    pub mode: Mode,
    /// Strategy used when `mode` is `Linear`.
    /// Default: `LinearStrategy::MiddleSnake`
    pub strategy: LinearStrategy,
    /// Context entries kept around each change when windowing into hunks,
    /// read by [`hunks_with_config`](crate::analysis::hunks_with_config).
    /// Default: 3
    pub context: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Quadratic,
            strategy: LinearStrategy::MiddleSnake,
            context: DEFAULT_CONTEXT,
        }
    }
}

impl DiffConfig {
    /// Create config with explicit mode and strategy.
    pub fn new(mode: Mode, strategy: LinearStrategy) -> Self {
        Self { mode, strategy, ..Self::default() }
    }

    /// Greedy Myers with full trace.
    pub fn quadratic() -> Self {
        Self::default()
    }

    /// Linear-space middle snake.
    pub fn linear() -> Self {
        Self::new(Mode::Linear, LinearStrategy::MiddleSnake)
    }

    /// Linear-space DP score split.
    pub fn score_split() -> Self {
        Self::new(Mode::Linear, LinearStrategy::ScoreSplit)
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_strategy(mut self, strategy: LinearStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }
}

impl From<Mode> for DiffConfig {
    fn from(mode: Mode) -> Self {
        Self::default().with_mode(mode)
    }
}
