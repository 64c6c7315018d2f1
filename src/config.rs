//! Default search limits and run parameters

/// Depth cap for plain depth-first search. No 15-puzzle position needs more
/// than 80 moves.
pub const MAX_DEPTH: u32 = 80;
/// Deepest limit tried by iterative deepening
pub const IDS_MAX_DEPTH: u32 = MAX_DEPTH;
/// Largest `f` threshold IDA* will raise to
pub const IDA_MAX_THRESHOLD: u32 = MAX_DEPTH;
/// Solves per board when timing
pub const DEFAULT_ITERATIONS: u32 = 1;
/// Seed for scrambled and shuffled starts
pub const DEFAULT_SEED: u64 = 15;

/// Bounds handed to the strategies that need one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Depth cap for DFS
    pub max_depth: u32,
    /// Absolute maximum depth for IDS
    pub ids_max_depth: u32,
    /// Threshold ceiling for IDA*
    pub ida_max_threshold: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            ids_max_depth: IDS_MAX_DEPTH,
            ida_max_threshold: IDA_MAX_THRESHOLD,
        }
    }
}
