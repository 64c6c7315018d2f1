//! Solver for the 4×4 sliding-tile puzzle.
//!
//! Boards are packed into a single `u64`, checked for solvability by parity,
//! and searched with one of five strategies: breadth-first, depth-capped
//! depth-first, iterative deepening, A* and IDA*. The last two are guided by
//! the Manhattan-distance heuristic.
//!
//! ```
//! use fifteen_puzzle::{solve, Board, SearchConfig, Strategy};
//!
//! let start: Board = "123456789ABCDE0F".parse().unwrap();
//! let path = solve(Strategy::AStar, start, &SearchConfig::default()).unwrap();
//! assert_eq!(path.move_count(), 1);
//! ```

pub mod config;
pub mod error;
pub mod heuristic;
pub mod puzzle;
pub mod render;
pub mod search;
pub mod solvability;

pub use config::SearchConfig;
pub use error::{Error, ParseBoardError, Result, SolveError};
pub use heuristic::manhattan;
pub use puzzle::{Board, Move};
pub use search::{solve, SolutionPath, Strategy};
pub use solvability::is_solvable;
