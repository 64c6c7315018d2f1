//! Search strategies over the blank-move graph
//!
//! Every strategy takes a start board and, on success, hands back the goal
//! together with the predecessor map it built. [`solve`] runs one and turns
//! the map into a [`SolutionPath`].

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod idastar;
pub mod ids;
pub mod path;

use std::fmt;

use tracing::info;

use crate::config::SearchConfig;
use crate::error::SolveError;
use crate::puzzle::Board;
use crate::solvability::is_solvable;

pub use astar::astar;
pub use bfs::bfs;
pub use dfs::{dfs, dls};
pub use idastar::ida_star;
pub use ids::ids;
pub use path::{PredecessorMap, SolutionPath};

/// Available search algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    /// Breadth-first search
    Bfs,
    /// Depth-first search with a depth cap
    Dfs,
    /// Iterative deepening search
    Ids,
    /// A* with the Manhattan heuristic
    AStar,
    /// Iterative deepening A*
    IdaStar,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Ids,
        Strategy::AStar,
        Strategy::IdaStar,
    ];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::Ids => "IDS",
            Strategy::AStar => "A*",
            Strategy::IdaStar => "IDA*",
        };
        write!(f, "{}", s)
    }
}

/// Goal reached by a strategy plus the parent pointers leading to it
#[derive(Debug, Clone)]
pub struct Found {
    pub goal: Board,
    pub parents: PredecessorMap,
}

impl Found {
    pub fn path(&self) -> SolutionPath {
        self.parents.path_to(self.goal)
    }
}

fn ensure_solvable(start: Board) -> Result<(), SolveError> {
    if is_solvable(start) {
        Ok(())
    } else {
        Err(SolveError::Unsolvable)
    }
}

/// Runs `strategy` from `start` and reconstructs the solution path.
///
/// # Errors
///
/// [`SolveError::Unsolvable`] when the parity check fails, before any
/// exploration. [`SolveError::BoundExhausted`] when a depth or threshold
/// ceiling from `config` runs out.
pub fn solve(
    strategy: Strategy,
    start: Board,
    config: &SearchConfig,
) -> Result<SolutionPath, SolveError> {
    info!(event = "solve_start", strategy = %strategy, board = %start);

    let outcome = match strategy {
        Strategy::Bfs => bfs(start),
        Strategy::Dfs => dfs(start, config.max_depth),
        Strategy::Ids => ids(start, config.ids_max_depth),
        Strategy::AStar => astar(start),
        Strategy::IdaStar => ida_star(start, config.ida_max_threshold),
    };

    match &outcome {
        Ok(found) => {
            let path = found.path();
            info!(
                event = "solve_end",
                strategy = %strategy,
                moves = path.move_count(),
                mapped = found.parents.len(),
            );
            Ok(path)
        }
        Err(error) => {
            info!(event = "solve_failed", strategy = %strategy, error = %error);
            Err(*error)
        }
    }
}
