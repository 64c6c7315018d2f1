use tracing::debug;

use super::{ensure_solvable, Found, PredecessorMap};
use crate::error::SolveError;
use crate::heuristic::manhattan;
use crate::puzzle::Board;

enum Probe {
    Found(Board),
    /// Smallest `f` cut off during the pass, `None` if nothing was cut.
    Pruned(Option<u32>),
}

/// Iterative deepening on `f = g + h`, starting from the start's heuristic
/// and never raising the threshold past `max_threshold`.
pub fn ida_star(start: Board, max_threshold: u32) -> Result<Found, SolveError> {
    ensure_solvable(start)?;

    let mut threshold = manhattan(start);
    let mut parents = PredecessorMap::new(start);

    while threshold <= max_threshold {
        debug!(event = "ida_threshold", threshold);

        match probe(start, 0, threshold, &mut parents) {
            Probe::Found(goal) => return Ok(Found { goal, parents }),
            // Nothing left beyond the threshold to try.
            Probe::Pruned(None) => return Err(SolveError::Unsolvable),
            Probe::Pruned(Some(next)) => threshold = next,
        }
    }

    Err(SolveError::BoundExhausted {
        bound: max_threshold,
    })
}

/// One bounded depth-first pass. `parents` only ever holds the current
/// branch: entries are dropped again on backtrack so sibling branches may
/// pass through the same boards.
fn probe(board: Board, g: u32, threshold: u32, parents: &mut PredecessorMap) -> Probe {
    let f = g + manhattan(board);
    if f > threshold {
        return Probe::Pruned(Some(f));
    }
    if board == Board::GOAL {
        return Probe::Found(board);
    }

    let mut next_threshold = None;
    for next in board.neighbors() {
        if !parents.discover(next, board) {
            continue;
        }

        match probe(next, g + 1, threshold, parents) {
            Probe::Found(goal) => return Probe::Found(goal),
            Probe::Pruned(candidate) => {
                next_threshold = candidate.into_iter().chain(next_threshold).min();
            }
        }

        parents.forget(next);
    }

    Probe::Pruned(next_threshold)
}
