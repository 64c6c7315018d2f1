use std::collections::VecDeque;

use super::{ensure_solvable, Found, PredecessorMap};
use crate::error::SolveError;
use crate::puzzle::Board;

/// Breadth-first search. The first goal popped is a minimum-move solution.
pub fn bfs(start: Board) -> Result<Found, SolveError> {
    ensure_solvable(start)?;

    let mut parents = PredecessorMap::new(start);
    let mut frontier = VecDeque::from([start]);

    while let Some(current) = frontier.pop_front() {
        if current == Board::GOAL {
            return Ok(Found {
                goal: current,
                parents,
            });
        }

        for next in current.neighbors() {
            if parents.discover(next, current) {
                frontier.push_back(next);
            }
        }
    }

    // Whole component explored without meeting the goal.
    Err(SolveError::Unsolvable)
}
