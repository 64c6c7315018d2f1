use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use super::{ensure_solvable, Found, PredecessorMap};
use crate::error::SolveError;
use crate::heuristic::manhattan;
use crate::puzzle::Board;

/// Frontier entry. `f = g + h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub board: Board,
    /// Moves from the start.
    pub g: u32,
    /// Manhattan estimate to the goal.
    pub h: u32,
}

impl Node {
    pub fn new(board: Board, g: u32) -> Self {
        Self {
            board,
            g,
            h: manhattan(board),
        }
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

// Reversed so that `BinaryHeap` pops the lowest `f`, then the lowest `h`.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f()
            .cmp(&self.f())
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| self.board.cmp(&other.board))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* with the Manhattan heuristic.
///
/// A board may sit in the frontier several times; entries whose `g` is worse
/// than the best recorded cost are skipped when popped.
pub fn astar(start: Board) -> Result<Found, SolveError> {
    ensure_solvable(start)?;

    let mut parents = PredecessorMap::new(start);
    let mut costs: HashMap<Board, u32> = HashMap::from([(start, 0)]);
    let mut frontier = BinaryHeap::from([Node::new(start, 0)]);

    while let Some(node) = frontier.pop() {
        if node.board == Board::GOAL {
            return Ok(Found {
                goal: node.board,
                parents,
            });
        }

        if costs.get(&node.board).is_some_and(|&best| node.g > best) {
            continue;
        }

        let g = node.g + 1;
        for next in node.board.neighbors() {
            if costs.get(&next).map_or(true, |&best| g < best) {
                costs.insert(next, g);
                parents.record(next, node.board);
                frontier.push(Node::new(next, g));
            }
        }
    }

    Err(SolveError::Unsolvable)
}
