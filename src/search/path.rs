use std::collections::HashMap;

use crate::puzzle::{Board, Move};

/// Parent pointers for one search, doubling as its visited set.
///
/// The start board is its own parent, which is where path reconstruction
/// stops.
#[derive(Debug, Clone)]
pub struct PredecessorMap {
    start: Board,
    parents: HashMap<Board, Board>,
}

impl PredecessorMap {
    pub fn new(start: Board) -> Self {
        Self {
            start,
            parents: HashMap::from([(start, start)]),
        }
    }

    pub fn start(&self) -> Board {
        self.start
    }

    /// Records `parent` for `board` only if `board` has not been seen yet.
    /// Returns whether the board was new.
    pub fn discover(&mut self, board: Board, parent: Board) -> bool {
        if self.parents.contains_key(&board) {
            return false;
        }
        self.parents.insert(board, parent);
        true
    }

    /// Records `parent` for `board`, replacing any earlier entry.
    pub fn record(&mut self, board: Board, parent: Board) {
        self.parents.insert(board, parent);
    }

    pub fn forget(&mut self, board: Board) {
        self.parents.remove(&board);
    }

    pub fn contains(&self, board: Board) -> bool {
        self.parents.contains_key(&board)
    }

    pub fn parent(&self, board: Board) -> Option<Board> {
        self.parents.get(&board).copied()
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Walks parent pointers back from `goal` and returns the path start-first.
    pub fn path_to(&self, goal: Board) -> SolutionPath {
        let mut boards = vec![goal];
        let mut current = goal;

        while let Some(parent) = self.parent(current) {
            if parent == current {
                break;
            }
            boards.push(parent);
            current = parent;
        }

        boards.reverse();
        SolutionPath { boards }
    }
}

/// Boards from start to goal inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionPath {
    boards: Vec<Board>,
}

impl SolutionPath {
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Number of moves, one less than the number of boards.
    pub fn move_count(&self) -> usize {
        self.boards.len().saturating_sub(1)
    }

    /// Blank moves that take each board to the next one.
    pub fn moves(&self) -> Vec<Move> {
        self.boards
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => from
                    .successors()
                    .find(|(_, next)| next == to)
                    .map(|(movement, _)| movement),
                _ => None,
            })
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.boards.iter()
    }
}

impl<'a> IntoIterator for &'a SolutionPath {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.boards.iter()
    }
}
