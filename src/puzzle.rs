use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseBoardError;
use crate::solvability::is_solvable;

/// Width and height of the grid.
pub const SIDE: usize = 4;
/// Number of cells, blank included.
pub const CELLS: usize = SIDE * SIDE;

/// Direction the blank travels in a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Expansion order shared by every strategy.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// `(row, column)` offset applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// One arrangement of the sixteen symbols, packed four bits per cell.
///
/// Cell 0 lives in the most significant nibble and cells follow in row-major
/// order. Values are only built through the codec functions below, so search
/// code never depends on the bit layout.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board(u64);

impl Board {
    /// Symbols 1..=15 in order with the blank in the last cell.
    pub const GOAL: Self = Self(0x1234_5678_9ABC_DEF0);

    /// Packs sixteen symbols in row-major order.
    ///
    /// Only the low four bits of each symbol are kept. Uniqueness is not
    /// checked here; use [`str::parse`] for validated input.
    pub fn from_tiles(tiles: [u8; CELLS]) -> Self {
        Self(
            tiles
                .iter()
                .fold(0u64, |code, &tile| (code << 4) | u64::from(tile & 0xF)),
        )
    }

    const fn shift(index: usize) -> usize {
        (CELLS - 1 - index) * 4
    }

    /// Symbol stored at `index` (0..16).
    pub fn tile(self, index: usize) -> u8 {
        ((self.0 >> Self::shift(index)) & 0xF) as u8
    }

    pub fn tiles(self) -> [u8; CELLS] {
        std::array::from_fn(|index| self.tile(index))
    }

    /// Exchanges the symbols at two cells. The cells need not be adjacent.
    pub fn swap(self, i: usize, j: usize) -> Self {
        let first = u64::from(self.tile(i));
        let second = u64::from(self.tile(j));
        let cleared = self.0 & !((0xF_u64 << Self::shift(i)) | (0xF_u64 << Self::shift(j)));
        Self(cleared | (second << Self::shift(i)) | (first << Self::shift(j)))
    }

    /// Cell index of the blank, if the board has one.
    pub fn blank(self) -> Option<usize> {
        (0..CELLS).find(|&index| self.tile(index) == 0)
    }

    /// Slides the blank one cell, `None` when that would leave the grid.
    pub fn apply(self, movement: Move) -> Option<Self> {
        self.slide(self.blank()?, movement)
    }

    fn slide(self, blank: usize, movement: Move) -> Option<Self> {
        let (dr, dc) = movement.as_offset();
        let row = (blank / SIDE).checked_add_signed(dr)?;
        let col = (blank % SIDE).checked_add_signed(dc)?;

        if row < SIDE && col < SIDE {
            Some(self.swap(blank, row * SIDE + col))
        } else {
            None
        }
    }

    /// Every legal move paired with the board it produces, in [`Move::ALL`] order.
    pub fn successors(self) -> impl Iterator<Item = (Move, Self)> {
        let blank = self.blank();
        Move::ALL.into_iter().filter_map(move |movement| {
            blank
                .and_then(|blank| self.slide(blank, movement))
                .map(|next| (movement, next))
        })
    }

    /// Boards one blank move away: up, down, left, right.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        self.successors().map(|(_, next)| next)
    }

    /// Draws uniform permutations until one is solvable.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut tiles: [u8; CELLS] = std::array::from_fn(|index| index as u8);

        loop {
            tiles.shuffle(rng);
            let board = Self::from_tiles(tiles);
            if is_solvable(board) {
                return board;
            }
        }
    }

    /// Random walk of `moves` blank moves from the goal, never undoing the
    /// previous move directly.
    pub fn scrambled<R: Rng + ?Sized>(rng: &mut R, moves: usize) -> Self {
        let mut board = Self::GOAL;
        let mut last_move: Option<Move> = None;

        for _ in 0..moves {
            let options: Vec<(Move, Self)> = board
                .successors()
                .filter(|(movement, _)| last_move.map_or(true, |last| *movement != last.opposite()))
                .collect();

            if let Some(&(movement, next)) = options.choose(rng) {
                board = next;
                last_move = Some(movement);
            }
        }

        board
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Reads a 16-character hex description such as `123456789ABCDEF0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let length = s.chars().count();
        if length != CELLS {
            return Err(ParseBoardError::Length(length));
        }

        let mut tiles = [0u8; CELLS];
        let mut seen = [false; CELLS];
        for (index, (slot, symbol)) in tiles.iter_mut().zip(s.chars()).enumerate() {
            let value = symbol
                .to_digit(16)
                .ok_or(ParseBoardError::InvalidSymbol { symbol, index })? as u8;

            if std::mem::replace(&mut seen[usize::from(value)], true) {
                return Err(ParseBoardError::DuplicateSymbol { symbol });
            }

            *slot = value;
        }

        Ok(Self::from_tiles(tiles))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in self.tiles() {
            write!(f, "{:X}", tile)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board").field(&format_args!("{}", self)).finish()
    }
}
