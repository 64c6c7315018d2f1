//! Terminal presentation of boards and solution paths

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use crate::puzzle::{Board, SIDE};
use crate::search::SolutionPath;

/// Writes boards as 4×4 grids, optionally coloured.
///
/// Tiles already on their goal cell are green and the blank is dimmed.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    colored: bool,
}

impl Renderer {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn board<W: Write>(&self, out: &mut W, board: Board) -> io::Result<()> {
        for (index, tile) in board.tiles().into_iter().enumerate() {
            self.cell(out, tile, tile == Board::GOAL.tile(index))?;
            if index % SIDE == SIDE - 1 {
                writeln!(out)?;
            }
        }
        out.flush()
    }

    fn cell<W: Write>(&self, out: &mut W, tile: u8, in_place: bool) -> io::Result<()> {
        let text = format!("{:2} ", tile);
        if !self.colored {
            return out.write_all(text.as_bytes());
        }

        let color = match tile {
            0 => Color::DarkGrey,
            _ if in_place => Color::Green,
            _ => Color::Reset,
        };
        queue!(out, SetForegroundColor(color), Print(text), ResetColor)
    }

    /// Move count, then every board headed by its 0-based move index and
    /// the blank move that produced it.
    pub fn path<W: Write>(&self, out: &mut W, path: &SolutionPath) -> io::Result<()> {
        writeln!(out, "Solution found in {} moves.", path.move_count())?;

        let moves = path.moves();
        for (index, &board) in path.iter().enumerate() {
            match index.checked_sub(1).and_then(|previous| moves.get(previous)) {
                Some(movement) => writeln!(out, "--- Move {} ({}) ---", index, movement)?,
                None => writeln!(out, "--- Move {} ---", index)?,
            }
            self.board(out, board)?;
            writeln!(out)?;
        }
        out.flush()
    }
}
