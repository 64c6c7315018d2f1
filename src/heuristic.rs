use crate::puzzle::{Board, SIDE};

/// Sum of each tile's grid distance from its goal cell; the blank is free.
pub fn manhattan(board: Board) -> u32 {
    let mut distance = 0;
    for (index, tile) in board.tiles().into_iter().enumerate() {
        if tile != 0 {
            let target = usize::from(tile - 1);
            distance += (index / SIDE).abs_diff(target / SIDE);
            distance += (index % SIDE).abs_diff(target % SIDE);
        }
    }
    distance as u32
}
