use crate::puzzle::{Board, SIDE};

/// Pairs of non-blank tiles that appear in the opposite of their goal order.
pub fn count_inversions(board: Board) -> usize {
    let tiles = board.tiles();

    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

/// Parity test: inversions plus the blank's 1-based row must be even.
///
/// A board without a blank is never solvable.
pub fn is_solvable(board: Board) -> bool {
    match board.blank() {
        Some(blank) => (count_inversions(board) + blank / SIDE + 1) % 2 == 0,
        None => false,
    }
}
