//! Board codec, parsing and neighbour generation

use fifteen_puzzle::puzzle::{CELLS, SIDE};
use fifteen_puzzle::{is_solvable, Board, Move, ParseBoardError};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

// Tests the goal constant decodes to 1..15 followed by the blank
#[test]
fn test_goal_layout() {
    let expected: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0];
    assert_eq!(Board::GOAL.tiles(), expected);
    assert_eq!(Board::from_tiles(expected), Board::GOAL);
    assert_eq!(Board::GOAL.blank(), Some(15));
}

// Tests decode(encode(tiles), i) == tiles[i] over random permutations
#[test]
fn test_encode_decode_permutations() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut tiles: [u8; CELLS] = std::array::from_fn(|i| i as u8);

    for _ in 0..50 {
        tiles.shuffle(&mut rng);
        let board = Board::from_tiles(tiles);
        for (index, &tile) in tiles.iter().enumerate() {
            assert_eq!(board.tile(index), tile);
        }
    }
}

// Tests swap exchanges exactly two cells, adjacent or not
#[test]
fn test_swap_exchanges_two_cells() {
    let swapped = Board::GOAL.swap(0, 15);
    assert_eq!(swapped.tile(0), 0);
    assert_eq!(swapped.tile(15), 1);
    for index in 1..15 {
        assert_eq!(swapped.tile(index), Board::GOAL.tile(index));
    }
    assert_eq!(swapped.swap(15, 0), Board::GOAL);
}

// Tests parse accepts the hex description and Display writes it back
#[test]
fn test_parse_and_display() {
    let board: Board = "123456789ABCDEF0".parse().expect("valid description");
    assert_eq!(board, Board::GOAL);
    assert_eq!(board.to_string(), "123456789ABCDEF0");

    let scrambled: Board = "fedcba9876543210".parse().expect("lowercase is accepted");
    assert_eq!(scrambled.tile(0), 15);
    assert_eq!(scrambled.to_string(), "FEDCBA9876543210");
    assert_eq!(scrambled.to_string().parse::<Board>(), Ok(scrambled));
}

// Tests parse rejects descriptions of the wrong length
#[test]
fn test_parse_rejects_length() {
    assert_eq!("12345".parse::<Board>(), Err(ParseBoardError::Length(5)));
    assert_eq!(
        "123456789ABCDEF01".parse::<Board>(),
        Err(ParseBoardError::Length(17))
    );
}

// Tests parse rejects non-hex symbols with their position
#[test]
fn test_parse_rejects_invalid_symbol() {
    assert_eq!(
        "123456789ABCDEG0".parse::<Board>(),
        Err(ParseBoardError::InvalidSymbol {
            symbol: 'G',
            index: 14
        })
    );
}

// Tests parse rejects repeated symbols
#[test]
fn test_parse_rejects_duplicates() {
    assert_eq!(
        "113456789ABCDEF0".parse::<Board>(),
        Err(ParseBoardError::DuplicateSymbol { symbol: '1' })
    );
}

// Tests neighbour count follows the blank's position: corner, edge, centre
#[test]
fn test_neighbor_counts() {
    assert_eq!(Board::GOAL.neighbors().count(), 2);

    let edge = Board::GOAL.apply(Move::Up).expect("blank can move up");
    assert_eq!(edge.neighbors().count(), 3);

    let centre = edge.apply(Move::Left).expect("blank can move left");
    assert_eq!(centre.blank(), Some(10));
    assert_eq!(centre.neighbors().count(), 4);
}

// Tests expansion order is up, down, left, right
#[test]
fn test_neighbor_order() {
    let centre: Board = "123456789A0BCDEF".parse().expect("valid description");
    let moves: Vec<Move> = centre.successors().map(|(movement, _)| movement).collect();
    assert_eq!(moves, Move::ALL.to_vec());

    let blanks: Vec<Option<usize>> = centre.neighbors().map(Board::blank).collect();
    assert_eq!(blanks, vec![Some(6), Some(14), Some(9), Some(11)]);
}

// Tests moves off the grid are refused
#[test]
fn test_apply_out_of_bounds() {
    assert_eq!(Board::GOAL.apply(Move::Down), None);
    assert_eq!(Board::GOAL.apply(Move::Right), None);
}

// Tests every neighbour is one adjacent blank swap away and the opposite move undoes it
#[test]
fn test_neighbors_are_single_adjacent_swaps() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..100 {
        let board = Board::scrambled(&mut rng, 30);
        let count = board.neighbors().count();
        assert!((2..=4).contains(&count));

        let blank = board.blank().expect("board has a blank");
        for (movement, next) in board.successors() {
            let moved = next.blank().expect("neighbour has a blank");
            let distance = (blank / SIDE).abs_diff(moved / SIDE) + (blank % SIDE).abs_diff(moved % SIDE);
            assert_eq!(distance, 1);

            let differing = (0..CELLS).filter(|&i| board.tile(i) != next.tile(i)).count();
            assert_eq!(differing, 2);

            assert_eq!(next.apply(movement.opposite()), Some(board));
        }
    }
}

// Tests both random start generators only produce solvable permutations
#[test]
fn test_random_starts_are_solvable() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..20 {
        let shuffled = Board::shuffled(&mut rng);
        let mut tiles = shuffled.tiles();
        tiles.sort_unstable();
        assert_eq!(tiles, std::array::from_fn(|i| i as u8));
        assert!(is_solvable(shuffled));

        assert!(is_solvable(Board::scrambled(&mut rng, 25)));
    }
}

// Tests a zero-length scramble stays on the goal
#[test]
fn test_scramble_zero_moves() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(Board::scrambled(&mut rng, 0), Board::GOAL);
}
