//! Error types for parsing and searching

use thiserror::Error;

/// Why a board description was rejected at the input boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    /// Description does not hold exactly sixteen symbols
    #[error("expected 16 hex symbols, got {0}")]
    Length(usize),

    /// Character outside `0-9`, `A-F`
    #[error("invalid symbol '{symbol}' at position {index}")]
    InvalidSymbol {
        /// Offending character
        symbol: char,
        /// Zero-based position in the description
        index: usize,
    },

    /// Symbol appears more than once
    #[error("symbol '{symbol}' appears more than once")]
    DuplicateSymbol {
        /// Repeated character as written
        symbol: char,
    },
}

/// Search failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Parity check failed; no search was attempted
    #[error("board is unsolvable")]
    Unsolvable,

    /// Depth or threshold ceiling reached without finding the goal
    #[error("no solution found within bound {bound}")]
    BoundExhausted {
        /// Ceiling that was exhausted
        bound: u32,
    },
}

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseBoardError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, Error>;
