use tracing::debug;

use super::{dls, ensure_solvable, Found};
use crate::error::SolveError;
use crate::puzzle::Board;

/// Iterative deepening: depth-limited search with limits `0..=absolute_max`.
///
/// Returns the first hit, which has the minimum move count. Shallow layers
/// are re-explored on every pass.
pub fn ids(start: Board, absolute_max: u32) -> Result<Found, SolveError> {
    ensure_solvable(start)?;

    for limit in 0..=absolute_max {
        debug!(event = "ids_depth", limit);
        if let Some(found) = dls(start, limit) {
            return Ok(found);
        }
    }

    Err(SolveError::BoundExhausted {
        bound: absolute_max,
    })
}
