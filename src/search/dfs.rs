use std::collections::HashMap;

use super::{ensure_solvable, Found, PredecessorMap};
use crate::error::SolveError;
use crate::puzzle::Board;

/// When a board already in the map may be pushed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Revisit {
    Never,
    WhenShallower,
}

/// Depth-first search that never expands past `max_depth`.
///
/// Each board is entered at most once, at whatever depth it is first reached.
/// A board first reached along a long branch is not reopened when a shorter
/// route turns up later, so the result is neither shortest nor guaranteed to
/// exist even when a solution fits under the cap.
pub fn dfs(start: Board, max_depth: u32) -> Result<Found, SolveError> {
    ensure_solvable(start)?;
    depth_first(start, max_depth, Revisit::Never)
        .ok_or(SolveError::BoundExhausted { bound: max_depth })
}

/// Depth-limited search with a fresh predecessor map, no parity gate.
///
/// Unlike [`dfs`], a board is reopened when reached at a strictly smaller
/// depth, so any goal within `limit` moves is found.
pub fn dls(start: Board, limit: u32) -> Option<Found> {
    depth_first(start, limit, Revisit::WhenShallower)
}

fn depth_first(start: Board, limit: u32, revisit: Revisit) -> Option<Found> {
    let mut parents = PredecessorMap::new(start);
    let mut depths: HashMap<Board, u32> = HashMap::from([(start, 0)]);
    let mut frontier = vec![(start, 0)];

    while let Some((current, depth)) = frontier.pop() {
        if current == Board::GOAL {
            return Some(Found {
                goal: current,
                parents,
            });
        }

        if depth >= limit {
            continue;
        }

        // Superseded by a shallower copy further up the stack.
        if revisit == Revisit::WhenShallower
            && depths.get(&current).is_some_and(|&best| best < depth)
        {
            continue;
        }

        let reached = depth + 1;
        for next in current.neighbors() {
            let open = match revisit {
                Revisit::Never => parents.discover(next, current),
                Revisit::WhenShallower => {
                    let shallower = depths.get(&next).map_or(true, |&best| reached < best);
                    if shallower {
                        depths.insert(next, reached);
                        parents.record(next, current);
                    }
                    shallower
                }
            };

            if open {
                frontier.push((next, reached));
            }
        }
    }

    None
}
