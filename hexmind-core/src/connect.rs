//! Connectivity analysis: has a player chained their two goal edges?

use rustc_hash::FxHashSet;

use crate::board::{Board, Coord, GoalAxis, Player};

/// Endpoints of a winning chain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connection {
    pub start: Coord,
    pub end: Coord,
}

/// Depth-first search over `player`'s stones, launched from every owned
/// cell on the start edge. Succeeds the moment a same-colored neighbor
/// lies on the goal edge, returning the path's two terminal cells. Each
/// owned cell is visited at most once, so the whole scan is O(stones).
pub fn check_connection(board: &Board, player: Player) -> Option<Connection> {
    let size = board.size();
    let axis = player.goal_axis();
    let goal = size - 1;

    let mut visited: FxHashSet<Coord> = FxHashSet::default();
    let mut stack: Vec<Coord> = Vec::new();

    for i in 0..size {
        let start = match axis {
            GoalAxis::Columns => Coord::new(i, 0),
            GoalAxis::Rows => Coord::new(0, i),
        };
        if board.get(start) != Some(player) || visited.contains(&start) {
            continue;
        }

        visited.insert(start);
        stack.clear();
        stack.push(start);
        while let Some(cell) = stack.pop() {
            for next in board.neighbors(cell) {
                if board.get(next) != Some(player) {
                    continue;
                }
                if next.along(axis) == goal {
                    return Some(Connection { start, end: next });
                }
                if visited.insert(next) {
                    stack.push(next);
                }
            }
        }
    }
    None
}

// ============================================================================
// TESTS
// ============================================================================
