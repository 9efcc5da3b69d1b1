//! Position evaluation from shortest-path distances to victory

use std::collections::VecDeque;

use crate::board::{Board, Coord, GoalAxis, Player};

/// Terminal score magnitude; dominates every distance-based score
pub const WIN_SCORE: i32 = 1_000;

/// Remaining placements `player` needs to join their goal edges, by 0-1
/// BFS: own stones cost 0 to traverse, empty cells cost 1, opponent
/// stones are impassable. Zero-cost relaxations go to the front of the
/// deque, unit-cost ones to the back, so cells pop in distance order
/// without a priority queue. `None` when the opponent has walled the
/// player off.
pub fn shortest_path(board: &Board, player: Player) -> Option<u32> {
    let size = board.size();
    let axis = player.goal_axis();
    let goal = size - 1;

    let mut dist = vec![u32::MAX; size * size];
    let mut deque: VecDeque<Coord> = VecDeque::new();

    // Seed the whole start edge
    for i in 0..size {
        let cell = match axis {
            GoalAxis::Columns => Coord::new(i, 0),
            GoalAxis::Rows => Coord::new(0, i),
        };
        match board.get(cell) {
            Some(owner) if owner == player => {
                dist[cell.row * size + cell.col] = 0;
                deque.push_front(cell);
            }
            None => {
                dist[cell.row * size + cell.col] = 1;
                deque.push_back(cell);
            }
            _ => {}
        }
    }

    let mut best: Option<u32> = None;
    while let Some(cell) = deque.pop_front() {
        let here = dist[cell.row * size + cell.col];
        if cell.along(axis) == goal {
            best = Some(best.map_or(here, |b| b.min(here)));
            continue;
        }
        for next in board.neighbors(cell) {
            let step = match board.get(next) {
                Some(owner) if owner == player => 0,
                None => 1,
                _ => continue,
            };
            let candidate = here + step;
            let slot = &mut dist[next.row * size + next.col];
            if candidate < *slot {
                *slot = candidate;
                if step == 0 {
                    deque.push_front(next);
                } else {
                    deque.push_back(next);
                }
            }
        }
    }
    best
}

/// Score a position for `player`: how much closer they are to connecting
/// than the opponent. Saturates at +/-WIN_SCORE for decided positions.
pub fn heuristic(board: &Board, player: Player) -> i32 {
    let own = shortest_path(board, player);
    let opponent = shortest_path(board, player.opponent());
    match (own, opponent) {
        (Some(0), _) => WIN_SCORE,
        (_, Some(0)) => -WIN_SCORE,
        (Some(own), Some(opp)) => opp as i32 - own as i32,
        (Some(_), None) => WIN_SCORE - 1,
        (None, Some(_)) => 1 - WIN_SCORE,
        (None, None) => 0,
    }
}

// ============================================================================
// TESTS
// ============================================================================
