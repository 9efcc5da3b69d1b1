//! Forced-win detection: immediate wins and two-move double threats
//!
//! The escalating check proves a win two moves ahead without search: a
//! move qualifies when it leaves two independent one-move completions the
//! opponent cannot block with a single reply (the classic Hex bridge),
//! either directly on the goal edges or on ring-reduced copies of the
//! board.

use crate::board::{Board, Coord, GoalAxis, Player};
use crate::connect::check_connection;

/// Smallest board the ring reduction may still shrink
const MIN_REDUCIBLE: usize = 3;

/// A move that wins on the spot, if any. Probes every empty cell with a
/// strictly nested place/check/undo cycle.
pub fn find_immediate_win(board: &mut Board, player: Player) -> Option<Coord> {
    for cell in board.empty_cells() {
        board.place(cell, player);
        let won = check_connection(board, player).is_some();
        board.remove(cell, player);
        if won {
            return Some(cell);
        }
    }
    None
}

/// A move that wins now or guarantees a win next round by creating a
/// double threat. Used symmetrically: once for the acting player, once
/// with roles swapped to find a forced block.
pub fn find_forced_win(board: &mut Board, player: Player) -> Option<Coord> {
    if let Some(cell) = find_immediate_win(board, player) {
        return Some(cell);
    }
    for cell in board.empty_cells() {
        board.place(cell, player);
        let forced = has_double_threat(board, player, true);
        board.remove(cell, player);
        if forced {
            return Some(cell);
        }
    }
    None
}

/// Both goal edges of `player`, in row-major scan order
fn goal_edge_cells(size: usize, player: Player) -> Vec<Coord> {
    let mut cells = Vec::with_capacity(2 * size);
    match player.goal_axis() {
        GoalAxis::Columns => {
            for row in 0..size {
                cells.push(Coord::new(row, 0));
                cells.push(Coord::new(row, size - 1));
            }
        }
        GoalAxis::Rows => {
            for col in 0..size {
                cells.push(Coord::new(0, col));
                cells.push(Coord::new(size - 1, col));
            }
        }
    }
    cells
}

/// Does the position hold two or more one-move goal-edge completions?
/// With `escalate`, positions the ring-reduction analysis proves winnable
/// two moves ahead also qualify. The reduction evaluates this same
/// predicate in its non-escalating form, so the recursion is one level
/// deep by construction.
pub fn has_double_threat(board: &mut Board, player: Player, escalate: bool) -> bool {
    let mut completions = 0;
    for cell in goal_edge_cells(board.size(), player) {
        if board.get(cell).is_some() {
            continue;
        }
        board.place(cell, player);
        if check_connection(board, player).is_some() {
            completions += 1;
        }
        board.remove(cell, player);
        if completions > 1 {
            return true;
        }
    }
    if escalate {
        forced_win_after_reduction(board, player)
    } else {
        false
    }
}

/// Ring-reduction escalation. Four (N-1)-sized boards drop one extreme
/// row and one extreme column each; the double threat must survive both
/// reductions of a pair: (top-left and top-right) or (bottom-left and
/// bottom-right). Falls back to the interior-corridor argument.
fn forced_win_after_reduction(board: &Board, player: Player) -> bool {
    let size = board.size();
    if size < MIN_REDUCIBLE {
        return false;
    }
    let reduced = size - 1;

    // (row_start, col_start): 1 drops the first row/column, 0 the last
    let frames = [
        (1, 1), // top-left
        (1, 0), // top-right
        (0, 1), // bottom-left
        (0, 0), // bottom-right
    ];
    let mut threat = [false; 4];
    for (frame, &(row_start, col_start)) in frames.iter().enumerate() {
        let mut sub = board.window(row_start, col_start, reduced);
        threat[frame] = has_double_threat(&mut sub, player, false);
    }
    if (threat[0] && threat[1]) || (threat[2] && threat[3]) {
        return true;
    }

    interior_corridor(board, player)
}

/// Interior-corridor check: the board shrunk by one ring must already be
/// connected for `player`, and each endpoint of that interior path must
/// have at least two empty goal-edge completions adjacent to it in the
/// full frame, so the path can be finished on either side of any block.
fn interior_corridor(board: &Board, player: Player) -> bool {
    let size = board.size();
    if size <= MIN_REDUCIBLE {
        return false;
    }
    let interior = board.window(1, 1, size - 2);
    let connection = match check_connection(&interior, player) {
        Some(c) => c,
        None => return false,
    };

    // Interior endpoints mapped back into the full frame
    let start = Coord::new(connection.start.row + 1, connection.start.col + 1);
    let end = Coord::new(connection.end.row + 1, connection.end.col + 1);

    let edge_cells = goal_edge_cells(size, player);
    let open_exits = |endpoint: Coord| {
        edge_cells
            .iter()
            .filter(|&&cell| board.get(cell).is_none() && endpoint.is_adjacent(cell))
            .count()
    };
    open_exits(start) >= 2 && open_exits(end) >= 2
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, stones: &[(usize, usize)], player: Player) {
        for &(row, col) in stones {
            assert!(board.place(Coord::new(row, col), player));
        }
    }

    #[test]
    fn test_immediate_win_fills_column_gap() {
        // Red joins top to bottom; column 0 minus (2,0) is one move short
        let mut board = Board::new(5).unwrap();
        place_all(&mut board, &[(0, 0), (1, 0), (3, 0), (4, 0)], Player::Red);

        assert_eq!(
            find_immediate_win(&mut board, Player::Red),
            Some(Coord::new(2, 0))
        );
        assert!(find_immediate_win(&mut board, Player::Blue).is_none());
    }

    #[test]
    fn test_immediate_win_fills_row_gap() {
        // The same shape along Blue's axis: row 2 minus (2, 3)
        let mut board = Board::new(5).unwrap();
        place_all(&mut board, &[(2, 0), (2, 1), (2, 2), (2, 4)], Player::Blue);

        assert_eq!(
            find_immediate_win(&mut board, Player::Blue),
            Some(Coord::new(2, 3))
        );
    }

    #[test]
    fn test_immediate_win_agrees_with_probe() {
        // Exactness: a move is reported iff some single placement connects
        let mut board = Board::new(4).unwrap();
        place_all(&mut board, &[(1, 0), (1, 1)], Player::Blue);
        assert!(find_immediate_win(&mut board, Player::Blue).is_none());

        board.place(Coord::new(1, 2), Player::Blue);
        assert_eq!(
            find_immediate_win(&mut board, Player::Blue),
            Some(Coord::new(1, 3))
        );
    }

    #[test]
    fn test_probes_leave_board_unchanged() {
        let mut board = Board::new(5).unwrap();
        place_all(&mut board, &[(2, 0), (2, 1)], Player::Blue);
        place_all(&mut board, &[(0, 2), (1, 2)], Player::Red);
        let snapshot = board.clone();

        find_immediate_win(&mut board, Player::Blue);
        assert_eq!(board, snapshot);
        find_forced_win(&mut board, Player::Red);
        assert_eq!(board, snapshot);
        has_double_threat(&mut board, Player::Blue, true);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_double_threat_counts_edge_completions() {
        // Blue chain reaching (1, 3): both (1, 4) and (0, 4) complete it
        let mut board = Board::new(5).unwrap();
        place_all(&mut board, &[(2, 0), (2, 1), (2, 2), (1, 3)], Player::Blue);

        assert!(has_double_threat(&mut board, Player::Blue, false));
    }

    #[test]
    fn test_single_completion_is_not_a_double_threat() {
        // Only (1, 4) completes: (0, 4) is already Red's
        let mut board = Board::new(5).unwrap();
        place_all(&mut board, &[(2, 0), (2, 1), (2, 2), (1, 3)], Player::Blue);
        board.place(Coord::new(0, 4), Player::Red);

        assert!(!has_double_threat(&mut board, Player::Blue, false));
    }

    #[test]
    fn test_forced_win_is_unstoppable() {
        // Blue chain touching the left edge, one bridge short of the right
        let mut board = Board::new(5).unwrap();
        place_all(&mut board, &[(2, 0), (2, 1), (2, 2)], Player::Blue);

        let bridge = find_forced_win(&mut board, Player::Blue).expect("forced win exists");

        // Semantic check: after the bridge move, every Red reply still
        // leaves Blue an immediate win.
        assert!(board.place(bridge, Player::Blue));
        for reply in board.empty_cells() {
            board.place(reply, Player::Red);
            assert!(
                find_immediate_win(&mut board, Player::Blue).is_some(),
                "Red reply {reply:?} refutes the bridge at {bridge:?}",
            );
            board.remove(reply, Player::Red);
        }
        board.remove(bridge, Player::Blue);
    }

    #[test]
    fn test_no_forced_win_from_a_lone_stone() {
        let mut board = Board::new(5).unwrap();
        board.place(Coord::new(2, 2), Player::Blue);
        assert!(find_forced_win(&mut board, Player::Blue).is_none());
    }

    #[test]
    fn test_reduction_guards_small_boards() {
        let mut board = Board::new(2).unwrap();
        board.place(Coord::new(0, 0), Player::Blue);
        // Must terminate without attempting a zero-sized reduction
        assert!(!has_double_threat(&mut board, Player::Blue, true));
    }
}
