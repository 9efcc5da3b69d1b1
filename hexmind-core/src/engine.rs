//! Per-turn decision orchestration
//!
//! Selects, in order: the center opening, a forced win for the acting
//! player, a forced block against the opponent, then Monte Carlo or
//! minimax depending on game phase.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::{Board, Coord, HexError, Player};
use crate::rollout::{monte_carlo_move, RolloutConfig};
use crate::search::{depth_limit, minimax};
use crate::threat::find_forced_win;

/// Default RNG seed for reproducible play
const DEFAULT_SEED: u64 = 42;

// Game-phase thresholds above which random rollouts replace minimax;
// larger boards tolerate deeper random play before search is affordable
const PHASE_LARGE: f64 = 0.50; // size > 15
const PHASE_MEDIUM: f64 = 0.70; // size > 9
const PHASE_SMALL: f64 = 0.85; // size <= 9

/// Automated Hex player
pub struct HexAi {
    player: Player,
    rng: ChaCha8Rng,
    move_budget: Option<Duration>,
}

impl HexAi {
    pub fn new(player: Player) -> Self {
        Self::with_seed(player, DEFAULT_SEED)
    }

    pub fn with_seed(player: Player, seed: u64) -> Self {
        Self {
            player,
            rng: ChaCha8Rng::seed_from_u64(seed),
            move_budget: None,
        }
    }

    /// Bound the wall-clock time of a single decision. Search and
    /// rollouts fall back to the best candidate found when it elapses.
    pub fn with_move_budget(mut self, budget: Duration) -> Self {
        self.move_budget = Some(budget);
        self
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Choose the move to play. The board is mutated internally by the
    /// search components and restored exactly before returning.
    ///
    /// Callers should detect a full board beforehand and score the game
    /// a draw; asking for a move anyway is reported as `FullBoard`.
    pub fn decide_move(&mut self, board: &mut Board) -> Result<Coord, HexError> {
        if board.is_full() {
            return Err(HexError::FullBoard);
        }
        let deadline = self.move_budget.map(|budget| Instant::now() + budget);

        if let Some(center) = opening_move(board) {
            return Ok(center);
        }
        if let Some(winning) = find_forced_win(board, self.player) {
            return Ok(winning);
        }
        if let Some(block) = find_forced_win(board, self.player.opponent()) {
            return Ok(block);
        }

        let size = board.size();
        let phase = board.empty_fraction();
        let wide_open = (size > 15 && phase > PHASE_LARGE)
            || (size > 9 && phase > PHASE_MEDIUM)
            || (size <= 9 && phase > PHASE_SMALL);

        if wide_open {
            let config = RolloutConfig::for_size(size);
            monte_carlo_move(board, self.player, &config, &mut self.rng, deadline)
                .ok_or(HexError::FullBoard)
        } else {
            let depth = depth_limit(board);
            let (best, _) = minimax(
                board,
                self.player,
                depth,
                true,
                i32::MIN,
                i32::MAX,
                deadline,
            );
            best.ok_or(HexError::FullBoard)
        }
    }
}

/// The center cell (rounded toward the left on even sizes) whenever it is
/// still free: the strongest known opening.
fn opening_move(board: &Board) -> Option<Coord> {
    let n = board.size();
    let center = if n % 2 == 1 {
        Coord::new(n / 2, n / 2)
    } else {
        Coord::new(n / 2, n / 2 - 1)
    };
    (board.get(center).is_none()).then_some(center)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect::check_connection;

    #[test]
    fn test_opens_in_the_center() {
        let mut board = Board::new(5).unwrap();
        let mut ai = HexAi::new(Player::Blue);
        assert_eq!(ai.decide_move(&mut board), Ok(Coord::new(2, 2)));

        let mut even = Board::new(4).unwrap();
        assert_eq!(ai.decide_move(&mut even), Ok(Coord::new(2, 1)));
    }

    #[test]
    fn test_full_board_is_reported_not_played() {
        let mut board = Board::new(2).unwrap();
        board.place(Coord::new(0, 0), Player::Blue);
        board.place(Coord::new(0, 1), Player::Red);
        board.place(Coord::new(1, 0), Player::Red);
        board.place(Coord::new(1, 1), Player::Blue);

        let mut ai = HexAi::new(Player::Blue);
        assert_eq!(ai.decide_move(&mut board), Err(HexError::FullBoard));
        // Nothing was placed or removed
        assert_eq!(board.empty_count(), 0);
    }

    #[test]
    fn test_takes_an_immediate_win() {
        let mut board = Board::new(5).unwrap();
        // Center occupied so the opening rule does not fire
        board.place(Coord::new(2, 2), Player::Blue);
        // Red owns column 0 except the gap at (2, 0)
        for row in [0, 1, 3, 4] {
            board.place(Coord::new(row, 0), Player::Red);
        }

        let mut ai = HexAi::new(Player::Red);
        let mv = ai.decide_move(&mut board).unwrap();
        assert_eq!(mv, Coord::new(2, 0));
        board.place(mv, Player::Red);
        assert!(check_connection(&board, Player::Red).is_some());
    }

    #[test]
    fn test_blocks_the_opponent_forced_win() {
        let mut board = Board::new(5).unwrap();
        board.place(Coord::new(2, 2), Player::Blue); // takes the center
        // Red is one stone from a top-bottom chain down column 4
        for row in [0, 1, 3, 4] {
            board.place(Coord::new(row, 4), Player::Red);
        }

        let mut ai = HexAi::new(Player::Blue);
        let mv = ai.decide_move(&mut board).unwrap();
        assert_eq!(mv, Coord::new(2, 4));
    }

    #[test]
    fn test_decision_leaves_board_unchanged() {
        let mut board = Board::new(5).unwrap();
        board.place(Coord::new(2, 2), Player::Blue);
        board.place(Coord::new(1, 3), Player::Red);
        let snapshot = board.clone();

        let mut ai = HexAi::with_seed(Player::Red, 3);
        let mv = ai.decide_move(&mut board).unwrap();
        assert_eq!(board, snapshot);
        assert!(board.get(mv).is_none());
    }

    #[test]
    fn test_seeded_ai_is_deterministic() {
        let mut picks = Vec::new();
        for _ in 0..2 {
            let mut board = Board::new(5).unwrap();
            board.place(Coord::new(2, 2), Player::Blue);
            board.place(Coord::new(1, 3), Player::Red);
            let mut ai = HexAi::with_seed(Player::Blue, 21);
            picks.push(ai.decide_move(&mut board).unwrap());
        }
        assert_eq!(picks[0], picks[1]);
    }
}
