//! Hexmind Core - Hex decision engine
//!
//! This crate provides the move-selection core for the board game Hex:
//! - Board state with placement, search undo, and move enumeration
//! - Connectivity analysis (has a player chained their goal edges?)
//! - Forced-win threat detection with recursive board reduction
//! - Shortest-path position evaluation (0-1 BFS)
//! - Alpha-beta minimax search
//! - Monte Carlo rollout scoring for the open early game
//!
//! The console front end lives in the `hexmind-cli` crate and talks to
//! this one through `Board` and `HexAi::decide_move`.

pub mod board;
pub mod connect;
pub mod engine;
pub mod eval;
pub mod rollout;
pub mod search;
pub mod threat;

// Re-exports for convenient access
pub use board::{Board, Coord, GoalAxis, HexError, Player, MIN_BOARD_SIZE, NEIGHBOR_OFFSETS};
pub use connect::{check_connection, Connection};
pub use engine::HexAi;
pub use eval::{heuristic, shortest_path, WIN_SCORE};
#[cfg(feature = "parallel")]
pub use rollout::parallel_monte_carlo_move;
pub use rollout::{monte_carlo_move, RolloutConfig};
pub use search::{depth_limit, minimax};
pub use threat::{find_forced_win, find_immediate_win, has_double_threat};
