//! Monte Carlo move scoring from uniformly random playouts
//!
//! Used in the open early game where minimax branching is too wide:
//! trades precision for coverage by sampling complete random
//! continuations instead of searching them.

use std::time::Instant;

use rand::Rng;

use crate::board::{Board, Coord, Player};
use crate::connect::check_connection;
use crate::eval::{heuristic, WIN_SCORE};

/// Simulation budget and playout depth, derived from board size
#[derive(Clone, Copy, Debug)]
pub struct RolloutConfig {
    /// Total random trials per decision
    pub simulations: u32,
    /// Cap on random placements per playout; `None` plays until a side
    /// connects
    pub max_depth: Option<u32>,
}

impl RolloutConfig {
    /// Smaller boards afford more trials and uncapped playouts
    pub fn for_size(size: usize) -> Self {
        Self {
            simulations: if size < 9 { 2000 } else { 1000 },
            max_depth: if size > 7 { Some(20) } else { None },
        }
    }
}

/// One random playout, scored from `player`'s perspective: alternate
/// uniform placements until a side connects or the depth budget runs
/// out, then undo every placement on the way back up. Placements are
/// strictly nested, so the board comes back bit-for-bit.
fn simulate<R: Rng>(
    board: &mut Board,
    player: Player,
    on_turn: Player,
    depth: Option<u32>,
    rng: &mut R,
) -> i32 {
    if check_connection(board, player).is_some() {
        return WIN_SCORE;
    }
    if check_connection(board, player.opponent()).is_some() {
        return -WIN_SCORE;
    }
    if depth == Some(0) {
        return heuristic(board, player);
    }
    let moves = board.empty_cells();
    if moves.is_empty() {
        return heuristic(board, player);
    }

    let cell = moves[rng.gen_range(0..moves.len())];
    board.place(cell, on_turn);
    let score = simulate(board, player, on_turn.opponent(), depth.map(|d| d - 1), rng);
    board.remove(cell, on_turn);
    score
}

/// Highest mean score among candidates; ties keep the earlier candidate
/// in row-major order, and never-sampled candidates count as zero.
fn select_best(moves: &[Coord], totals: &[i64], plays: &[u32]) -> Coord {
    let mut best = 0;
    let mut best_mean = f64::NEG_INFINITY;
    for i in 0..moves.len() {
        let mean = if plays[i] > 0 {
            totals[i] as f64 / f64::from(plays[i])
        } else {
            0.0
        };
        if mean > best_mean {
            best_mean = mean;
            best = i;
        }
    }
    moves[best]
}

/// Score candidate moves by random playouts and pick the best average.
/// Each trial draws a candidate uniformly, plays it, rolls the game out
/// at random, and undoes everything. An elapsed `deadline` cuts the
/// remaining trials short. `None` only on a full board.
pub fn monte_carlo_move<R: Rng>(
    board: &mut Board,
    player: Player,
    config: &RolloutConfig,
    rng: &mut R,
    deadline: Option<Instant>,
) -> Option<Coord> {
    let moves = board.empty_cells();
    if moves.is_empty() {
        return None;
    }
    let mut totals = vec![0i64; moves.len()];
    let mut plays = vec![0u32; moves.len()];

    for _ in 0..config.simulations {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            break;
        }
        let pick = rng.gen_range(0..moves.len());
        let cell = moves[pick];
        board.place(cell, player);
        let score = simulate(board, player, player.opponent(), config.max_depth, rng);
        board.remove(cell, player);
        totals[pick] += i64::from(score);
        plays[pick] += 1;
    }

    Some(select_best(&moves, &totals, &plays))
}

/// Fan the trial budget out over worker chunks, each playing on its own
/// cloned board with a seed derived from `seed` and its chunk index, then
/// merge the statistics and apply the same selection rule as the
/// sequential path.
#[cfg(feature = "parallel")]
pub fn parallel_monte_carlo_move(
    board: &Board,
    player: Player,
    config: &RolloutConfig,
    seed: u64,
    workers: u32,
) -> Option<Coord> {
    use rand::SeedableRng;
    use rayon::prelude::*;

    let moves = board.empty_cells();
    if moves.is_empty() {
        return None;
    }
    let workers = workers.max(1);
    let per_chunk = config.simulations.div_ceil(workers);

    let chunk_stats: Vec<(Vec<i64>, Vec<u32>)> = (0..workers)
        .into_par_iter()
        .map(|chunk| {
            let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed.wrapping_add(u64::from(chunk)));
            let mut local = board.clone();
            let mut totals = vec![0i64; moves.len()];
            let mut plays = vec![0u32; moves.len()];
            for _ in 0..per_chunk {
                let pick = rng.gen_range(0..moves.len());
                let cell = moves[pick];
                local.place(cell, player);
                let score = simulate(&mut local, player, player.opponent(), config.max_depth, &mut rng);
                local.remove(cell, player);
                totals[pick] += i64::from(score);
                plays[pick] += 1;
            }
            (totals, plays)
        })
        .collect();

    let mut totals = vec![0i64; moves.len()];
    let mut plays = vec![0u32; moves.len()];
    for (chunk_totals, chunk_plays) in chunk_stats {
        for i in 0..moves.len() {
            totals[i] += chunk_totals[i];
            plays[i] += chunk_plays[i];
        }
    }
    Some(select_best(&moves, &totals, &plays))
}

// ============================================================================
// TESTS
// ============================================================================
