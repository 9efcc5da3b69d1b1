//! Integration tests: full AI-vs-AI games through the public engine API

use hexmind_core::{check_connection, Board, HexAi, HexError, Player};

/// Drive a game to completion, returning the winner (None on a draw)
fn play_out(size: usize, blue_seed: u64, red_seed: u64) -> (Board, Option<Player>) {
    let mut board = Board::new(size).unwrap();
    let mut blue = HexAi::with_seed(Player::Blue, blue_seed);
    let mut red = HexAi::with_seed(Player::Red, red_seed);
    let mut current = Player::Blue;

    for _ in 0..size * size {
        if check_connection(&board, Player::Blue).is_some() {
            return (board, Some(Player::Blue));
        }
        if check_connection(&board, Player::Red).is_some() {
            return (board, Some(Player::Red));
        }
        if board.is_full() {
            return (board, None);
        }

        let ai = if current == Player::Blue {
            &mut blue
        } else {
            &mut red
        };
        let mv = ai.decide_move(&mut board).unwrap();
        assert!(
            board.place(mv, current),
            "engine proposed occupied cell {mv:?}"
        );
        current = current.opponent();
    }

    let winner = [Player::Blue, Player::Red]
        .into_iter()
        .find(|&p| check_connection(&board, p).is_some());
    (board, winner)
}

#[test]
fn test_ai_game_reaches_a_verdict() {
    let (board, winner) = play_out(5, 7, 11);
    assert!(winner.is_some() || board.is_full());
}

#[test]
fn test_first_move_is_the_center() {
    let mut board = Board::new(5).unwrap();
    let mut ai = HexAi::with_seed(Player::Blue, 1);
    let mv = ai.decide_move(&mut board).unwrap();
    assert_eq!((mv.row, mv.col), (2, 2));
}

#[test]
fn test_full_board_reports_a_draw_condition() {
    let mut board = Board::new(2).unwrap();
    let cells = board.empty_cells();
    for (i, &cell) in cells.iter().enumerate() {
        let player = if i % 2 == 0 { Player::Blue } else { Player::Red };
        assert!(board.place(cell, player));
    }
    assert!(board.is_full());

    let mut ai = HexAi::with_seed(Player::Blue, 1);
    assert_eq!(ai.decide_move(&mut board), Err(HexError::FullBoard));
}

#[test]
fn test_games_are_reproducible_for_fixed_seeds() {
    let (first_board, first_winner) = play_out(5, 3, 4);
    let (second_board, second_winner) = play_out(5, 3, 4);
    assert_eq!(first_winner, second_winner);
    assert_eq!(first_board, second_board);
}
