//! Play command - the console game loop
//!
//! Renders the board as a rhombus, reads human moves as "row col", asks
//! the engine for AI moves, and announces the winner or a draw. The loop
//! validates every human move before touching the board; the engine only
//! ever sees legal positions.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use hexmind_core::{check_connection, Board, Coord, HexAi, Player};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Board size N (the board is N x N)
    #[arg(long, default_value = "5")]
    pub size: usize,

    /// Who plays whom
    #[arg(long, value_enum, default_value = "human-ai")]
    pub mode: Mode,

    /// Color taken by the human in human-ai mode
    #[arg(long, value_enum, default_value = "blue")]
    pub human: Color,

    /// RNG seed for the AI (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the finished game as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    HumanHuman,
    HumanAi,
    AiAi,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Color {
    Blue,
    Red,
}

impl From<Color> for Player {
    fn from(color: Color) -> Player {
        match color {
            Color::Blue => Player::Blue,
            Color::Red => Player::Red,
        }
    }
}

// ============================================================================
// GAME RECORD
// ============================================================================

/// Finished game, dumpable as JSON with --json
#[derive(Serialize)]
struct GameRecord {
    size: usize,
    seed: u64,
    moves: Vec<MoveRecord>,
    winner: Option<Player>,
}

#[derive(Serialize)]
struct MoveRecord {
    player: Player,
    row: usize,
    col: usize,
}

// ============================================================================
// GAME LOOP
// ============================================================================

/// One seat at the table: a human reading stdin, or an engine instance
enum Seat {
    Human,
    Engine(HexAi),
}

pub fn run(args: PlayArgs) -> Result<()> {
    let mut board = Board::new(args.size)?;
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut seats = build_seats(&args, seed);
    let mut record = GameRecord {
        size: args.size,
        seed,
        moves: Vec::new(),
        winner: None,
    };

    tracing::info!("starting {}x{} game, seed={}", args.size, args.size, seed);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut current = Player::Blue;

    loop {
        render(&board);

        if let Some(conn) = check_connection(&board, Player::Blue) {
            println!(
                "Blue wins, connecting {:?} to {:?}.",
                (conn.start.row, conn.start.col),
                (conn.end.row, conn.end.col)
            );
            record.winner = Some(Player::Blue);
            break;
        }
        if let Some(conn) = check_connection(&board, Player::Red) {
            println!(
                "Red wins, connecting {:?} to {:?}.",
                (conn.start.row, conn.start.col),
                (conn.end.row, conn.end.col)
            );
            record.winner = Some(Player::Red);
            break;
        }
        if board.is_full() {
            println!("Draw: no empty cells remain.");
            break;
        }

        println!("\n{current:?} to move.");
        let mv = match seat_mut(&mut seats, current) {
            Seat::Human => read_human_move(&board, &mut input)?,
            Seat::Engine(ai) => {
                let mv = ai.decide_move(&mut board)?;
                tracing::info!("{current:?} AI plays ({}, {})", mv.row, mv.col);
                println!("The AI plays ({}, {}).", mv.row, mv.col);
                mv
            }
        };
        board.place(mv, current);
        record.moves.push(MoveRecord {
            player: current,
            row: mv.row,
            col: mv.col,
        });
        current = current.opponent();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    }
    Ok(())
}

fn build_seats(args: &PlayArgs, seed: u64) -> [Seat; 2] {
    match args.mode {
        Mode::HumanHuman => [Seat::Human, Seat::Human],
        Mode::AiAi => [
            Seat::Engine(HexAi::with_seed(Player::Blue, seed)),
            Seat::Engine(HexAi::with_seed(Player::Red, seed.wrapping_add(1))),
        ],
        Mode::HumanAi => {
            let human: Player = args.human.into();
            let ai = human.opponent();
            let mut seats = [Seat::Human, Seat::Human];
            seats[ai as usize] = Seat::Engine(HexAi::with_seed(ai, seed));
            seats
        }
    }
}

fn seat_mut(seats: &mut [Seat; 2], player: Player) -> &mut Seat {
    &mut seats[player as usize]
}

/// Prompt until the human enters a legal "row col" move
fn read_human_move(board: &Board, input: &mut impl BufRead) -> Result<Coord> {
    loop {
        print!("Enter your move as 'row col': ");
        io::stdout().flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("reading move")?;
        if read == 0 {
            anyhow::bail!("input closed before the game finished");
        }

        let mut parts = line.split_whitespace();
        let parsed = match (parts.next(), parts.next(), parts.next()) {
            (Some(row), Some(col), None) => {
                match (row.parse::<usize>(), col.parse::<usize>()) {
                    (Ok(row), Ok(col)) => Some(Coord::new(row, col)),
                    _ => None,
                }
            }
            _ => None,
        };

        match parsed {
            Some(cell) if cell.row < board.size() && cell.col < board.size() => {
                if board.get(cell).is_none() {
                    return Ok(cell);
                }
                println!("Cell ({}, {}) is taken. Try again.", cell.row, cell.col);
            }
            _ => println!("Could not read that as 'row col'. Try again."),
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Print the board as a rhombus: each row shifts right so the hex
/// adjacency reads correctly on screen.
fn render(board: &Board) {
    let size = board.size();

    print!("\n    ");
    for col in 0..size {
        print!("{col:>2} ");
    }
    println!();

    for row in 0..size {
        print!("{}{row:>2}   ", " ".repeat(row));
        for col in 0..size {
            let glyph = match board.get(Coord::new(row, col)) {
                Some(Player::Blue) => 'B',
                Some(Player::Red) => 'R',
                None => '.',
            };
            print!("{glyph}  ");
        }
        println!("{row}");
    }

    print!("    {}", " ".repeat(size));
    for col in 0..size {
        print!("{col:>2} ");
    }
    println!();
}
