//! Goban: a rules engine for the game of Go.
//!
//! ## Usage
//!
//! - `goban` - Show a short scripted demo
//! - `goban demo` - Same as above
//! - `goban selfplay --seed 7` - Play a random game to completion
//!
//! Board size and komi apply to every command: `goban --size 13 selfplay`.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use goban::board::{Board, Move};
use goban::config::GameConfig;
use goban::shuffle::shuffle;

/// Goban: a rules engine for the game of Go
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length
    #[arg(long, default_value_t = 9)]
    size: usize,

    /// Komi awarded to White
    #[arg(long, default_value_t = 6.5)]
    komi: f64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a short scripted demo game
    Demo,
    /// Play out a full game with uniformly random legal moves
    Selfplay {
        /// Seed for the move-ordering shuffle
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.size < 2 {
        bail!("board size must be at least 2, got {}", cli.size);
    }
    let config = GameConfig::new(cli.size, cli.komi);

    match cli.command {
        Some(Commands::Selfplay { seed }) => run_selfplay(config, seed),
        Some(Commands::Demo) | None => run_demo(config),
    }
}

fn run_demo(config: GameConfig) -> Result<()> {
    println!("Goban: Go rules engine demo\n");

    let mut board = Board::new(config);
    for (row, col) in [(4, 4), (2, 2), (4, 2), (2, 4), (3, 3)] {
        match board.place_stone(Move::Play(row, col)) {
            Ok(()) => println!("({row},{col}): ok"),
            Err(e) => println!("({row},{col}): {e}"),
        }
    }
    println!("\n{board}");
    println!(
        "turn {}, {} to move, captures b:{} w:{}",
        board.turn(),
        board.to_move(),
        board.black_captured(),
        board.white_captured()
    );
    Ok(())
}

fn run_selfplay(config: GameConfig, seed: u64) -> Result<()> {
    let mut board = Board::new(config);
    let mut rng = fastrand::Rng::with_seed(seed);
    // Generous cap so a pathological game still terminates
    let max_turns = (config.size * config.size * 3) as u32;

    while !board.is_game_over() && board.turn() < max_turns {
        let mover = board.to_move();
        let mut candidates: Vec<(usize, usize)> = Vec::new();
        for row in 0..config.size {
            for col in 0..config.size {
                // Never fill one's own eyes; everything else is worth a try
                if board.is_free(row, col) && board.is_eye(row, col) != Some(mover) {
                    candidates.push((row, col));
                }
            }
        }
        shuffle(&mut candidates, &mut rng);

        let mut played = false;
        for (row, col) in candidates {
            if board.place_stone(Move::Play(row, col)).is_ok() {
                played = true;
                break;
            }
        }
        if !played {
            board.place_stone(Move::Pass)?;
        }
    }

    println!("{board}");
    match board.determine_winner() {
        Some((winner, black, white)) => {
            println!("winner: {winner} (black {black}, white {white})");
        }
        None => println!("no result after {} turns", board.turn()),
    }
    Ok(())
}
