//! Text front end for the rules engine.
//!
//! Run with:
//! `cargo run -- play`
//! `cargo run -- random --seed 42 --max-plies 200`
//! `cargo run --release -- perft --depth 4`

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chess_rules::move_generation::perft::perft;
use chess_rules::utils::algebraic::{algebraic_to_location, parse_move};
use chess_rules::utils::random_game::play_random_game;
use chess_rules::utils::render_game_state::render_game_state;
use chess_rules::GameState;

#[derive(Parser)]
#[command(name = "chess_rules", version, about = "Chess rules engine front end")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a game by typing moves such as `e2e4` on stdin.
    Play,
    /// Play uniformly random legal moves from the starting position.
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
    },
    /// Count leaf nodes of the legal-move tree from the starting position.
    Perft {
        #[arg(long, default_value_t = 3)]
        depth: u8,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(),
        Command::Random { seed, max_plies } => {
            run_random(seed, max_plies);
            Ok(())
        }
        Command::Perft { depth } => {
            let counts = perft(&GameState::new_game(), depth);
            println!("{counts:#?}");
            Ok(())
        }
    }
}

fn run_play() -> Result<()> {
    let mut game = GameState::new_game();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_position(&game);
    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (None, _) => {}
            (Some("quit"), _) => break,
            (Some("reset"), _) => {
                game.reset();
                print_position(&game);
            }
            (Some("moves"), Some(square)) => match algebraic_to_location(square) {
                Ok(location) => {
                    let listed: Vec<String> = game
                        .legal_moves(location)
                        .iter()
                        .map(|mv| mv.to_string())
                        .collect();
                    println!("{}", listed.join(" "));
                }
                Err(e) => println!("{e}"),
            },
            (Some(text), _) => {
                match parse_move(text).and_then(|mv| game.try_make_move(mv)) {
                    Ok(()) => print_position(&game),
                    Err(e) => println!("{e}"),
                }
            }
        }
        if game.is_game_over() {
            println!("{}", game.result_text());
            break;
        }
        stdout.flush()?;
    }
    Ok(())
}

fn run_random(seed: u64, max_plies: usize) {
    let report = play_random_game(seed, max_plies);
    let listed: Vec<String> = report.moves.iter().map(|mv| mv.to_string()).collect();
    println!("{}", listed.join(" "));
    println!("{}", render_game_state(&report.final_state));
    if report.reached_terminal_state() {
        println!("{}", report.final_state.result_text());
    } else {
        info!(plies = report.moves.len(), "ply limit reached");
    }
}

fn print_position(game: &GameState) {
    println!("{}", render_game_state(game));
    let side = game.side_to_move();
    if game.is_in_check(side) {
        println!("{side} to move (check)");
    } else {
        println!("{side} to move");
    }
}
