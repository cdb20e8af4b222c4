//! Mancala-Rust: play Kalah against a minimax engine.
//!
//! ## Usage
//!
//! - `mancala-rust` - Play as White against the engine
//! - `mancala-rust play --human black --depth 9` - Play as Black at depth 9
//! - `mancala-rust selfplay --opponent random --seed 7` - Watch the engine play

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fastrand::Rng;
use log::{LevelFilter, info};

use mancala_rust::board::pit_for_hole;
use mancala_rust::constants::{DEFAULT_DEPTH, MAX_DEPTH};
use mancala_rust::playout::random_move;
use mancala_rust::position::{Position, Side};
use mancala_rust::search::Searcher;
use mancala_rust::shell::Shell;

/// Mancala-Rust: a Kalah engine with fixed-depth minimax
#[derive(Parser)]
#[command(name = "mancala-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine on the terminal
    Play {
        /// Side the human plays
        #[arg(long, value_enum, default_value_t = Colour::White)]
        human: Colour,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Let the engine play a whole game and print it
    Selfplay {
        /// Who plays Black against the engine
        #[arg(long, value_enum, default_value_t = Opponent::Engine)]
        opponent: Opponent,
        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(clap::Args)]
struct EngineArgs {
    /// Search depth in plies
    #[arg(short, long, default_value_t = DEFAULT_DEPTH,
          value_parser = clap::value_parser!(u32).range(1..=MAX_DEPTH as i64))]
    depth: u32,
    /// Search every branch instead of pruning with alpha-beta
    #[arg(long)]
    no_pruning: bool,
}

impl EngineArgs {
    fn searcher(&self) -> Searcher {
        Searcher::new(self.depth).with_pruning(!self.no_pruning)
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum Colour {
    White,
    Black,
}

impl From<Colour> for Side {
    fn from(colour: Colour) -> Self {
        match colour {
            Colour::White => Side::White,
            Colour::Black => Side::Black,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// The engine plays both sides
    Engine,
    /// Black plays uniformly random moves
    Random,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Some(Commands::Play { human, engine }) => {
            Shell::new(human.into(), engine.searcher()).run()
        }
        Some(Commands::Selfplay {
            opponent,
            seed,
            engine,
        }) => run_selfplay(engine.searcher(), opponent, seed),
        None => Shell::new(Side::White, Searcher::new(DEFAULT_DEPTH)).run(),
    }
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    match log_file {
        Some(path) => simple_logging::log_to_file(path, level)
            .with_context(|| format!("failed to open log file {}", path.display()))?,
        None => simple_logging::log_to_stderr(level),
    }
    Ok(())
}

fn run_selfplay(mut searcher: Searcher, opponent: Opponent, seed: Option<u64>) -> Result<()> {
    let mut rng = seed.map_or_else(Rng::new, Rng::with_seed);
    let mut pos = Position::new();
    let mut plies = 0;
    println!("{pos}");

    while !pos.is_terminal() {
        let side = pos.side_to_move();
        let hole = if side == Side::Black && opponent == Opponent::Random {
            random_move(&pos, &mut rng)
        } else {
            searcher.best_move(&pos)
        }
        .context("no move found in a live position")?;

        pos = pos.play(hole)?;
        plies += 1;
        println!("{side} plays pit {}\n\n{pos}", pit_for_hole(hole));
    }

    let (white, black) = pos.final_score();
    info!("game over after {plies} moves");
    println!("final score: white {white}, black {black}");
    Ok(())
}
