//! Terminal self-play driver.
//!
//! Run with:
//! `cargo run --release -- --white minimax --black random --seed 7`
//! `RUST_LOG=debug cargo run --release -- --verbose`

use clap::{Parser, ValueEnum};

use chess_rules::engines::engine_minimax::MinimaxEngine;
use chess_rules::engines::engine_random::RandomEngine;
use chess_rules::engines::engine_trait::Engine;
use chess_rules::errors::ChessResult;
use chess_rules::utils::engine_match_harness::{play_engine_match, MatchConfig};
use chess_rules::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineKind {
    Random,
    Minimax,
}

#[derive(Debug, Parser)]
#[command(about = "Play two engines against each other in the terminal")]
struct Args {
    /// Engine playing White.
    #[arg(long, value_enum, default_value_t = EngineKind::Minimax)]
    white: EngineKind,

    /// Engine playing Black.
    #[arg(long, value_enum, default_value_t = EngineKind::Random)]
    black: EngineKind,

    /// Seed for both engines; omitted means OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = MatchConfig::default().max_plies)]
    max_plies: u16,

    /// Log every ply at info level.
    #[arg(short, long)]
    verbose: bool,
}

fn build_engine(kind: EngineKind, seed: Option<u64>) -> Box<dyn Engine> {
    match (kind, seed) {
        (EngineKind::Random, Some(seed)) => Box::new(RandomEngine::with_seed(seed)),
        (EngineKind::Random, None) => Box::new(RandomEngine::new()),
        (EngineKind::Minimax, Some(seed)) => Box::new(MinimaxEngine::with_seed(seed)),
        (EngineKind::Minimax, None) => Box::new(MinimaxEngine::new()),
    }
}

fn main() -> ChessResult<()> {
    env_logger::init();
    let args = Args::parse();

    // Offset Black's seed so mirrored engines do not play identical lines.
    let mut white = build_engine(args.white, args.seed);
    let mut black = build_engine(args.black, args.seed.map(|s| s.wrapping_add(1)));

    let config = MatchConfig {
        max_plies: args.max_plies,
        verbose: args.verbose,
    };
    let result = play_engine_match(white.as_mut(), black.as_mut(), &config)?;

    println!("{}", render_game_state(&result.final_state));
    println!("moves: {}", result.played_moves.join(" "));
    println!("outcome: {:?}", result.outcome);
    Ok(())
}
