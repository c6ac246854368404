//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series -- --player1 minimax --player2 negamax`
//! `RUST_LOG=ember_chess=debug cargo run --bin engine_match_series -- --games 2`

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ember_chess::engines::engine_select::{build_engine, StrategyKind};
use ember_chess::engines::engine_trait::SearchParams;
use ember_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Parser)]
#[command(author, version, about = "Play a series of games between two engines", long_about = None)]
struct Args {
    /// Strategy for player 1 (heuristic, minimax, negamax)
    #[arg(long, default_value = "minimax")]
    player1: StrategyKind,

    /// Strategy for player 2 (heuristic, minimax, negamax)
    #[arg(long, default_value = "heuristic")]
    player2: StrategyKind,

    /// Difficulty for player 1, 1..=10
    #[arg(long, default_value_t = 5)]
    difficulty1: u8,

    /// Difficulty for player 2, 1..=10
    #[arg(long, default_value_t = 5)]
    difficulty2: u8,

    /// Fixed search depth for both players, overriding difficulty
    #[arg(long)]
    depth: Option<u8>,

    /// Number of games
    #[arg(short, long, default_value_t = 6)]
    games: u16,

    /// Ply limit per game, random opening excluded
    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Base seed for colours and random openings
    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Print the aggregated statistics as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = MatchSeriesConfig {
        games: args.games,
        base_seed: args.seed,
        per_game: MatchConfig {
            max_plies: args.max_plies,
            params: SearchParams { depth: args.depth },
            ..MatchConfig::default()
        },
    };

    let stats = play_engine_match_series(
        || build_engine(args.player1, args.difficulty1),
        || build_engine(args.player2, args.difficulty2),
        &config,
    )?;

    println!("player1={} player2={}", args.player1, args.player2);
    println!("{}", stats.report());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }
    Ok(())
}
