//! Head-to-head engine match harness for local testing.
//!
//! Games are driven through the public `GameController` select/propose API,
//! so every engine move passes the same legality pipeline a human move does.
//! A seeded random opening prefix keeps a series from replaying one game.

use std::time::Instant;

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::chess_errors::ChessError;
use crate::engines::engine_trait::{Engine, SearchParams};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Outcome};
use crate::game_state::game_controller::GameController;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    Decided(Outcome),
    MaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesGame {
    pub player1_color: Color,
    pub winner: Option<PlayerId>,
    pub outcome: MatchOutcome,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub params: SearchParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
            params: SearchParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub opening_plies: usize,
    pub moves: Vec<Move>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn winner(&self) -> Option<Color> {
        match self.outcome {
            MatchOutcome::Decided(Outcome::Checkmate { winner }) => Some(winner),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 6,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesGame>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    fn avg_ms(total_ns: u128, moves: u32) -> f64 {
        if moves == 0 {
            0.0
        } else {
            total_ns as f64 / f64::from(moves) / 1_000_000.0
        }
    }

    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            Self::avg_ms(self.player1_total_time_ns, self.player1_moves),
            Self::avg_ms(self.player2_total_time_ns, self.player2_moves),
        )
    }
}

/// Plays one game, `white` against `black`, after a random opening prefix
/// drawn from `seed`.
pub fn play_engine_match(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, ChessError> {
    white.new_game();
    black.new_game();

    let mut game = GameController::new();
    let opening_plies = play_random_opening(&mut game, seed, config);

    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    for _ in 0..config.max_plies {
        if game.is_game_over() {
            break;
        }
        let side = game.turn();
        let started = Instant::now();
        let out = match side {
            Color::White => white.choose_move(game.board(), side, &config.params)?,
            Color::Black => black.choose_move(game.board(), side, &config.params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();
        match side {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let Some(mv) = out.best_move else {
            return Err(ChessError::EngineFailure(format!(
                "{side:?} engine returned no move in a live position"
            )));
        };
        if !(game.select(mv.from) && game.propose_move(mv.to)) {
            return Err(ChessError::EngineFailure(format!(
                "{side:?} engine returned illegal move {mv}"
            )));
        }
    }

    let outcome = game
        .result()
        .map_or(MatchOutcome::MaxPlies, MatchOutcome::Decided);
    debug!(
        ?outcome,
        plies = game.move_history().len(),
        "match finished\n{}",
        render_board(game.board())
    );

    Ok(MatchResult {
        outcome,
        final_board: game.board().clone(),
        opening_plies,
        moves: game.move_history().to_vec(),
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

fn play_random_opening(game: &mut GameController, seed: u64, config: &MatchConfig) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    let low = config.opening_min_plies.min(config.opening_max_plies);
    let plies = rng.random_range(low..=config.opening_max_plies);
    let mut played = 0;
    for _ in 0..plies {
        if game.is_game_over() {
            break;
        }
        let moves = legal_moves(game.board(), game.turn());
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        if game.select(mv.from) && game.propose_move(mv.to) {
            played += 1;
        }
    }
    played
}

/// Plays a series and aggregates results per player. Colours are assigned
/// per game from `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, ChessError>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        info!(
            game = i + 1,
            seed,
            white = if player1_is_white { player1.name() } else { player2.name() },
            black = if player1_is_white { player2.name() } else { player1.name() },
            "starting game"
        );

        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let player1_color = if player1_is_white {
            Color::White
        } else {
            Color::Black
        };
        let winner = result.winner().map(|color| {
            if color == player1_color {
                PlayerId::Player1
            } else {
                PlayerId::Player2
            }
        });
        match winner {
            Some(PlayerId::Player1) => stats.player1_wins += 1,
            Some(PlayerId::Player2) => stats.player2_wins += 1,
            None => stats.draws += 1,
        }
        stats.outcomes.push(SeriesGame {
            player1_color,
            winner,
            outcome: result.outcome,
        });
        info!(game = i + 1, outcome = ?result.outcome, "game finished");
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_greedy::GreedyEngine;
    use crate::engines::engine_negamax::NegamaxEngine;
    use crate::move_generation::legal_move_checks::is_king_in_check;

    #[test]
    fn greedy_match_produces_a_consistent_record() {
        let mut white = GreedyEngine::with_seed(1, 3);
        let mut black = GreedyEngine::with_seed(2, 4);
        let config = MatchConfig {
            max_plies: 40,
            ..MatchConfig::default()
        };
        let result = play_engine_match(&mut white, &mut black, 9, &config).expect("match runs");

        assert_eq!(
            result.moves.len(),
            result.opening_plies + (result.white_move_count + result.black_move_count) as usize
        );
        for (ply, mv) in result.moves.iter().enumerate() {
            let expected = if ply % 2 == 0 { Color::White } else { Color::Black };
            assert_eq!(mv.mover(), expected);
        }
        if result.outcome == MatchOutcome::MaxPlies {
            assert_eq!(result.white_move_count + result.black_move_count, 40);
        }
        for color in [Color::White, Color::Black] {
            assert!(result.final_board.find_king(color).is_some());
        }
        let last_mover = result.moves.last().map(Move::mover);
        if let Some(mover) = last_mover {
            assert!(!is_king_in_check(&result.final_board, mover));
        }
    }

    #[test]
    fn series_accounts_for_every_game() {
        let config = MatchSeriesConfig {
            games: 2,
            base_seed: 77,
            per_game: MatchConfig {
                max_plies: 12,
                params: SearchParams { depth: Some(1) },
                ..MatchConfig::default()
            },
        };
        let stats = play_engine_match_series(
            || Box::new(GreedyEngine::with_seed(3, 1)) as Box<dyn Engine>,
            || Box::new(NegamaxEngine::new(1)) as Box<dyn Engine>,
            &config,
        )
        .expect("series runs");
        assert_eq!(stats.games, 2);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 2);
        assert_eq!(stats.outcomes.len(), 2);
        assert!(stats.report().starts_with("games=2 "));
    }
}
