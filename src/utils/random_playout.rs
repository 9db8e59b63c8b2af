//! Seeded random playouts for smoke testing and throughput runs.
//!
//! Plays uniformly random legal moves through `GameState::attempt_move` until
//! the game ends or a ply cap is reached. Every chosen move comes from the
//! same enumeration the host uses, so a rejection here signals an engine bug.

use std::time::Instant;

use log::debug;
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::game_state::chess_types::{Color, GameStatus};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutReport {
    pub final_state: GameState,
    pub plies: u16,
}

impl PlayoutReport {
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.final_state.status
    }
}

/// Play one random game from `start`.
pub fn random_playout(start: &GameState, config: PlayoutConfig) -> Result<PlayoutReport, String> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut game = start.clone();
    let mut plies = 0u16;

    while !game.is_over() && plies < config.max_plies {
        let moves = legal_moves(&game.board, game.current_player);
        let Some(&(from, to)) = moves.choose(&mut rng) else {
            return Err(format!(
                "{} has no moves but status is {}",
                game.current_player, game.status
            ));
        };

        game = game
            .attempt_move(from, to)
            .map_err(|e| format!("generated move {from}->{to} was rejected: {e}"))?;
        plies += 1;
    }

    debug!("playout seed={} ended after {plies} plies: {}", config.seed, game.status);

    Ok(PlayoutReport {
        final_state: game,
        plies,
    })
}

#[derive(Debug, Clone, Default)]
pub struct PlayoutSeriesStats {
    pub games: u16,
    pub white_wins: u16,
    pub black_wins: u16,
    pub stalemates: u16,
    pub unfinished: u16,
    pub king_captures: u16,
    pub checkmates: u16,
    pub total_plies: u64,
    pub elapsed_ms: u128,
}

impl PlayoutSeriesStats {
    fn record(&mut self, report: &PlayoutReport) {
        self.games += 1;
        self.total_plies += u64::from(report.plies);
        match report.status() {
            GameStatus::KingCaptured { winner } => {
                self.king_captures += 1;
                self.count_win(winner);
            }
            GameStatus::Checkmate { winner } => {
                self.checkmates += 1;
                self.count_win(winner);
            }
            GameStatus::Stalemate => self.stalemates += 1,
            GameStatus::Playing | GameStatus::Check => self.unfinished += 1,
        }
    }

    fn count_win(&mut self, winner: Color) {
        match winner {
            Color::White => self.white_wins += 1,
            Color::Black => self.black_wins += 1,
        }
    }

    pub fn report(&self) -> String {
        let avg_plies = if self.games == 0 {
            0.0
        } else {
            self.total_plies as f64 / f64::from(self.games)
        };
        format!(
            "games={} white_wins={} black_wins={} stalemates={} unfinished={} king_captures={} checkmates={} avg_plies={:.1} elapsed_ms={}",
            self.games,
            self.white_wins,
            self.black_wins,
            self.stalemates,
            self.unfinished,
            self.king_captures,
            self.checkmates,
            avg_plies,
            self.elapsed_ms
        )
    }
}

/// Play `games` random games from the starting position, seeds `base_seed..`.
pub fn run_playout_series(
    games: u16,
    base_seed: u64,
    max_plies: u16,
) -> Result<PlayoutSeriesStats, String> {
    let started = Instant::now();
    let start = GameState::new_game();
    let mut stats = PlayoutSeriesStats::default();

    for game_idx in 0..games {
        let config = PlayoutConfig {
            max_plies,
            seed: base_seed.wrapping_add(u64::from(game_idx)),
        };
        let report = random_playout(&start, config)?;
        stats.record(&report);
    }

    stats.elapsed_ms = started.elapsed().as_millis();
    Ok(stats)
}
