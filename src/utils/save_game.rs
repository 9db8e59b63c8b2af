//! JSON save/restore of a full game.
//!
//! A snapshot stores the complete `GameState` (board, side to move, status,
//! captured lists and history) plus the time it was taken. The selection is
//! UI state and is dropped on save.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub saved_at: DateTime<Utc>,
    pub state: GameState,
}

impl GameSnapshot {
    pub fn capture(game_state: &GameState) -> Self {
        let mut state = game_state.clone();
        state.selection = None;
        Self {
            saved_at: Utc::now(),
            state,
        }
    }
}

pub fn snapshot_to_json(game_state: &GameState) -> Result<String, String> {
    serde_json::to_string_pretty(&GameSnapshot::capture(game_state))
        .map_err(|e| format!("Failed to serialize game: {e}"))
}

pub fn snapshot_from_json(json: &str) -> Result<GameSnapshot, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse saved game: {e}"))
}

pub fn save_game(game_state: &GameState, path: &Path) -> Result<(), String> {
    let json = snapshot_to_json(game_state)?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

pub fn load_game(path: &Path) -> Result<GameSnapshot, String> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    snapshot_from_json(&json)
}
