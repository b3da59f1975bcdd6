use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Snapshot of an unscramble round as seen by the presentation layer.
/// The target word is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameRoundState {
    pub scrambled_word: String,
    pub word_count: u32, // 1-based round number
    pub score: u32,
    pub is_guess_wrong: bool,
    pub is_game_over: bool,
}

impl GameRoundState {
    /// State at the start of a fresh game.
    pub fn first_round(scrambled_word: String) -> Self {
        Self {
            scrambled_word,
            word_count: 1,
            score: 0,
            is_guess_wrong: false,
            is_game_over: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GamePhase {
    Playing,
    GameOver,
}

impl From<&GameRoundState> for GamePhase {
    fn from(state: &GameRoundState) -> Self {
        if state.is_game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }
}
