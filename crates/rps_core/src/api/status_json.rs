//! JSON status snapshot for embedding UIs.
//!
//! A menu or rendering layer that lives across an FFI or process boundary can
//! poll this instead of binding every query method individually.

use serde::{Deserialize, Serialize};

use crate::engine::match_state::MatchState;
use crate::engine::session::MatchEngine;
use crate::engine::types::{Move, PlayerIdentity};
use crate::SCHEMA_VERSION;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub score: u32,
    pub current_move: Move,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchStatusResponse {
    pub schema_version: u8,
    pub state: MatchState,
    pub player_one: PlayerStatus,
    pub player_two: PlayerStatus,
    /// Seconds left on the active timer; the no-timer sentinel in the menu.
    pub time_left_secs: f32,
    pub winner_of_last_round: PlayerIdentity,
    pub winner_of_last_match: PlayerIdentity,
    pub number_of_rounds: u32,
    pub rounds_to_win: u32,
}

/// Snapshot the engine's queryable state.
pub fn match_status(engine: &MatchEngine) -> MatchStatusResponse {
    let player_one = engine.player(PlayerIdentity::PlayerOne);
    let player_two = engine.player(PlayerIdentity::PlayerTwo);
    MatchStatusResponse {
        schema_version: SCHEMA_VERSION,
        state: engine.state(),
        player_one: PlayerStatus { score: player_one.score, current_move: player_one.current_move },
        player_two: PlayerStatus { score: player_two.score, current_move: player_two.current_move },
        time_left_secs: engine.time_left_in_current_state(),
        winner_of_last_round: engine.winner_of_last_round(),
        winner_of_last_match: engine.winner_of_last_match(),
        number_of_rounds: engine.config().number_of_rounds,
        rounds_to_win: engine.config().rounds_to_win(),
    }
}

/// Serialize the status snapshot to a JSON string.
pub fn match_status_json(engine: &MatchEngine) -> serde_json::Result<String> {
    serde_json::to_string(&match_status(engine))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_snapshot_in_menu() {
        let engine = MatchEngine::new();
        let status = match_status(&engine);
        assert_eq!(status.schema_version, 1);
        assert_eq!(status.state, MatchState::Menu);
        assert_eq!(status.number_of_rounds, 5);
        assert_eq!(status.rounds_to_win, 3);
        assert_eq!(status.player_one.current_move, Move::Unsubmitted);
    }

    #[test]
    fn test_status_json_round_trip() {
        let mut engine = MatchEngine::new();
        engine.start_match();
        engine.submit_move(PlayerIdentity::PlayerOne, Move::Rock);

        let json = match_status_json(&engine).unwrap();
        let parsed: MatchStatusResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, match_status(&engine));
        assert_eq!(parsed.state, MatchState::AwaitingInput);
        assert_eq!(parsed.player_one.current_move, Move::Rock);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["state"], "awaiting_input");
        assert_eq!(value["schema_version"], 1);
    }
}
