//! Match events.
//!
//! The engine surfaces round and match results as structured events appended
//! to its log at the state-transition points. The `Display` impls render
//! plain console lines for sinks that just want to print.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::types::{Move, PlayerIdentity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    /// A match left the menu and the first round is accepting input.
    MatchStarted,
    /// A round finished without deciding the match; both throws are shown.
    RoundRevealed {
        player_one: Move,
        player_two: Move,
        /// Round winner, `None` for a tie round.
        winner: PlayerIdentity,
    },
    /// A player reached the winning score and the match is over.
    MatchWon { winner: PlayerIdentity },
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchEvent::MatchStarted => write!(f, "A new match begins!"),
            MatchEvent::RoundRevealed { player_one, player_two, .. } => {
                write!(f, "Player 1 throws: {}     Player 2 throws: {}", player_one, player_two)
            }
            MatchEvent::MatchWon { winner } => write!(f, "{} is the victor!", winner),
        }
    }
}
