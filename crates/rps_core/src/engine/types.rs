//! Core value types for the match engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A move a player can throw in a round.
///
/// `Unsubmitted` is a sentinel meaning "no choice made this round". It is not
/// a playable move, but it participates in round evaluation: a concrete move
/// beats no move at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Unsubmitted,
}

impl Move {
    /// Whether this is a concrete move rather than the sentinel.
    pub fn is_submitted(self) -> bool {
        self != Move::Unsubmitted
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Move::Rock => "ROCK",
            Move::Paper => "PAPER",
            Move::Scissors => "SCISSORS",
            Move::Unsubmitted => "UNSUBMITTED",
        };
        write!(f, "{}", name)
    }
}

/// Identifies one of the two seats at the table.
///
/// `None` is the "no winner yet" sentinel used for round and match winner
/// bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerIdentity {
    PlayerOne,
    PlayerTwo,
    None,
}

impl PlayerIdentity {
    /// Index into the engine's player array, or `Option::None` for the sentinel.
    pub fn index(self) -> Option<usize> {
        match self {
            PlayerIdentity::PlayerOne => Some(0),
            PlayerIdentity::PlayerTwo => Some(1),
            PlayerIdentity::None => None,
        }
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PlayerIdentity::PlayerOne => "Player 1",
            PlayerIdentity::PlayerTwo => "Player 2",
            PlayerIdentity::None => "no one",
        };
        write!(f, "{}", name)
    }
}

/// Per-seat state: accumulated score and the move held for the current round.
///
/// `Copy` on purpose: accessors hand out a snapshot of this record, never a
/// handle into engine-internal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub score: u32,
    pub current_move: Move,
}

impl Player {
    pub fn new() -> Self {
        Self { score: 0, current_move: Move::Unsubmitted }
    }

    /// Reset for a fresh match.
    pub fn reset(&mut self) {
        self.score = 0;
        self.current_move = Move::Unsubmitted;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsubmitted_is_not_a_submitted_move() {
        assert!(!Move::Unsubmitted.is_submitted());
        assert!(Move::Rock.is_submitted());
        assert!(Move::Paper.is_submitted());
        assert!(Move::Scissors.is_submitted());
    }

    #[test]
    fn test_identity_indices() {
        assert_eq!(PlayerIdentity::PlayerOne.index(), Some(0));
        assert_eq!(PlayerIdentity::PlayerTwo.index(), Some(1));
        assert_eq!(PlayerIdentity::None.index(), None);
    }

    #[test]
    fn test_player_reset() {
        let mut player = Player { score: 3, current_move: Move::Paper };
        player.reset();
        assert_eq!(player, Player::new());
    }

    #[test]
    fn test_move_serde_names() {
        assert_eq!(serde_json::to_string(&Move::Rock).unwrap(), "\"rock\"");
        assert_eq!(
            serde_json::to_string(&PlayerIdentity::PlayerTwo).unwrap(),
            "\"player_two\""
        );
    }
}
