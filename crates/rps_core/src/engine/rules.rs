//! Round evaluation rules.

use crate::engine::types::{Move, PlayerIdentity};

/// Outcome of comparing both players' moves for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    PlayerOneWins,
    PlayerTwoWins,
    /// Identical concrete moves, or neither player submitted. Scores nothing.
    Tie,
}

impl RoundOutcome {
    /// The round winner as an identity, `None` for a tie.
    pub fn winner(self) -> PlayerIdentity {
        match self {
            RoundOutcome::PlayerOneWins => PlayerIdentity::PlayerOne,
            RoundOutcome::PlayerTwoWins => PlayerIdentity::PlayerTwo,
            RoundOutcome::Tie => PlayerIdentity::None,
        }
    }
}

/// Whether `attacker` beats `defender` under the dominance rule
/// (rock > scissors, scissors > paper, paper > rock).
pub fn beats(attacker: Move, defender: Move) -> bool {
    matches!(
        (attacker, defender),
        (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
    )
}

/// Evaluate one round of simultaneous moves.
///
/// A concrete move beats `Unsubmitted`. Two identical moves, or a double
/// forfeit, is a tie.
pub fn evaluate(player_one: Move, player_two: Move) -> RoundOutcome {
    match (player_one.is_submitted(), player_two.is_submitted()) {
        (false, false) => RoundOutcome::Tie,
        (true, false) => RoundOutcome::PlayerOneWins,
        (false, true) => RoundOutcome::PlayerTwoWins,
        (true, true) => {
            if player_one == player_two {
                RoundOutcome::Tie
            } else if beats(player_one, player_two) {
                RoundOutcome::PlayerOneWins
            } else {
                RoundOutcome::PlayerTwoWins
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominance_cycle() {
        assert!(beats(Move::Rock, Move::Scissors));
        assert!(beats(Move::Scissors, Move::Paper));
        assert!(beats(Move::Paper, Move::Rock));

        assert!(!beats(Move::Scissors, Move::Rock));
        assert!(!beats(Move::Paper, Move::Scissors));
        assert!(!beats(Move::Rock, Move::Paper));
    }

    #[test]
    fn test_identical_moves_tie() {
        for mv in [Move::Rock, Move::Paper, Move::Scissors] {
            assert_eq!(evaluate(mv, mv), RoundOutcome::Tie);
        }
    }

    #[test]
    fn test_concrete_move_beats_unsubmitted() {
        for mv in [Move::Rock, Move::Paper, Move::Scissors] {
            assert_eq!(evaluate(mv, Move::Unsubmitted), RoundOutcome::PlayerOneWins);
            assert_eq!(evaluate(Move::Unsubmitted, mv), RoundOutcome::PlayerTwoWins);
        }
    }

    #[test]
    fn test_double_forfeit_is_tie() {
        assert_eq!(evaluate(Move::Unsubmitted, Move::Unsubmitted), RoundOutcome::Tie);
    }

    #[test]
    fn test_dominance_decides_mixed_rounds() {
        assert_eq!(evaluate(Move::Rock, Move::Scissors), RoundOutcome::PlayerOneWins);
        assert_eq!(evaluate(Move::Rock, Move::Paper), RoundOutcome::PlayerTwoWins);
        assert_eq!(evaluate(Move::Paper, Move::Rock), RoundOutcome::PlayerOneWins);
        assert_eq!(evaluate(Move::Paper, Move::Scissors), RoundOutcome::PlayerTwoWins);
        assert_eq!(evaluate(Move::Scissors, Move::Paper), RoundOutcome::PlayerOneWins);
        assert_eq!(evaluate(Move::Scissors, Move::Rock), RoundOutcome::PlayerTwoWins);
    }

    #[test]
    fn test_winner_mapping() {
        assert_eq!(RoundOutcome::PlayerOneWins.winner(), PlayerIdentity::PlayerOne);
        assert_eq!(RoundOutcome::PlayerTwoWins.winner(), PlayerIdentity::PlayerTwo);
        assert_eq!(RoundOutcome::Tie.winner(), PlayerIdentity::None);
    }
}
