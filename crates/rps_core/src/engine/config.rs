//! Per-match configuration.
//!
//! Configuration is a field of each engine instance, never process-wide
//! state, so multiple matches can run side by side and tests stay isolated.

use serde::{Deserialize, Serialize};

use crate::engine::timing::{DEFAULT_INPUT_TIME_LIMIT_SECS, DEFAULT_REVEAL_TIME_LIMIT_SECS};
use crate::error::ConfigError;

/// Default best-of-five.
pub const DEFAULT_NUMBER_OF_ROUNDS: u32 = 5;

const _: () = assert!(DEFAULT_NUMBER_OF_ROUNDS % 2 == 1);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Total rounds in a match. Always odd; even values are rejected.
    pub number_of_rounds: u32,
    /// Seconds players have to enter a move each round.
    pub input_time_limit: f32,
    /// Seconds the round result is displayed before the next round.
    pub reveal_time_limit: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            number_of_rounds: DEFAULT_NUMBER_OF_ROUNDS,
            input_time_limit: DEFAULT_INPUT_TIME_LIMIT_SECS,
            reveal_time_limit: DEFAULT_REVEAL_TIME_LIMIT_SECS,
        }
    }
}

impl MatchConfig {
    /// Change the round count. Even values leave the config untouched.
    pub fn set_number_of_rounds(&mut self, rounds: u32) -> Result<(), ConfigError> {
        if rounds % 2 == 0 {
            return Err(ConfigError::EvenRoundCount { rounds });
        }
        self.number_of_rounds = rounds;
        Ok(())
    }

    /// Rounds needed to take the match: half the round count, rounded up.
    pub fn rounds_to_win(&self) -> u32 {
        self.number_of_rounds / 2 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.number_of_rounds, 5);
        assert_eq!(config.input_time_limit, 3.0);
        assert_eq!(config.reveal_time_limit, 3.0);
        assert_eq!(config.rounds_to_win(), 3);
    }

    #[test]
    fn test_rounds_to_win_examples() {
        let mut config = MatchConfig::default();
        for (rounds, needed) in [(1, 1), (3, 2), (5, 3), (7, 4), (99, 50)] {
            config.set_number_of_rounds(rounds).unwrap();
            assert_eq!(config.rounds_to_win(), needed, "rounds={}", rounds);
        }
    }

    #[test]
    fn test_even_round_count_rejected() {
        let mut config = MatchConfig::default();
        let err = config.set_number_of_rounds(4).unwrap_err();
        assert_eq!(err, ConfigError::EvenRoundCount { rounds: 4 });
        assert_eq!(config.number_of_rounds, 5);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let mut config = MatchConfig::default();
        assert!(config.set_number_of_rounds(0).is_err());
        assert_eq!(config.number_of_rounds, 5);
    }

    proptest! {
        #[test]
        fn prop_rounds_to_win_is_majority(k in 0u32..10_000) {
            let rounds = 2 * k + 1;
            let mut config = MatchConfig::default();
            config.set_number_of_rounds(rounds).unwrap();
            prop_assert_eq!(config.rounds_to_win(), rounds / 2 + 1);
            // Winning threshold is a strict majority of the rounds.
            prop_assert!(2 * config.rounds_to_win() > rounds);
        }

        #[test]
        fn prop_even_rounds_keep_previous_value(k in 0u32..10_000) {
            let rounds = 2 * k;
            let mut config = MatchConfig::default();
            let before = config.number_of_rounds;
            prop_assert!(config.set_number_of_rounds(rounds).is_err());
            prop_assert_eq!(config.number_of_rounds, before);
        }
    }
}
