//! # rps_core - Tick-Driven Rock-Paper-Scissors Match Engine
//!
//! Game-state machine for a local two-player rock-paper-scissors match with
//! a timed input phase and a timed results-reveal phase.
//!
//! The engine owns no loop and reads no clock: an external driver calls
//! [`MatchEngine::tick`] with elapsed seconds at whatever cadence it likes,
//! and a menu/input layer calls [`MatchEngine::start_match`],
//! [`MatchEngine::submit_move`] and the query operations in between. Round
//! and match results stream out as [`MatchEvent`]s.
//!
//! ```
//! use rps_core::{MatchEngine, MatchState, Move, PlayerIdentity};
//!
//! let mut engine = MatchEngine::new();
//! engine.start_match();
//! engine.submit_move(PlayerIdentity::PlayerOne, Move::Rock);
//! engine.submit_move(PlayerIdentity::PlayerTwo, Move::Scissors);
//!
//! // Both moves in: the round resolved ahead of the input timer.
//! assert_eq!(engine.state(), MatchState::RevealingResults);
//! assert_eq!(engine.score(PlayerIdentity::PlayerOne), 1);
//! ```

pub mod api;
pub mod engine;
pub mod error;

pub use api::{match_status, match_status_json, MatchStatusResponse, PlayerStatus};
pub use engine::{MatchConfig, MatchEngine, MatchEvent, MatchState, Move, Player, PlayerIdentity};
pub use error::{ConfigError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
