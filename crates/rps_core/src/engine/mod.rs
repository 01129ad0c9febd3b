//! Match engine: state machine, rules, timing and events.

pub mod config;
pub mod events;
pub mod match_state;
pub mod rules;
pub mod session;
pub mod timing;
pub mod types;

pub use config::MatchConfig;
pub use events::MatchEvent;
pub use match_state::MatchState;
pub use session::MatchEngine;
pub use types::{Move, Player, PlayerIdentity};
