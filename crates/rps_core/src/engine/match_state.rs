//! Match state machine states.

use serde::{Deserialize, Serialize};

/// Current state of a match. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    /// Waiting in menus. Ticks do nothing here; only `start_match` moves on.
    Menu,
    /// Counting down while both players may enter a move for the round.
    AwaitingInput,
    /// Showing the round result before the next round begins.
    RevealingResults,
}
