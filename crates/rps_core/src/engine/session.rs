//! Tick-driven match session.
//!
//! `MatchEngine` is advanced exclusively by an external driver calling
//! `tick(delta_secs)` on a cadence of its choosing; menu and input layers
//! call the mutation and query operations between ticks. Every operation is
//! synchronous and returns immediately, so a single thread (or externally
//! serialized callers) is all the discipline required.

use log::{debug, warn};

use crate::engine::config::MatchConfig;
use crate::engine::events::MatchEvent;
use crate::engine::match_state::MatchState;
use crate::engine::rules::{self, RoundOutcome};
use crate::engine::timing::NO_ACTIVE_TIMER_SECS;
use crate::engine::types::{Move, Player, PlayerIdentity};
use crate::error::Result;

/// The rock-paper-scissors match state machine.
///
/// Owns both player records, the match configuration, the accumulated clock
/// and the event log. Starts in [`MatchState::Menu`].
#[derive(Debug, Clone)]
pub struct MatchEngine {
    players: [Player; 2],
    state: MatchState,
    config: MatchConfig,
    /// Seconds accumulated across all ticks since the engine was created.
    elapsed: f32,
    /// Value of `elapsed` when the current state was entered.
    state_began_at: f32,
    winner_of_last_round: PlayerIdentity,
    winner_of_last_match: PlayerIdentity,
    /// Append-only event log for the lifetime of the engine.
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    pub fn new() -> Self {
        Self::with_config(MatchConfig::default())
    }

    pub fn with_config(config: MatchConfig) -> Self {
        Self {
            players: [Player::new(), Player::new()],
            state: MatchState::Menu,
            config,
            elapsed: 0.0,
            state_began_at: 0.0,
            winner_of_last_round: PlayerIdentity::None,
            winner_of_last_match: PlayerIdentity::None,
            events: Vec::new(),
        }
    }

    // =========================================================================
    // Driver loop
    // =========================================================================

    /// Advance the engine by `delta_secs` of elapsed real time.
    ///
    /// Returns the events emitted during this tick. Negative deltas are
    /// clamped to zero so the internal clock stays monotonic.
    pub fn tick(&mut self, delta_secs: f32) -> Vec<MatchEvent> {
        let cursor = self.events.len();

        let delta = if delta_secs < 0.0 {
            warn!("tick called with negative delta {}; clamping to zero", delta_secs);
            0.0
        } else {
            delta_secs
        };
        self.elapsed += delta;

        match self.state {
            // Nothing advances in menus; only start_match leaves this state.
            MatchState::Menu => {}
            MatchState::AwaitingInput => {
                if self.time_in_state() >= self.config.input_time_limit {
                    self.evaluate_round();
                }
            }
            MatchState::RevealingResults => {
                if self.time_in_state() >= self.config.reveal_time_limit {
                    self.enter_awaiting_input();
                }
            }
        }

        self.events[cursor..].to_vec()
    }

    // =========================================================================
    // Input actions
    // =========================================================================

    /// Begin a match from the menu. Both scores and moves are reset and the
    /// first round starts accepting input. Ignored outside the menu.
    pub fn start_match(&mut self) {
        if self.state != MatchState::Menu {
            debug!("start_match ignored; a match is already in progress");
            return;
        }
        for player in &mut self.players {
            player.reset();
        }
        self.events.push(MatchEvent::MatchStarted);
        self.enter_awaiting_input();
    }

    /// Record a player's throw for the current round.
    ///
    /// Only the first concrete submission per round sticks; later calls in
    /// the same round are ignored. Once both seats hold a concrete move the
    /// round evaluates immediately, ahead of the input timer. Calls outside
    /// the input phase are no-ops.
    pub fn submit_move(&mut self, identity: PlayerIdentity, chosen: Move) {
        if self.state != MatchState::AwaitingInput {
            debug!("move submission ignored outside the input phase (state: {:?})", self.state);
            return;
        }
        let Some(idx) = identity.index() else {
            warn!("{} cannot submit a move; pass player 1 or player 2", identity);
            return;
        };

        if self.players[idx].current_move == Move::Unsubmitted {
            self.players[idx].current_move = chosen;
        }

        if self.players[0].current_move.is_submitted() && self.players[1].current_move.is_submitted()
        {
            self.evaluate_round();
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Change the round count for subsequent scoring. Even values are
    /// rejected with a warning and the previous value is kept.
    pub fn set_number_of_rounds(&mut self, rounds: u32) -> Result<()> {
        self.config.set_number_of_rounds(rounds).map_err(|err| {
            warn!("{}", err);
            err
        })
    }

    /// Adjust how long players get to enter a move each round.
    pub fn set_input_time_limit(&mut self, secs: f32) {
        self.config.input_time_limit = secs;
    }

    /// Adjust how long round results stay on display.
    pub fn set_reveal_time_limit(&mut self, secs: f32) {
        self.config.reveal_time_limit = secs;
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Snapshot of a player's record, by value.
    ///
    /// The `None` identity does not name a player; it warns and falls back to
    /// player one rather than failing hard.
    pub fn player(&self, identity: PlayerIdentity) -> Player {
        match identity.index() {
            Some(idx) => self.players[idx],
            None => {
                warn!("{} does not name a player; returning player 1 as a default", identity);
                self.players[0]
            }
        }
    }

    /// Player record by raw seat number (1 or 2). Anything else warns and
    /// falls back to player one.
    pub fn player_by_number(&self, number: u8) -> Player {
        match number {
            1 => self.players[0],
            2 => self.players[1],
            other => {
                warn!(
                    "{} does not correspond to a player number, use 1 or 2; \
                     returning player 1 as a default",
                    other
                );
                self.players[0]
            }
        }
    }

    pub fn score(&self, identity: PlayerIdentity) -> u32 {
        self.player(identity).score
    }

    pub fn current_move(&self, identity: PlayerIdentity) -> Move {
        self.player(identity).current_move
    }

    /// Winner of the last scored round, `None` until a round has a winner.
    pub fn winner_of_last_round(&self) -> PlayerIdentity {
        self.winner_of_last_round
    }

    /// Winner of the last completed match, `None` until a match finishes.
    pub fn winner_of_last_match(&self) -> PlayerIdentity {
        self.winner_of_last_match
    }

    /// Seconds until the active timer expires, counting down from the
    /// configured limit. In the menu there is no timer and the large
    /// [`NO_ACTIVE_TIMER_SECS`] sentinel is returned instead.
    pub fn time_left_in_current_state(&self) -> f32 {
        match self.state {
            MatchState::Menu => NO_ACTIVE_TIMER_SECS,
            MatchState::AwaitingInput => self.config.input_time_limit - self.time_in_state(),
            MatchState::RevealingResults => self.config.reveal_time_limit - self.time_in_state(),
        }
    }

    /// Total seconds fed into the engine so far.
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed
    }

    /// Full event log since engine creation.
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Events appended after `cursor`, for incremental polling. Advance the
    /// cursor by the length of the returned slice.
    pub fn events_since(&self, cursor: usize) -> &[MatchEvent] {
        &self.events[cursor.min(self.events.len())..]
    }

    // =========================================================================
    // State transitions
    // =========================================================================

    fn time_in_state(&self) -> f32 {
        self.elapsed - self.state_began_at
    }

    /// Score the current round and move to the next state: reveal the result,
    /// or end the match if a player just reached the winning score.
    fn evaluate_round(&mut self) {
        let outcome = rules::evaluate(self.players[0].current_move, self.players[1].current_move);
        match outcome {
            RoundOutcome::PlayerOneWins => {
                self.players[0].score += 1;
                self.winner_of_last_round = PlayerIdentity::PlayerOne;
            }
            RoundOutcome::PlayerTwoWins => {
                self.players[1].score += 1;
                self.winner_of_last_round = PlayerIdentity::PlayerTwo;
            }
            RoundOutcome::Tie => {}
        }

        let rounds_to_win = self.config.rounds_to_win();
        if self.players[0].score >= rounds_to_win {
            self.declare_winner(PlayerIdentity::PlayerOne);
        } else if self.players[1].score >= rounds_to_win {
            self.declare_winner(PlayerIdentity::PlayerTwo);
        } else {
            self.enter_revealing_results(outcome.winner());
        }
    }

    fn enter_awaiting_input(&mut self) {
        debug!("entering input phase at t={:.3}", self.elapsed);
        self.state = MatchState::AwaitingInput;
        self.players[0].current_move = Move::Unsubmitted;
        self.players[1].current_move = Move::Unsubmitted;
        self.state_began_at = self.elapsed;
    }

    fn enter_revealing_results(&mut self, round_winner: PlayerIdentity) {
        self.events.push(MatchEvent::RoundRevealed {
            player_one: self.players[0].current_move,
            player_two: self.players[1].current_move,
            winner: round_winner,
        });
        self.state = MatchState::RevealingResults;
        self.state_began_at = self.elapsed;
    }

    /// End the match and return to the menu, skipping the reveal phase.
    fn declare_winner(&mut self, winner: PlayerIdentity) {
        debug!("match won by {} at t={:.3}", winner, self.elapsed);
        self.events.push(MatchEvent::MatchWon { winner });
        self.winner_of_last_match = winner;
        self.state = MatchState::Menu;
        self.state_began_at = self.elapsed;
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}
