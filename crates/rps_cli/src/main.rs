//! Rock Paper Scissors demo driver
//!
//! Runs the match engine behind a real-time tick loop: wall-clock deltas are
//! sampled with `Instant` and fed into `MatchEngine::tick`, while both seats
//! get random throws at random offsets inside each input window. Events are
//! printed as they stream out of the engine.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::Rng;
use std::time::{Duration, Instant};

use rps_core::engine::timing::REFERENCE_TICK_MS;
use rps_core::{MatchEngine, MatchEvent, MatchState, Move, PlayerIdentity};

#[derive(Parser)]
#[command(name = "rps_cli")]
#[command(about = "Drive a rock-paper-scissors match from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full match between two random players
    Demo {
        /// Number of rounds (must be odd)
        #[arg(long, default_value_t = 5)]
        rounds: u32,

        /// Seconds allowed to enter a move each round
        #[arg(long, default_value_t = 3.0)]
        input_secs: f32,

        /// Seconds results stay on screen between rounds
        #[arg(long, default_value_t = 3.0)]
        reveal_secs: f32,

        /// Run on a simulated clock instead of real time
        #[arg(long, default_value_t = false)]
        fast: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { rounds, input_secs, reveal_secs, fast } => {
            run_demo(rounds, input_secs, reveal_secs, fast)
        }
    }
}

/// A throw planned for `at_secs` into the current input window.
struct PlannedThrow {
    at_secs: f32,
    seat: PlayerIdentity,
    throw: Move,
}

fn run_demo(rounds: u32, input_secs: f32, reveal_secs: f32, fast: bool) -> Result<()> {
    let mut engine = MatchEngine::new();
    engine.set_number_of_rounds(rounds)?;
    engine.set_input_time_limit(input_secs);
    engine.set_reveal_time_limit(reveal_secs);

    println!(
        "Best of {}: first to {} round wins takes the match",
        rounds,
        engine.config().rounds_to_win()
    );
    engine.start_match();

    let mut rng = rand::thread_rng();
    let mut pending = plan_round(&mut rng, input_secs);
    let mut prev_state = MatchState::AwaitingInput;
    let mut cursor = 0usize;
    let mut last = Instant::now();
    let max_ticks = 1_000_000;

    for _ in 0..max_ticks {
        let delta = if fast {
            REFERENCE_TICK_MS as f32 / 1000.0
        } else {
            std::thread::sleep(Duration::from_millis(REFERENCE_TICK_MS));
            let sampled = last.elapsed().as_secs_f32();
            last = Instant::now();
            sampled
        };

        engine.tick(delta);

        if engine.state() == MatchState::AwaitingInput {
            if prev_state != MatchState::AwaitingInput {
                pending = plan_round(&mut rng, input_secs);
            }
            let in_window = input_secs - engine.time_left_in_current_state();
            pending.retain(|planned| {
                if in_window >= planned.at_secs {
                    engine.submit_move(planned.seat, planned.throw);
                    false
                } else {
                    true
                }
            });
        }
        prev_state = engine.state();

        let new_events = engine.events_since(cursor).to_vec();
        cursor += new_events.len();
        let mut won = false;
        for event in &new_events {
            println!("{}", event);
            if matches!(event, MatchEvent::MatchWon { .. }) {
                won = true;
            }
        }
        if won {
            println!(
                "Final score  Player 1: {}  Player 2: {}",
                engine.score(PlayerIdentity::PlayerOne),
                engine.score(PlayerIdentity::PlayerTwo),
            );
            return Ok(());
        }
    }

    anyhow::bail!("match did not finish within {} ticks", max_ticks)
}

/// Plan this round's throws. Usually both seats act inside the window; now
/// and then one seat sleeps through it so timer forfeits show up too.
fn plan_round(rng: &mut impl Rng, input_secs: f32) -> Vec<PlannedThrow> {
    let window = (input_secs * 0.8).max(0.05);
    let mut throws = vec![
        PlannedThrow {
            at_secs: rng.gen_range(0.0..window),
            seat: PlayerIdentity::PlayerOne,
            throw: random_move(rng),
        },
        PlannedThrow {
            at_secs: rng.gen_range(0.0..window),
            seat: PlayerIdentity::PlayerTwo,
            throw: random_move(rng),
        },
    ];
    if rng.gen_bool(0.1) {
        throws.pop();
    }
    throws
}

fn random_move(rng: &mut impl Rng) -> Move {
    match rng.gen_range(0..3) {
        0 => Move::Rock,
        1 => Move::Paper,
        _ => Move::Scissors,
    }
}
