//! Timer constants for the match engine.
//!
//! The engine never reads a wall clock. The external driver samples real time
//! and feeds elapsed seconds into `MatchEngine::tick`; everything here is
//! expressed against that accumulated counter.

/// Seconds a round waits for move input before force-evaluating.
pub const DEFAULT_INPUT_TIME_LIMIT_SECS: f32 = 3.0;

/// Seconds the round result stays on display before the next round begins.
pub const DEFAULT_REVEAL_TIME_LIMIT_SECS: f32 = 3.0;

/// Sentinel returned by `time_left_in_current_state` when no timer is
/// running (i.e. in the menu state).
pub const NO_ACTIVE_TIMER_SECS: f32 = 9999.0;

/// Reference driver cadence (~33 Hz). The engine accepts any non-negative
/// delta; this is only a suggestion for drivers that sleep between ticks.
pub const REFERENCE_TICK_MS: u64 = 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_dwarfs_real_timers() {
        assert!(NO_ACTIVE_TIMER_SECS > DEFAULT_INPUT_TIME_LIMIT_SECS * 100.0);
        assert!(NO_ACTIVE_TIMER_SECS > DEFAULT_REVEAL_TIME_LIMIT_SECS * 100.0);
    }

    #[test]
    fn test_reference_cadence_resolves_default_timers() {
        // 3s window at 30ms per tick = 100 ticks
        let ticks = (DEFAULT_INPUT_TIME_LIMIT_SECS * 1000.0) as u64 / REFERENCE_TICK_MS;
        assert_eq!(ticks, 100);
    }
}
