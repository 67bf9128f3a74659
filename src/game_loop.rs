use std::time::Instant;

use crate::game::{GameState, TickOutcome};
use crate::input::Direction;

/// Driver phase; only `Running` ticks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LoopPhase {
    NotStarted,
    Running,
    GameOver,
}

/// Thin timer driver around [`GameState`].
///
/// The driver never owns a timer of its own: callers pump it with the current
/// instant and it fires `advance()` once the state's tick interval has
/// elapsed. Because the interval is re-read on every pump, a speed-ramp
/// change takes effect on the very next tick with no separate reschedule
/// path.
#[derive(Debug)]
pub struct GameLoop {
    state: GameState,
    phase: LoopPhase,
    last_tick: Instant,
}

impl GameLoop {
    /// Wraps a state in a not-yet-started driver.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            phase: LoopPhase::NotStarted,
            last_tick: Instant::now(),
        }
    }

    /// Returns the current driver phase.
    #[must_use]
    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Returns the wrapped state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Begins ticking from `now`. Only valid from `NotStarted`; calling it in
    /// any other phase is a no-op.
    pub fn start(&mut self, now: Instant) {
        if self.phase == LoopPhase::NotStarted {
            self.phase = LoopPhase::Running;
            self.last_tick = now;
        }
    }

    /// Resets the state and re-enters `Running` from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.state.reset();
        self.phase = LoopPhase::Running;
        self.last_tick = now;
    }

    /// Forwards a steering request while running.
    pub fn steer(&mut self, direction: Direction) {
        if self.phase == LoopPhase::Running {
            self.state.set_direction(direction);
        }
    }

    /// Fires one tick when due, returning its outcome.
    ///
    /// Returns `None` while not running or before the current tick interval
    /// has elapsed since the previous tick. A `Died` outcome stops the loop;
    /// subsequent pumps return `None` until [`GameLoop::restart`].
    pub fn pump(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.phase != LoopPhase::Running {
            return None;
        }
        if now.duration_since(self.last_tick) < self.state.tick_interval() {
            return None;
        }

        let outcome = self.state.advance();
        self.last_tick = now;

        if outcome == TickOutcome::Died {
            self.phase = LoopPhase::GameOver;
        }

        Some(outcome)
    }

    /// Returns the score at the moment of death (or so far, while running).
    #[must_use]
    pub fn final_score(&self) -> u32 {
        self.state.score
    }
}
