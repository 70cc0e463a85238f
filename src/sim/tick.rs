//! Fixed-tick orchestration
//!
//! `tick` advances the game by one frame: steering input first, then one
//! simulation step, then the terminal-state check. The adapter calls it once
//! per tick period and never in parallel, so a tick always sees and leaves a
//! consistent state.

use crate::sim::collision::check_game_over;
use crate::sim::food::spawn_food;
use crate::sim::state::{Direction, GameState, RunState, SimError};

/// Input gathered by the adapter for a single tick
///
/// At most one direction change per tick reaches the sim; when several keys
/// arrive between ticks the adapter keeps the last one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Direction key seen since the previous tick
    pub steer: Option<Direction>,
    /// Restart request; only honored while the game is over
    pub restart: bool,
}

/// What a single step did to the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Head advanced, tail dropped; length unchanged
    Advanced,
    /// Head landed on food: tail kept, score incremented, food respawned
    Ate,
}

/// Advance the snake by one step
///
/// The new head may land outside the board; the collision check that runs
/// right after the step is what turns that into a terminal state.
pub fn step(state: &mut GameState) -> Result<StepOutcome, SimError> {
    if state.run_state != RunState::Running {
        return Err(SimError::NotRunning);
    }

    let new_head = state.head().offset(state.velocity);
    state.snake.insert(0, new_head);
    state.time_ticks += 1;

    if new_head == state.food {
        state.score += 1;
        state.food = spawn_food(&state.grid, &mut state.rng);
        Ok(StepOutcome::Ate)
    } else {
        state.snake.pop();
        Ok(StepOutcome::Advanced)
    }
}

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart {
        // reset itself rejects the call while a run is active
        match state.reset() {
            // the new run's first step lands on the next tick
            Ok(()) => return,
            Err(err) => log::debug!("restart ignored: {err}"),
        }
    }

    if let Some(dir) = input.steer {
        state.steer(dir);
    }

    if state.run_state != RunState::Running {
        return;
    }

    // The guard above makes step infallible here
    if step(state).is_ok() && check_game_over(&state.snake, &state.grid) {
        state.run_state = RunState::GameOver;
        log::info!(
            "game over at tick {}, final score {}",
            state.time_ticks,
            state.score
        );
    }
}
