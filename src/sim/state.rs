//! Game state and core simulation types

use std::error::Error;
use std::fmt;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GridConfig;
use crate::consts::START_SEGMENTS;
use crate::sim::food::spawn_food;

/// One grid-aligned board cell, addressed in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one velocity step away
    pub fn offset(self, v: Velocity) -> Self {
        Self {
            x: self.x + v.dx,
            y: self.y + v.dy,
        }
    }
}

/// Fixed per-tick displacement
///
/// Exactly one component is nonzero and its magnitude equals the unit size;
/// building velocities through [`Direction::velocity`] keeps that true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    /// True when `other` points exactly backwards
    pub fn opposes(self, other: Velocity) -> bool {
        (self.dx != 0 || self.dy != 0) && other.dx == -self.dx && other.dy == -self.dy
    }
}

/// Discrete steering input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Velocity for this direction on a grid with the given unit size
    pub fn velocity(self, unit: i32) -> Velocity {
        match self {
            Direction::Up => Velocity { dx: 0, dy: -unit },
            Direction::Down => Velocity { dx: 0, dy: unit },
            Direction::Left => Velocity { dx: -unit, dy: 0 },
            Direction::Right => Velocity { dx: unit, dy: 0 },
        }
    }
}

/// Coarse game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    GameOver,
}

/// Rejected state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// `step` called while no run is active
    NotRunning,
    /// `reset` called while a run is active
    AlreadyRunning,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NotRunning => write!(f, "cannot step: game is over"),
            SimError::AlreadyRunning => write!(f, "cannot reset: run still active"),
        }
    }
}

impl Error for SimError {}

/// Per-tick view handed to the render sink
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub snake: &'a [Cell],
    pub food: Cell,
    pub score: u64,
    pub state: RunState,
}

/// Complete game state
///
/// The single owner of every mutable gameplay value. Reset replaces the body
/// wholesale; nothing outside the sim mutates it.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Validated board geometry, copied at construction
    pub grid: GridConfig,
    /// Run seed, kept for logging and replay
    pub seed: u64,
    /// Body cells, head first; never empty
    pub snake: Vec<Cell>,
    /// Committed per-tick displacement
    pub velocity: Velocity,
    pub food: Cell,
    pub score: u64,
    pub run_state: RunState,
    /// Ticks stepped since the last (re)start
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Start a run: canonical body, rightward velocity, food on the board
    pub fn new(grid: GridConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let food = spawn_food(&grid, &mut rng);

        Self {
            grid,
            seed,
            snake: starting_snake(grid.unit),
            velocity: Direction::Right.velocity(grid.unit),
            food,
            score: 0,
            run_state: RunState::Running,
            time_ticks: 0,
            rng,
        }
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    /// Commit a direction change, rejecting an exact reversal
    ///
    /// Safe to call any number of times between ticks; the last accepted
    /// value is what the next step uses.
    pub fn steer(&mut self, dir: Direction) {
        let candidate = dir.velocity(self.grid.unit);
        if !self.velocity.opposes(candidate) {
            self.velocity = candidate;
        }
    }

    /// Reinitialize all mutable state and resume running
    ///
    /// Only legal while the game is over. The RNG stream continues rather
    /// than reseeding, so a full session stays reproducible from one seed.
    pub fn reset(&mut self) -> Result<(), SimError> {
        if self.run_state == RunState::Running {
            return Err(SimError::AlreadyRunning);
        }

        self.snake = starting_snake(self.grid.unit);
        self.velocity = Direction::Right.velocity(self.grid.unit);
        self.food = spawn_food(&self.grid, &mut self.rng);
        self.score = 0;
        self.time_ticks = 0;
        self.run_state = RunState::Running;
        log::info!("run restarted");
        Ok(())
    }

    /// Borrow the values the render sink needs for one frame
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.snake,
            food: self.food,
            score: self.score,
            state: self.run_state,
        }
    }
}

/// Canonical starting body: head at `(4 * unit, 0)`, tail descending to `(0, 0)`
fn starting_snake(unit: i32) -> Vec<Cell> {
    (0..START_SEGMENTS)
        .rev()
        .map(|i| Cell::new(i * unit, 0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> GameState {
        GameState::new(GridConfig::default(), 12345)
    }

    #[test]
    fn test_new_state_canonical_layout() {
        let state = new_state();
        assert_eq!(
            state.snake,
            vec![
                Cell::new(100, 0),
                Cell::new(75, 0),
                Cell::new(50, 0),
                Cell::new(25, 0),
                Cell::new(0, 0),
            ]
        );
        assert_eq!(state.velocity, Velocity { dx: 25, dy: 0 });
        assert_eq!(state.score, 0);
        assert_eq!(state.run_state, RunState::Running);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_initial_food_on_board() {
        let state = new_state();
        assert_eq!(state.food.x % 25, 0);
        assert_eq!(state.food.y % 25, 0);
        assert!(state.food.x >= 0 && state.food.x < 500);
        assert!(state.food.y >= 0 && state.food.y < 500);
    }

    #[test]
    fn test_steer_rejects_reversal() {
        let mut state = new_state();
        state.steer(Direction::Left);
        assert_eq!(state.velocity, Velocity { dx: 25, dy: 0 });

        state.steer(Direction::Up);
        assert_eq!(state.velocity, Velocity { dx: 0, dy: -25 });
        state.steer(Direction::Down);
        assert_eq!(state.velocity, Velocity { dx: 0, dy: -25 });
    }

    #[test]
    fn test_steer_last_accepted_wins() {
        let mut state = new_state();
        state.steer(Direction::Up);
        state.steer(Direction::Right);
        state.steer(Direction::Down);
        assert_eq!(state.velocity, Velocity { dx: 0, dy: 25 });
    }

    #[test]
    fn test_reset_rejected_while_running() {
        let mut state = new_state();
        assert_eq!(state.reset(), Err(SimError::AlreadyRunning));
    }

    #[test]
    fn test_reset_restores_start_conditions() {
        let mut state = new_state();
        state.run_state = RunState::GameOver;
        state.score = 9;
        state.velocity = Direction::Up.velocity(25);
        state.snake = vec![Cell::new(250, 250)];

        state.reset().unwrap();

        assert_eq!(state.run_state, RunState::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.velocity, Velocity { dx: 25, dy: 0 });
        assert_eq!(state.snake.len(), 5);
        assert_eq!(state.head(), Cell::new(100, 0));
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_velocity_opposes() {
        let right = Velocity { dx: 25, dy: 0 };
        let left = Velocity { dx: -25, dy: 0 };
        let up = Velocity { dx: 0, dy: -25 };
        assert!(right.opposes(left));
        assert!(left.opposes(right));
        assert!(!right.opposes(up));
        assert!(!right.opposes(right));
    }
}
