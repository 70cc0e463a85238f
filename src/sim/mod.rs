//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only
//! - No rendering or terminal dependencies

pub mod collision;
pub mod food;
pub mod state;
pub mod tick;

pub use collision::{check_game_over, hits_self, hits_wall};
pub use food::spawn_food;
pub use state::{Cell, Direction, GameState, RunState, SimError, Snapshot, Velocity};
pub use tick::{StepOutcome, TickInput, step, tick};
