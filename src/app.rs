//! Input adapter and the timed game loop
//!
//! Single thread, fixed-delay scheduling: sleep one tick period, drain the
//! key queue into a `TickInput`, advance the sim, repaint. The next tick is
//! only ever scheduled after the current one finishes, so the sim never sees
//! concurrent mutation.

use std::io;
use std::thread::sleep;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::GridConfig;
use crate::sim::{Direction, GameState, TickInput, tick};
use crate::term::Board;

pub struct App {
    state: GameState,
    board: Board,
    tick_period: Duration,
}

impl App {
    pub fn new(grid: GridConfig, seed: u64) -> Self {
        Self {
            state: GameState::new(grid, seed),
            board: Board::new(&grid),
            tick_period: Duration::from_millis(grid.tick_ms),
        }
    }

    /// Run until the player quits; the terminal is restored on the way out
    pub fn run(&mut self) -> io::Result<()> {
        self.board.setup()?;
        let played = self.play();
        let restored = self.board.restore();
        played.and(restored)
    }

    fn play(&mut self) -> io::Result<()> {
        self.board.draw(self.state.snapshot())?;

        loop {
            sleep(self.tick_period);

            let mut input = TickInput::default();
            for ev in self.board.drain_keys()? {
                if is_quit(&ev) {
                    return Ok(());
                }
                apply_key(&ev, &mut input);
            }

            tick(&mut self.state, &input);
            self.board.draw(self.state.snapshot())?;
        }
    }
}

/// Fold one key event into this tick's input; later keys overwrite earlier
/// ones, so the last direction pressed before a tick is the one that counts
fn apply_key(ev: &KeyEvent, input: &mut TickInput) {
    if ev.kind == KeyEventKind::Release {
        return;
    }

    match ev.code {
        KeyCode::Up | KeyCode::Char('w') => input.steer = Some(Direction::Up),
        KeyCode::Left | KeyCode::Char('a') => input.steer = Some(Direction::Left),
        KeyCode::Down | KeyCode::Char('s') => input.steer = Some(Direction::Down),
        KeyCode::Right | KeyCode::Char('d') => input.steer = Some(Direction::Right),
        KeyCode::Char(' ') => input.restart = true,
        _ => {}
    }
}

fn is_quit(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Esc
        || (ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL))
}
