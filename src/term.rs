//! Terminal render sink
//!
//! Paints snapshots with crossterm, one frame per tick. Owns raw mode and
//! the alternate screen; `restore` must run before the process exits, even
//! on the error path.

use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{Event, KeyEvent, poll, read};
use crossterm::style::{Print, PrintStyledContent, StyledContent, Stylize};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

use crate::config::GridConfig;
use crate::sim::{Cell, RunState, Snapshot};

// Each grid cell is two terminal columns wide so the board reads square
const CELL_COLUMNS: u16 = 2;
const BLOCK: &str = "██";

pub struct Board {
    cols: u16,
    rows: u16,
    unit: i32,
    stdout: Stdout,
}

impl Board {
    pub fn new(grid: &GridConfig) -> Self {
        Self {
            cols: grid.cells_across() as u16,
            rows: grid.cells_down() as u16,
            unit: grid.unit,
            stdout: stdout(),
        }
    }

    pub fn setup(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(self.stdout, EnterAlternateScreen, Hide)
    }

    pub fn restore(&mut self) -> io::Result<()> {
        execute!(self.stdout, Show, LeaveAlternateScreen)?;
        disable_raw_mode()
    }

    /// Collect every key event queued since the last call, without blocking
    pub fn drain_keys(&self) -> io::Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::ZERO)? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    /// Repaint the whole frame: border, food, snake, score, banner
    pub fn draw(&mut self, frame: Snapshot<'_>) -> io::Result<()> {
        let horizontal = "-".repeat((self.cols * CELL_COLUMNS) as usize);
        let interior = " ".repeat((self.cols * CELL_COLUMNS) as usize);

        queue!(self.stdout, MoveTo(0, 0), Print(format!("+{horizontal}+")))?;
        for row in 0..self.rows {
            queue!(
                self.stdout,
                MoveTo(0, row + 1),
                Print(format!("|{interior}|"))
            )?;
        }
        queue!(
            self.stdout,
            MoveTo(0, self.rows + 1),
            Print(format!("+{horizontal}+"))
        )?;

        self.paint_cell(frame.food, BLOCK.red())?;
        for &cell in frame.snake {
            self.paint_cell(cell, BLOCK.green())?;
        }

        queue!(
            self.stdout,
            MoveTo(0, self.rows + 2),
            Clear(ClearType::CurrentLine),
            Print(format!("Score: {}", frame.score))
        )?;

        if frame.state == RunState::GameOver {
            self.banner(&[
                "GAME OVER!",
                "",
                "Space to restart",
                "Esc to quit",
            ])?;
        }

        self.stdout.flush()
    }

    /// Paint one grid cell; cells outside the board (a dead head) are skipped
    fn paint_cell(&mut self, cell: Cell, glyph: StyledContent<&'static str>) -> io::Result<()> {
        let cx = cell.x / self.unit;
        let cy = cell.y / self.unit;
        if cx < 0 || cy < 0 || cx >= self.cols as i32 || cy >= self.rows as i32 {
            return Ok(());
        }

        queue!(
            self.stdout,
            MoveTo(1 + cx as u16 * CELL_COLUMNS, 1 + cy as u16),
            PrintStyledContent(glyph)
        )
    }

    fn banner(&mut self, lines: &[&str]) -> io::Result<()> {
        let width = (self.cols * CELL_COLUMNS + 2) as usize;
        let top = (self.rows / 2).saturating_sub(lines.len() as u16 / 2);

        for (i, line) in lines.iter().enumerate() {
            let x = (width.saturating_sub(line.len()) / 2) as u16;
            queue!(
                self.stdout,
                MoveTo(x, top + i as u16),
                Print(line)
            )?;
        }

        Ok(())
    }
}
