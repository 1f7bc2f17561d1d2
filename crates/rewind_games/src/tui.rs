//! Terminal setup and the interactive event loop.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::config::Theme;
use crate::controller::GameController;
use crate::input;
use crate::ui::{self, ScreenLayout};

/// Raw mode, alternate screen and mouse capture, undone on drop.
///
/// Dropping runs on every exit from [`run_tui`]: normal return, `?`
/// early returns and panics unwinding through the loop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        debug!("Terminal entered raw mode");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        match restore_terminal(&mut io::stdout()) {
            Ok(()) => debug!("Terminal restored"),
            Err(err) => error!(error = %err, "Failed to restore terminal"),
        }
    }
}

/// Leaves raw mode, the alternate screen and mouse capture, and shows the
/// cursor. Every step is attempted even if raw mode cannot be left.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)?;
    raw
}

/// Runs the interactive game until the player quits.
///
/// The terminal is restored on every exit, including errors and panics.
#[instrument(skip_all)]
pub fn run_tui(theme: Theme) -> Result<()> {
    info!("Starting Rewind TUI");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut controller = GameController::new();
    let res = run_game(&mut terminal, &mut controller, &theme);

    drop(terminal);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Draw, wait for one event, apply it; repeat until quit.
#[instrument(skip_all)]
pub fn run_game<B: Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut GameController,
    theme: &Theme,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let mut layout = ScreenLayout::default();
        terminal.draw(|f| layout = ui::draw(f, controller, theme))?;

        if *controller.should_quit() {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            if let Some(action) = input::translate(&event, controller, &layout) {
                controller.apply(action);
            }
        }
    }
}
