//! Terminal setup, teardown, and main loop.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use crate::app::TuiApp;
use crate::views;

/// Minimum wall-clock time between redraws.
pub const RENDER_INTERVAL: Duration = Duration::from_millis(30);

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    tracing::info!(seed = app.sim.seed(), "tui started");
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    tracing::info!(ticks = app.sim.ticks(), "tui stopped");
    result
}

/// One key per iteration, then a tick, then a throttled redraw.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<(), String> {
    let mut last_render: Option<Instant> = None;
    loop {
        if event::poll(Duration::ZERO).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            if let Event::Key(key) = event
                && key.kind == KeyEventKind::Press
            {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }

        app.on_tick();

        if last_render.is_none_or(|at| at.elapsed() >= RENDER_INTERVAL) {
            terminal
                .draw(|frame| views::draw(frame, app))
                .map_err(|e| format!("draw error: {e}"))?;
            last_render = Some(Instant::now());
        }

        let delay = app.frame_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}
