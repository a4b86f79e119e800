//! Host-side application state wrapping the simulation.

use std::time::Duration;

use crossterm::event::KeyEvent;
use ps_simulation::{Command, Simulation};

use crate::history::BiomassHistory;
use crate::input::{Action, map_key};
use crate::theme::Theme;

/// Sleep used while paused with a zero step delay, so the loop does not spin.
const PAUSED_IDLE: Duration = Duration::from_millis(10);

/// Main application state for the TUI.
#[derive(Debug)]
pub struct TuiApp {
    /// The running simulation.
    pub sim: Simulation,
    /// Total biomass after every tick.
    pub history: BiomassHistory,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl TuiApp {
    /// Wrap a freshly created simulation.
    pub fn new(sim: Simulation) -> Self {
        let mut history = BiomassHistory::new();
        history.push(sim.state().total_biomass());
        Self {
            sim,
            history,
            show_help: false,
            should_quit: false,
        }
    }

    /// Handle a key press between ticks.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match map_key(key) {
            Some(Action::Quit) => self.should_quit = true,
            Some(Action::ToggleHelp) => self.show_help = !self.show_help,
            Some(Action::Engine(command)) => self.apply(command),
            None => {}
        }
    }

    /// Forward a command to the simulation.
    pub fn apply(&mut self, command: Command) {
        self.sim.apply(command);
        if command == Command::Reset {
            self.history.clear();
            self.history.push(self.sim.state().total_biomass());
        }
    }

    /// Run one tick unless paused, recording biomass when a tick runs.
    pub fn on_tick(&mut self) -> bool {
        let stepped = self.sim.update();
        if stepped {
            self.history.push(self.sim.state().total_biomass());
        }
        stepped
    }

    /// Wall-clock pause between loop iterations.
    pub fn frame_delay(&self) -> Duration {
        let delay = Duration::from_secs_f64(self.sim.host().step_delay.max(0.0));
        if self.sim.state().paused {
            delay.max(PAUSED_IDLE)
        } else {
            delay
        }
    }

    /// Palette for the current color preference.
    pub fn theme(&self) -> Theme {
        Theme::new(self.sim.host().use_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_drive_simulation() {
        let mut app = TuiApp::new(Simulation::default());
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert!((app.sim.state().species[1].population - 70.0).abs() < 1e-12);

        app.handle_key(key(KeyCode::Char(' ')));
        assert!(app.sim.state().paused);
        assert!(!app.on_tick());

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn ticks_feed_history() {
        let mut app = TuiApp::new(Simulation::default());
        for _ in 0..10 {
            assert!(app.on_tick());
        }
        assert_eq!(app.history.len(), 11);
    }

    #[test]
    fn reset_restarts_history() {
        let mut app = TuiApp::new(Simulation::default());
        for _ in 0..10 {
            app.on_tick();
        }
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.history.len(), 1);
        assert!((app.history.samples()[0] - 303.0).abs() < 1e-9);
    }

    #[test]
    fn frame_delay_follows_step_delay() {
        let mut app = TuiApp::new(Simulation::default());
        assert_eq!(app.frame_delay(), Duration::from_millis(50));
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Char('+')));
        }
        assert_eq!(app.frame_delay(), Duration::ZERO);
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.frame_delay(), PAUSED_IDLE);
    }

    #[test]
    fn help_toggles() {
        let mut app = TuiApp::new(Simulation::default());
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.show_help);
    }
}
