//! Frame layout: header, left status column, right ecosystem column, footer.

pub mod ecosystem;
pub mod log;
pub mod species;
pub mod stats;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::TuiApp;

/// Narrowest left column.
const LEFT_MIN: u16 = 40;
/// Widest left column.
const LEFT_MAX: u16 = 56;

const HEADER: &str = " PopSim  q quit  space pause  r reset  ? help";
const FOOTER: &str =
    " tab/\u{2191}\u{2193} select  enter +10  \u{2190}\u{2192} growth  [ ] death  n noise  c color  -/+ speed";

/// Width of the left column for a frame `total` cells wide.
pub fn left_width(total: u16) -> u16 {
    (total.saturating_mul(2) / 5).clamp(LEFT_MIN, LEFT_MAX).min(total)
}

/// Draw the whole frame.
pub fn draw(frame: &mut Frame, app: &TuiApp) {
    let theme = app.theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    frame.render_widget(Paragraph::new(HEADER).style(theme.header()), rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(left_width(rows[1].width)),
            Constraint::Min(0),
        ])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(stats::HEIGHT),
            Constraint::Length(species::HEIGHT),
            Constraint::Min(3),
        ])
        .split(columns[0]);

    stats::draw(frame, app, left[0]);
    species::draw(frame, app, left[1]);
    log::draw(frame, app, left[2]);
    ecosystem::draw(frame, app, columns[1]);

    frame.render_widget(Paragraph::new(FOOTER).style(theme.header()), rows[2]);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_simulation::Simulation;
    use ratatui::backend::TestBackend;

    fn render(app: &TuiApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn left_column_is_clamped() {
        assert_eq!(left_width(80), 40);
        assert_eq!(left_width(120), 48);
        assert_eq!(left_width(200), 56);
        assert_eq!(left_width(30), 30);
    }

    #[test]
    fn renders_every_panel() {
        let app = TuiApp::new(Simulation::default());
        let screen = render(&app, 120, 40);
        for needle in [
            "PopSim",
            "Stats",
            "RUNNING",
            "Species",
            "Grass",
            "Eagles",
            "Log (5s rate summary)",
            "Ecosystem Mix",
            "Biomass",
        ] {
            assert!(screen.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn shows_pause_and_summaries() {
        let mut app = TuiApp::new(Simulation::default());
        for _ in 0..50 {
            app.on_tick();
        }
        app.handle_key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char(' '),
            crossterm::event::KeyModifiers::NONE,
        ));
        let screen = render(&app, 120, 40);
        assert!(screen.contains("PAUSED"));
        assert!(screen.contains("highest growth rate"));
    }

    #[test]
    fn species_rows_show_per_capita_rates() {
        let mut app = TuiApp::new(Simulation::default());
        app.on_tick();
        let screen = render(&app, 140, 40);
        let grass_row = screen
            .lines()
            .find(|line| line.contains("195.9"))
            .unwrap();
        // Grass after one tick: growth 4.1 and death 1.003 over 195.897 in 0.1 s.
        assert!(grass_row.contains("0.209"), "{grass_row}");
        assert!(grass_row.contains("0.051"), "{grass_row}");
        assert!(!grass_row.contains("0.50"), "{grass_row}");
        assert!(screen.contains("Grass  g 0.50  d 0.05"));
    }

    #[test]
    fn help_popup_overlays() {
        let mut app = TuiApp::new(Simulation::default());
        app.show_help = true;
        let screen = render(&app, 100, 40);
        assert!(screen.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = TuiApp::new(Simulation::default());
        render(&app, 10, 4);
    }
}
