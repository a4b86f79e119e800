//! Shared layout helpers and the help popup.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the key reference popup.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Simulation:"),
        Line::from("  Space       Pause / resume"),
        Line::from("  r           Reset populations, sunlight and time"),
        Line::from("  n           Toggle consumption noise"),
        Line::from("  - / +       Slower / faster"),
        Line::from(""),
        Line::from("Selected species:"),
        Line::from("  Tab / \u{2193}     Select next"),
        Line::from("  \u{2191}           Select previous"),
        Line::from("  Enter       Add 10 individuals"),
        Line::from("  \u{2190} / \u{2192}       Growth rate -/+ 0.01"),
        Line::from("  [ / ]       Death rate -/+ 0.01"),
        Line::from(""),
        Line::from("  c           Toggle color"),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
