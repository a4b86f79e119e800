//! Stats panel: clock, totals, the selected species' editable rates and
//! current settings.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::TuiApp;

/// Rows taken by the panel, borders included.
pub const HEIGHT: u16 = 10;

/// Draw the stats panel.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let theme = app.theme();
    let state = app.sim.state();
    let params = app.sim.params();
    let host = app.sim.host();
    let selected = state.selected();

    let status = if state.paused { "PAUSED" } else { "RUNNING" };
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), theme.label()),
            Span::raw(value),
        ])
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<14}", "Time"), theme.label()),
            Span::raw(format!("{:.1}s  ", state.simulated_time)),
            Span::styled(status, Style::default().bold()),
        ]),
        row("Biomass", format!("{:.1}", state.total_biomass())),
        row(
            "Sunlight",
            format!("{:.1} / {:.0}", state.sunlight, params.sunlight_cap),
        ),
        row("Animals", format!("{:.1}", state.animal_biomass())),
        row(
            "Selected",
            format!(
                "{}  g {:.2}  d {:.2}",
                selected.name, selected.growth_rate, selected.death_rate
            ),
        ),
        row("dt", format!("{:.3}s", params.dt)),
        row("Step delay", format!("{:.2}s", host.step_delay)),
        row(
            "Noise",
            if params.noise_enabled { "on" } else { "off" }.to_string(),
        ),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );
    frame.render_widget(panel, area);
}
