//! Species table with last-tick per-capita rates and flows.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use ps_core::TrophicLevel;

use crate::app::TuiApp;

/// Rows taken by the table: header, five species and borders.
pub const HEIGHT: u16 = TrophicLevel::COUNT as u16 + 3;

/// Draw the species table.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let theme = app.theme();
    let state = app.sim.state();
    let selected = state.selected_level();

    let header = Row::new(["Sel", "Name", "Pop", "gRate", "dRate", "Last+", "Last-"])
        .style(theme.label().bold());

    let rows = state.species.iter().map(|species| {
        let is_selected = species.level == selected;
        let style = if is_selected {
            theme.selected(species.level)
        } else {
            theme.level(species.level)
        };
        Row::new([
            Cell::from(if is_selected { ">" } else { "" }),
            Cell::from(species.name.clone()),
            Cell::from(format!("{:.1}", species.population)),
            Cell::from(format!("{:.3}", species.diagnostics.per_capita_growth_rate)),
            Cell::from(format!("{:.3}", species.diagnostics.per_capita_death_rate)),
            Cell::from(format!("{:.2}", species.diagnostics.gross_growth)),
            Cell::from(format!("{:.2}", species.diagnostics.gross_death)),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(3),
        Constraint::Length(12),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Species ")
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );
    frame.render_widget(table, area);
}
