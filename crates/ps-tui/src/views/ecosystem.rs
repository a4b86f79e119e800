//! Ecosystem mix grid and biomass trend.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Sparkline};

use crate::app::TuiApp;
use crate::mix::mix_row;

/// Rows given to the biomass sparkline, borders included.
const TREND_HEIGHT: u16 = 8;

/// Draw the mix panel above the biomass trend.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(TREND_HEIGHT)])
        .split(area);

    draw_mix(frame, app, chunks[0]);
    draw_trend(frame, app, chunks[1]);
}

/// Every row repeats the population-proportional symbol strip.
fn draw_mix(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let theme = app.theme();
    let block = Block::default()
        .title(" Ecosystem Mix ")
        .borders(Borders::ALL)
        .border_style(theme.border());
    let inner = block.inner(area);

    let spans: Vec<Span> = mix_row(app.sim.state(), inner.width as usize)
        .into_iter()
        .map(|level| Span::styled(level.symbol().to_string(), theme.level(level)))
        .collect();
    let row = Line::from(spans);
    let lines = vec![row; inner.height as usize];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_trend(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let theme = app.theme();
    let block = Block::default()
        .title(" Biomass ")
        .borders(Borders::ALL)
        .border_style(theme.border());
    let width = block.inner(area).width as usize;
    let data = app.history.tail_for_sparkline(width);

    let sparkline = Sparkline::default()
        .block(block)
        .data(&data)
        .style(theme.header());
    frame.render_widget(sparkline, area);
}
