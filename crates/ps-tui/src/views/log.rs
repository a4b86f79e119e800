//! Recent rate summaries, newest at the bottom.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::TuiApp;

/// Draw the log panel.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let theme = app.theme();
    let log = &app.sim.state().log;

    let block = Block::default()
        .title(" Log (5s rate summary) ")
        .borders(Borders::ALL)
        .border_style(theme.border());

    let inner = block.inner(area);
    let lines: Vec<Line> = newest_fitting(log.iter(), inner.width, inner.height)
        .into_iter()
        .map(|line| Line::styled(line.to_string(), theme.label()))
        .collect();

    let panel = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}

/// The newest entries whose wrapped rows fit in `height`, oldest first.
fn newest_fitting<'a>(
    entries: impl DoubleEndedIterator<Item = &'a str>,
    width: u16,
    height: u16,
) -> Vec<&'a str> {
    let width = usize::from(width.max(1));
    let mut rows = 0;
    let mut kept: Vec<&str> = entries
        .rev()
        .take_while(|entry| {
            rows += entry.chars().count().div_ceil(width).max(1);
            rows <= usize::from(height)
        })
        .collect();
    kept.reverse();
    kept
}
