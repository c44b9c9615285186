// Profile widget: per-metric gauges for the selected player, scaled
// against the current view's observed ranges (the terminal stand-in for
// the report's radar chart).

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::metrics::normalize::{column_range, ColumnRange};
use crate::metrics::Metric;
use crate::tui::ViewState;

use super::fmt_metric;

/// Render the profile panel into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default().borders(Borders::ALL).title(title(state));

    let Some(player) = &state.view.selected else {
        let placeholder = Paragraph::new("No player selected.").block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2); 4])
        .split(inner);

    for (metric, row) in Metric::INPUTS.into_iter().zip(rows.iter()) {
        let value = metric.get(player);
        let range = column_range(&state.view.rows, metric);
        let gauge = Gauge::default()
            .label(format!("{} {}", metric.column(), fmt_metric(value)))
            .ratio(axis_fraction(value, range))
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black));
        frame.render_widget(gauge, *row);
    }
}

fn title(state: &ViewState) -> String {
    match &state.view.selected {
        Some(p) => format!("Profile — {} ({})", p.name, p.team),
        None => "Profile".to_string(),
    }
}

/// Position of `value` within the column's observed range, in [0, 1].
/// Absent values sit at zero; a zero-spread axis centers at 0.5.
pub fn axis_fraction(value: Option<f64>, range: Option<ColumnRange>) -> f64 {
    let (Some(value), Some(range)) = (value, range) else {
        return 0.0;
    };
    let spread = range.max - range.min;
    if spread <= f64::EPSILON {
        0.5
    } else {
        ((value - range.min) / spread).clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
