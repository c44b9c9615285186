// Rankings widget: Top N and Bottom N tables over the current view,
// with proportional score bars standing in for the report's bar charts.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::metrics::rank::RankedPlayer;
use crate::tui::ViewState;

/// Width of the score bar column in characters.
const BAR_WIDTH: usize = 12;

/// Render the rankings panel (Top N left, Bottom N right).
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let n = state.filter.top_n;
    render_side(
        frame,
        halves[0],
        &format!("Top {n}"),
        &state.view.top,
        &state.view.ranked,
        Color::Blue,
        // Top table ranks from 1.
        |i| i + 1,
        state,
    );
    let total = state.view.ranked.len();
    render_side(
        frame,
        halves[1],
        &format!("Bottom {n}"),
        &state.view.bottom,
        &state.view.ranked,
        Color::Red,
        // The bottom table lists worst-first, so row i holds the player
        // ranked `total - i` in the full view ranking.
        move |i| total - i,
        state,
    );
}

#[allow(clippy::too_many_arguments)]
fn render_side(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[RankedPlayer],
    ranked: &[RankedPlayer],
    bar_color: Color,
    rank_of: impl Fn(usize) -> usize,
    state: &ViewState,
) {
    let range = score_range(ranked);

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Name"),
        Cell::from("Team"),
        Cell::from("OCI"),
        Cell::from(""),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let selected = state
                .view
                .selected
                .as_ref()
                .is_some_and(|p| p.name == r.name);
            let style = if selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(format!("{}", rank_of(i))),
                Cell::from(r.name.clone()),
                Cell::from(r.team.clone()),
                Cell::from(format!("{:.3}", r.oci)),
                Cell::from(score_bar(r.oci, range, BAR_WIDTH))
                    .style(Style::default().fg(bar_color)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(10),
        Constraint::Min(8),
        Constraint::Length(7),
        Constraint::Length(BAR_WIDTH as u16),
    ];

    let table = Table::new(table_rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string()),
    );
    frame.render_widget(table, area);
}

/// The (min, max) score over the full view ranking, so the two tables
/// share one bar scale.
fn score_range(ranked: &[RankedPlayer]) -> (f64, f64) {
    match (ranked.last(), ranked.first()) {
        (Some(last), Some(first)) => (last.oci, first.oci),
        _ => (0.0, 0.0),
    }
}

/// A proportional bar of `width` cells for `value` within `(min, max)`.
/// A zero-spread range fills half the bar.
pub fn score_bar(value: f64, (min, max): (f64, f64), width: usize) -> String {
    let spread = max - min;
    let fraction = if spread <= f64::EPSILON {
        0.5
    } else {
        ((value - min) / spread).clamp(0.0, 1.0)
    };
    let filled = (fraction * width as f64).round() as usize;
    "█".repeat(filled)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
