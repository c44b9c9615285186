// Data table widget: the current filtered view with every metric column,
// mirroring the report's bottom table.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::metrics::Metric;
use crate::tui::ViewState;

use super::fmt_metric;

/// Render the filtered data table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut header_cells = vec![Cell::from("선수"), Cell::from("팀")];
    header_cells.extend(Metric::ALL.iter().map(|m| Cell::from(m.column())));
    let header = Row::new(header_cells).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let selected_name = state.view.selected.as_ref().map(|p| p.name.as_str());

    let rows: Vec<Row> = state
        .view
        .rows
        .iter()
        .map(|p| {
            let marked = state.filter.compare.iter().any(|n| n == &p.name);
            let is_selected = selected_name == Some(p.name.as_str());
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else if marked {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };

            let mut cells = vec![Cell::from(p.name.clone()), Cell::from(p.team.clone())];
            cells.extend(
                Metric::ALL
                    .iter()
                    .map(|m| Cell::from(fmt_metric(m.get(p)))),
            );
            Row::new(cells).style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(12),
        Constraint::Min(10),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(build_title(state)));
    frame.render_widget(table, area);
}

/// Build the title with filter info and row count.
fn build_title(state: &ViewState) -> Line<'static> {
    let mut title = String::from("Current View");
    if let Some(team) = &state.filter.team {
        title.push_str(&format!(" [{team}]"));
    }
    if !state.filter.search.is_empty() {
        title.push_str(&format!(" \"{}\"", state.filter.search));
    }
    title.push_str(&format!(" ({})", state.view.rows.len()));
    Line::from(title)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
