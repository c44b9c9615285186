// Comparison widget: per-metric values and signed differences for the two
// marked players. Degrades to an informational placeholder when the
// selection is incomplete or a marked player left the view.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::CompareSelection;
use crate::metrics::compare::Comparison;
use crate::tui::ViewState;

use super::{fmt_delta, fmt_metric};

/// Render the comparison panel into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default().borders(Borders::ALL).title("Compare");

    match &state.view.comparison {
        CompareSelection::Incomplete => {
            let placeholder =
                Paragraph::new("Mark two players with 'c' to compare them.").block(block);
            frame.render_widget(placeholder, area);
        }
        CompareSelection::Missing { name } => {
            let message = format!(
                "'{name}' is not in the current view (filtered out?). \
                 Adjust the team filter or clear marks with 'x'."
            );
            let placeholder = Paragraph::new(message)
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(placeholder, area);
        }
        CompareSelection::Ready(comparison) => {
            render_table(frame, area, block, comparison);
        }
    }
}

fn render_table(frame: &mut Frame, area: Rect, block: Block, comparison: &Comparison) {
    let header = Row::new(vec![
        Cell::from("Metric"),
        Cell::from(format!(
            "{} ({})",
            comparison.left.name, comparison.left.team
        )),
        Cell::from(format!(
            "{} ({})",
            comparison.right.name, comparison.right.team
        )),
        Cell::from("Δ (1-2)"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = comparison
        .deltas
        .iter()
        .map(|d| {
            let delta_style = match d.delta {
                Some(v) if v > 0.0 => Style::default().fg(Color::Green),
                Some(v) if v < 0.0 => Style::default().fg(Color::Red),
                _ => Style::default().fg(Color::DarkGray),
            };
            Row::new(vec![
                Cell::from(d.metric.column()),
                Cell::from(fmt_metric(d.left)),
                Cell::from(fmt_metric(d.right)),
                Cell::from(fmt_delta(d.delta)).style(delta_style),
            ])
        })
        .collect();

    let widths = [
        ratatui::layout::Constraint::Length(8),
        ratatui::layout::Constraint::Min(14),
        ratatui::layout::Constraint::Min(14),
        ratatui::layout::Constraint::Length(10),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::test_state;

    #[test]
    fn render_incomplete_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = test_state();
        assert!(matches!(
            state.view.comparison,
            CompareSelection::Incomplete
        ));
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_ready_comparison_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = test_state();
        state.filter.compare = vec!["김선수".into(), "이선수".into()];
        state.refresh();
        assert!(matches!(state.view.comparison, CompareSelection::Ready(_)));
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_missing_player_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = test_state();
        state.filter.compare = vec!["김선수".into(), "이선수".into()];
        state.filter.team = Some("대한항공".into());
        state.refresh();
        assert!(matches!(
            state.view.comparison,
            CompareSelection::Missing { .. }
        ));
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
