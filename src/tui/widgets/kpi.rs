// Player KPI banner: the selected player's metric values, the composite
// score, and their power-ranking standing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::metrics::rank::Standing;
use crate::metrics::{Metric, PlayerRecord};
use crate::tui::ViewState;

use super::fmt_metric;

/// Render the KPI banner into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(player) = &state.view.selected else {
        let placeholder = Paragraph::new("No player selected.")
            .block(Block::default().borders(Borders::ALL).title("Player KPI"));
        frame.render_widget(placeholder, area);
        return;
    };

    // Left: identity + the four input metrics. Right: OCI + standing.
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let metrics = Paragraph::new(metric_lines(player)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Player KPI"),
    );
    frame.render_widget(metrics, halves[0]);

    let score = Paragraph::new(score_lines(player, state.view.standing.as_ref())).block(
        Block::default()
            .borders(Borders::ALL)
            .title("OCI · Power Ranking"),
    );
    frame.render_widget(score, halves[1]);
}

fn metric_lines(player: &PlayerRecord) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            player.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({})", player.team),
            Style::default().fg(Color::Gray),
        ),
    ])];
    lines.push(Line::from(""));

    for metric in Metric::INPUTS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<4}", metric.column()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("{:>8}", fmt_metric(metric.get(player))),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", metric.caption()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines
}

fn score_lines(player: &PlayerRecord, standing: Option<&Standing>) -> Vec<Line<'static>> {
    // Negative composite scores render red, matching the report's styling.
    let oci_style = match player.oci {
        Some(v) if v < 0.0 => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Some(_) => Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("OCI {}", fmt_metric(player.oci)),
            oci_style,
        )),
        Line::from(""),
    ];

    match standing {
        Some(s) => {
            lines.push(Line::from(Span::raw(format!(
                "League #{} / {}  ·  top {:.1}%",
                s.league_rank, s.league_size, s.percentile
            ))));
            lines.push(Line::from(Span::raw(format!(
                "Team   #{} / {}",
                s.team_rank, s.team_size
            ))));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "no ranking (score unavailable)",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    lines
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
