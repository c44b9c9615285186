// Status bar widget: league, score source, active filters, tab indicator,
// and transient notices.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::metrics::ScoreSource;
use crate::tui::{TabId, ViewState};

/// Render the status bar into the given area.
///
/// Layout: [league] [score source] [team filter] [tab bar] [notice]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = Vec::new();

    spans.push(Span::styled(
        format!(" {} ", state.view.league.label()),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    let (source_text, source_color) = score_source_indicator(state.view.score_source);
    spans.push(Span::styled(
        format!(" {source_text} "),
        Style::default().fg(source_color),
    ));

    let team_text = match &state.filter.team {
        Some(team) => format!("team:{team}"),
        None => "team:all".to_string(),
    };
    spans.push(Span::styled(team_text, Style::default().fg(Color::White)));

    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    spans.extend(tab_spans(state.active_tab));

    if let Some(notice) = &state.notice {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Text and color describing where the composite score came from.
pub fn score_source_indicator(source: ScoreSource) -> (&'static str, Color) {
    match source {
        ScoreSource::Provided => ("OCI:file", Color::Green),
        ScoreSource::Derived => ("OCI:derived", Color::Magenta),
    }
}

/// Build tab indicator spans with the active tab highlighted.
pub fn tab_spans(active: TabId) -> Vec<Span<'static>> {
    let tabs = [
        (TabId::Rankings, "1:Rankings"),
        (TabId::Profile, "2:Profile"),
        (TabId::Compare, "3:Compare"),
        (TabId::Table, "4:Table"),
    ];

    let mut spans = Vec::new();
    for (tab, label) in tabs {
        let style = if tab == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("[{label}]"), style));
        spans.push(Span::raw(" "));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
