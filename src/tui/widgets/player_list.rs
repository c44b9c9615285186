// Player list sidebar: selectable list of the current view's players with
// comparison marks.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the player list into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let selected_name = state.view.selected.as_ref().map(|p| p.name.as_str());

    let items: Vec<ListItem> = state
        .view
        .rows
        .iter()
        .map(|p| {
            let is_selected = selected_name == Some(p.name.as_str());
            let marker = compare_marker(state, &p.name);

            let mut spans = vec![Span::styled(
                if is_selected { ">> " } else { "   " },
                Style::default().fg(Color::Cyan),
            )];
            if let Some(marker) = marker {
                spans.push(Span::styled(marker, Style::default().fg(Color::Yellow)));
            }
            spans.push(Span::styled(
                p.name.clone(),
                if is_selected {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                },
            ));
            spans.push(Span::styled(
                format!("  {}", p.team),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!("Players ({})", state.view.rows.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

/// "[1] " / "[2] " for marked players, `None` otherwise.
fn compare_marker(state: &ViewState, name: &str) -> Option<String> {
    state
        .filter
        .compare
        .iter()
        .position(|n| n == name)
        .map(|i| format!("[{}] ", i + 1))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
