// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones for the scouting dashboard:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Player KPI banner (8 rows)                        |
// +-------------------------+------------------------+
// | Main Panel (70%)         | Player List (30%)      |
// | (tab-switched view)      |                        |
// +-------------------------+------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: league, score source, active filters, notices.
    pub status_bar: Rect,
    /// Selected player's metric values, composite score, and standing.
    pub kpi: Rect,
    /// Left side of the middle section: tab-switched content area.
    pub main_panel: Rect,
    /// Right sidebar: selectable player list for the current view.
    pub player_list: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | kpi(8) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Length(8), // KPI banner
            Constraint::Min(8),    // middle section (main + player list)
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let status_bar = vertical[0];
    let kpi = vertical[1];
    let middle = vertical[2];
    let help_bar = vertical[3];

    // Horizontal: main panel (70%) | player list (30%)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(middle);

    AppLayout {
        status_bar,
        kpi,
        main_panel: horizontal[0],
        player_list: horizontal[1],
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
