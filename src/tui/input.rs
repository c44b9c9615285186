// Keyboard input handling.
//
// Translates crossterm key events into local state mutations (tab
// switching, filtering, selection) followed by a view refresh, or into a
// `Command` for the run loop (quit, export).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{Command, TabId, ViewState};

/// Bounds for the Top/Bottom N setting.
const TOP_N_MIN: usize = 1;
const TOP_N_MAX: usize = 50;

/// Handle a keyboard event.
///
/// Returns `Some(Command)` when the key press should be handled by the run
/// loop; `None` when it was handled locally by mutating `ViewState`.
pub fn handle_key(key_event: KeyEvent, state: &mut ViewState) -> Option<Command> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(Command::Quit);
    }

    // Search mode: capture printable characters and editing keys
    if state.search_mode {
        return handle_search_mode(key_event, state);
    }

    match key_event.code {
        KeyCode::Char('q') => Some(Command::Quit),

        // Tab switching
        KeyCode::Char('1') => {
            state.active_tab = TabId::Rankings;
            None
        }
        KeyCode::Char('2') => {
            state.active_tab = TabId::Profile;
            None
        }
        KeyCode::Char('3') => {
            state.active_tab = TabId::Compare;
            None
        }
        KeyCode::Char('4') => {
            state.active_tab = TabId::Table;
            None
        }

        // League toggle
        KeyCode::Char('g') => {
            state.filter.toggle_league();
            state.notice = None;
            state.refresh();
            None
        }

        // Team filter cycle
        KeyCode::Char('t') => {
            let teams = state.view.teams.clone();
            state.filter.cycle_team(&teams);
            state.refresh();
            None
        }

        // Selection movement
        KeyCode::Up | KeyCode::Char('k') => {
            move_selection(state, -1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_selection(state, 1);
            None
        }

        // Comparison marks
        KeyCode::Char('c') => {
            if let Some(player) = &state.view.selected {
                let name = player.name.clone();
                state.filter.toggle_compare(&name);
                state.refresh();
            }
            None
        }
        KeyCode::Char('x') => {
            state.filter.compare.clear();
            state.refresh();
            None
        }

        // Top/Bottom N
        KeyCode::Char('+') | KeyCode::Char('=') => {
            adjust_top_n(state, 1);
            None
        }
        KeyCode::Char('-') => {
            adjust_top_n(state, -1);
            None
        }

        // Search
        KeyCode::Char('/') => {
            state.search_mode = true;
            None
        }
        KeyCode::Esc => {
            if !state.filter.search.is_empty() {
                state.filter.search.clear();
                state.filter.selected = 0;
                state.refresh();
            }
            None
        }

        // Export
        KeyCode::Char('e') => Some(Command::Export),

        _ => None,
    }
}

fn handle_search_mode(key_event: KeyEvent, state: &mut ViewState) -> Option<Command> {
    match key_event.code {
        KeyCode::Esc => {
            state.search_mode = false;
            state.filter.search.clear();
            state.filter.selected = 0;
            state.refresh();
        }
        KeyCode::Enter => {
            state.search_mode = false;
        }
        KeyCode::Backspace => {
            state.filter.search.pop();
            state.filter.selected = 0;
            state.refresh();
        }
        KeyCode::Char(c) => {
            state.filter.search.push(c);
            state.filter.selected = 0;
            state.refresh();
        }
        _ => {}
    }
    None
}

fn move_selection(state: &mut ViewState, delta: isize) {
    let len = state.view.rows.len();
    if len == 0 {
        return;
    }
    let current = state.filter.selected.min(len - 1) as isize;
    state.filter.selected = (current + delta).clamp(0, len as isize - 1) as usize;
    state.refresh();
}

fn adjust_top_n(state: &mut ViewState, delta: isize) {
    let n = state.filter.top_n as isize + delta;
    state.filter.top_n = n.clamp(TOP_N_MIN as isize, TOP_N_MAX as isize) as usize;
    state.refresh();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::League;
    use crate::tui::tests::test_state;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut state = test_state();
        assert_eq!(handle_key(press(KeyCode::Char('q')), &mut state), Some(Command::Quit));
        assert_eq!(handle_key(ctrl('c'), &mut state), Some(Command::Quit));
    }

    #[test]
    fn ctrl_c_quits_even_in_search_mode() {
        let mut state = test_state();
        state.search_mode = true;
        assert_eq!(handle_key(ctrl('c'), &mut state), Some(Command::Quit));
    }

    #[test]
    fn number_keys_switch_tabs() {
        let mut state = test_state();
        handle_key(press(KeyCode::Char('3')), &mut state);
        assert_eq!(state.active_tab, TabId::Compare);
        handle_key(press(KeyCode::Char('4')), &mut state);
        assert_eq!(state.active_tab, TabId::Table);
        handle_key(press(KeyCode::Char('1')), &mut state);
        assert_eq!(state.active_tab, TabId::Rankings);
    }

    #[test]
    fn g_toggles_league_and_rebuilds_view() {
        let mut state = test_state();
        handle_key(press(KeyCode::Char('g')), &mut state);
        assert_eq!(state.filter.league, League::Women);
        assert_eq!(state.view.league, League::Women);
        assert_eq!(state.view.rows.len(), 1);
    }

    #[test]
    fn t_cycles_team_filter() {
        let mut state = test_state();
        handle_key(press(KeyCode::Char('t')), &mut state);
        assert_eq!(state.filter.team.as_deref(), Some("대한항공"));
        assert_eq!(state.view.rows.len(), 2);
        handle_key(press(KeyCode::Char('t')), &mut state);
        assert_eq!(state.filter.team.as_deref(), Some("현대캐피탈"));
        handle_key(press(KeyCode::Char('t')), &mut state);
        assert!(state.filter.team.is_none());
        assert_eq!(state.view.rows.len(), 3);
    }

    #[test]
    fn selection_moves_and_clamps() {
        let mut state = test_state();
        handle_key(press(KeyCode::Char('j')), &mut state);
        assert_eq!(state.filter.selected, 1);
        handle_key(press(KeyCode::Down), &mut state);
        assert_eq!(state.filter.selected, 2);
        // Clamped at the end of the list.
        handle_key(press(KeyCode::Char('j')), &mut state);
        assert_eq!(state.filter.selected, 2);
        handle_key(press(KeyCode::Char('k')), &mut state);
        handle_key(press(KeyCode::Up), &mut state);
        handle_key(press(KeyCode::Up), &mut state);
        assert_eq!(state.filter.selected, 0);
    }

    #[test]
    fn c_marks_selected_player_for_compare() {
        let mut state = test_state();
        handle_key(press(KeyCode::Char('c')), &mut state);
        assert_eq!(state.filter.compare, vec!["김선수".to_string()]);
        handle_key(press(KeyCode::Char('j')), &mut state);
        handle_key(press(KeyCode::Char('c')), &mut state);
        assert_eq!(state.filter.compare.len(), 2);
        handle_key(press(KeyCode::Char('x')), &mut state);
        assert!(state.filter.compare.is_empty());
    }

    #[test]
    fn top_n_adjusts_within_bounds() {
        let mut state = test_state();
        handle_key(press(KeyCode::Char('+')), &mut state);
        assert_eq!(state.filter.top_n, 11);
        handle_key(press(KeyCode::Char('-')), &mut state);
        assert_eq!(state.filter.top_n, 10);

        state.filter.top_n = TOP_N_MIN;
        handle_key(press(KeyCode::Char('-')), &mut state);
        assert_eq!(state.filter.top_n, TOP_N_MIN);

        state.filter.top_n = TOP_N_MAX;
        handle_key(press(KeyCode::Char('+')), &mut state);
        assert_eq!(state.filter.top_n, TOP_N_MAX);
    }

    #[test]
    fn search_mode_captures_text() {
        let mut state = test_state();
        handle_key(press(KeyCode::Char('/')), &mut state);
        assert!(state.search_mode);

        handle_key(press(KeyCode::Char('김')), &mut state);
        assert_eq!(state.filter.search, "김");
        assert_eq!(state.view.rows.len(), 1);

        handle_key(press(KeyCode::Enter), &mut state);
        assert!(!state.search_mode);
        assert_eq!(state.filter.search, "김");

        // 'q' now quits again instead of typing.
        assert_eq!(handle_key(press(KeyCode::Char('q')), &mut state), Some(Command::Quit));
    }

    #[test]
    fn search_mode_escape_cancels_and_clears() {
        let mut state = test_state();
        handle_key(press(KeyCode::Char('/')), &mut state);
        handle_key(press(KeyCode::Char('김')), &mut state);
        handle_key(press(KeyCode::Esc), &mut state);
        assert!(!state.search_mode);
        assert!(state.filter.search.is_empty());
        assert_eq!(state.view.rows.len(), 3);
    }

    #[test]
    fn search_mode_backspace_edits() {
        let mut state = test_state();
        handle_key(press(KeyCode::Char('/')), &mut state);
        handle_key(press(KeyCode::Char('a')), &mut state);
        handle_key(press(KeyCode::Char('b')), &mut state);
        handle_key(press(KeyCode::Backspace), &mut state);
        assert_eq!(state.filter.search, "a");
    }

    #[test]
    fn escape_clears_applied_search() {
        let mut state = test_state();
        state.filter.search = "김".into();
        state.refresh();
        handle_key(press(KeyCode::Esc), &mut state);
        assert!(state.filter.search.is_empty());
        assert_eq!(state.view.rows.len(), 3);
    }

    #[test]
    fn e_requests_export() {
        let mut state = test_state();
        assert_eq!(
            handle_key(press(KeyCode::Char('e')), &mut state),
            Some(Command::Export)
        );
    }

    #[test]
    fn release_events_ignored() {
        let mut state = test_state();
        let mut event = press(KeyCode::Char('q'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handle_key(event, &mut state), None);
    }
}
