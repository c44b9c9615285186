// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` holding the loaded league snapshots, the
// interactive filter state, and the `ViewModel` rebuilt by a full
// recomputation pass after every input event. The render tick draws
// whatever the current view model says at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{self, AppData, FilterState, ViewModel};
use crate::config::Config;
use crate::export;

use layout::build_layout;

// ---------------------------------------------------------------------------
// Tabs and commands
// ---------------------------------------------------------------------------

/// Which view fills the main panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Rankings,
    Profile,
    Compare,
    Table,
}

/// Key presses that need handling outside the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Export,
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// All state the dashboard needs to render and react to input.
pub struct ViewState {
    pub data: AppData,
    pub filter: FilterState,
    pub view: ViewModel,
    pub active_tab: TabId,
    /// True while the name-search prompt captures keystrokes.
    pub search_mode: bool,
    /// Transient message shown in the status bar (e.g. export result).
    pub notice: Option<String>,
    export_dir: PathBuf,
}

impl ViewState {
    pub fn new(data: AppData, config: &Config) -> Self {
        let filter = FilterState::new(config.dashboard.top_n);
        let view = app::build_view(data.league(filter.league), &filter);
        ViewState {
            data,
            filter,
            view,
            active_tab: TabId::Rankings,
            search_mode: false,
            notice: None,
            export_dir: PathBuf::from(&config.dashboard.export_dir),
        }
    }

    /// Rebuild the view model from the current filter state.
    pub fn refresh(&mut self) {
        self.view = app::build_view(self.data.league(self.filter.league), &self.filter);
    }

    /// Export the current filtered view and record the outcome as a notice.
    pub fn export_current_view(&mut self) {
        match export::export_view(&self.export_dir, self.view.league, &self.view.rows) {
            Ok(path) => self.notice = Some(format!("exported {}", path.display())),
            Err(e) => self.notice = Some(format!("export failed: {e}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::kpi::render(frame, layout.kpi, state);

    match state.active_tab {
        TabId::Rankings => widgets::rankings::render(frame, layout.main_panel, state),
        TabId::Profile => widgets::profile::render(frame, layout.main_panel, state),
        TabId::Compare => widgets::compare::render(frame, layout.main_panel, state),
        TabId::Table => widgets::table::render(frame, layout.main_panel, state),
    }

    widgets::player_list::render(frame, layout.player_list, state);
    render_help_bar(frame, layout.help_bar, state);
}

fn render_help_bar(frame: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let text = if state.search_mode {
        format!(" search: {}_  (Enter:apply  Esc:cancel)", state.filter.search)
    } else {
        " q:Quit | 1-4:Tabs | g:League | t:Team | j/k:Select | c:Compare | x:Clear | /:Search | +/-:N | e:Export"
            .to_string()
    };
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop over keyboard input and render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(mut state: ViewState) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal even when a widget panics.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        match input::handle_key(key_event, &mut state) {
                            Some(Command::Quit) => break,
                            Some(Command::Export) => state.export_current_view(),
                            None => {}
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events need no handling; the
                        // next render tick picks up the new size.
                    }
                    Some(Err(_)) | None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
