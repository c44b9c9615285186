// Application state: the immutable per-league snapshots, the interactive
// filter state, and the pure view recomputation.
//
// Every user interaction mutates `FilterState` and triggers a full
// `build_view` pass over the in-memory dataset. There is no incremental
// update and nothing mutates `LeagueData` after load.

use crate::metrics::compare::{self, CompareError, Comparison};
use crate::metrics::rank::{self, RankedPlayer, Standing};
use crate::metrics::{League, LeagueData, PlayerRecord, ScoreSource};

// ---------------------------------------------------------------------------
// Loaded data
// ---------------------------------------------------------------------------

/// Both league snapshots, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppData {
    pub men: LeagueData,
    pub women: LeagueData,
}

impl AppData {
    pub fn league(&self, league: League) -> &LeagueData {
        match league {
            League::Men => &self.men,
            League::Women => &self.women,
        }
    }
}

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// Everything the user can change from the dashboard.
#[derive(Debug, Clone)]
pub struct FilterState {
    pub league: League,
    /// `None` shows all teams.
    pub team: Option<String>,
    /// Case-insensitive name substring filter.
    pub search: String,
    /// Selection index into the filtered player list.
    pub selected: usize,
    /// Names marked for comparison, at most two.
    pub compare: Vec<String>,
    /// Top/Bottom N for the ranking panel.
    pub top_n: usize,
}

impl FilterState {
    pub fn new(top_n: usize) -> Self {
        FilterState {
            league: League::Men,
            team: None,
            search: String::new(),
            selected: 0,
            compare: Vec::new(),
            top_n,
        }
    }

    /// Switch leagues; team filter, search, selection, and compare marks
    /// are league-specific and reset.
    pub fn toggle_league(&mut self) {
        self.league = self.league.toggled();
        self.team = None;
        self.search.clear();
        self.selected = 0;
        self.compare.clear();
    }

    /// Mark or unmark a player for comparison. Marking a third player
    /// drops the oldest mark.
    pub fn toggle_compare(&mut self, name: &str) {
        if let Some(pos) = self.compare.iter().position(|n| n == name) {
            self.compare.remove(pos);
            return;
        }
        if self.compare.len() == 2 {
            self.compare.remove(0);
        }
        self.compare.push(name.to_string());
    }

    /// Advance the team filter through `None -> teams[0] -> ... -> None`.
    pub fn cycle_team(&mut self, teams: &[String]) {
        self.team = match &self.team {
            None => teams.first().cloned(),
            Some(current) => teams
                .iter()
                .position(|t| t == current)
                .and_then(|i| teams.get(i + 1))
                .cloned(),
        };
        self.selected = 0;
    }
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// Outcome of the two-player comparison for the current view.
#[derive(Debug, Clone)]
pub enum CompareSelection {
    /// Fewer than two players marked.
    Incomplete,
    Ready(Comparison),
    /// A marked player is no longer in the view (e.g. filtered out).
    Missing { name: String },
}

/// Everything the dashboard renders, recomputed per interaction.
#[derive(Debug, Clone)]
pub struct ViewModel {
    pub league: League,
    pub score_source: ScoreSource,
    /// Distinct team names of the league, sorted.
    pub teams: Vec<String>,
    /// The filtered player rows, in input order.
    pub rows: Vec<PlayerRecord>,
    /// Ranking over the filtered rows.
    pub ranked: Vec<RankedPlayer>,
    pub top: Vec<RankedPlayer>,
    pub bottom: Vec<RankedPlayer>,
    /// The selected player, when the view is non-empty.
    pub selected: Option<PlayerRecord>,
    /// League/team standing of the selected player, computed over the
    /// full league dataset regardless of the active filter.
    pub standing: Option<Standing>,
    /// Per-team count of league top-ten players (full dataset).
    pub team_tally: Vec<(String, usize)>,
    pub comparison: CompareSelection,
}

/// Pure view recomputation: `(dataset, filter) -> view`.
pub fn build_view(data: &LeagueData, filter: &FilterState) -> ViewModel {
    let mut teams: Vec<String> = Vec::new();
    for p in &data.players {
        if !p.team.is_empty() && !teams.contains(&p.team) {
            teams.push(p.team.clone());
        }
    }
    teams.sort();

    let search = filter.search.to_lowercase();
    let rows: Vec<PlayerRecord> = data
        .players
        .iter()
        .filter(|p| match &filter.team {
            Some(team) => &p.team == team,
            None => true,
        })
        .filter(|p| search.is_empty() || p.name.to_lowercase().contains(&search))
        .cloned()
        .collect();

    let ranked = rank::rank_by_score(&rows);
    let top = rank::top_n(&ranked, filter.top_n).to_vec();
    let bottom = rank::bottom_n(&ranked, filter.top_n);

    let selected = if rows.is_empty() {
        None
    } else {
        Some(rows[filter.selected.min(rows.len() - 1)].clone())
    };
    let standing = selected
        .as_ref()
        .and_then(|p| rank::standing_for(&data.players, &p.name));

    let team_tally = rank::team_tally(&data.players);

    let comparison = match filter.compare.as_slice() {
        [left, right] => match compare::compare(&rows, left, right) {
            Ok(cmp) => CompareSelection::Ready(cmp),
            Err(CompareError::MissingPlayer { name }) => CompareSelection::Missing { name },
        },
        _ => CompareSelection::Incomplete,
    };

    ViewModel {
        league: data.league,
        score_source: data.score_source,
        teams,
        rows,
        ranked,
        top,
        bottom,
        selected,
        standing,
        team_tally,
        comparison,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
