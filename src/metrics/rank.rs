// Ranking over the composite score: ordered lists, Top/Bottom N,
// percentile, and league/team standing.

use super::PlayerRecord;

/// Number of leaders counted in the per-team tally.
const TEAM_TALLY_SIZE: usize = 10;

// ---------------------------------------------------------------------------
// Ranked rows
// ---------------------------------------------------------------------------

/// One row of the OCI ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlayer {
    pub name: String,
    pub team: String,
    pub oci: f64,
}

/// Rank players by OCI descending, dropping records with an absent score.
///
/// Ties keep their original row order: `sort_by` is stable and the
/// comparison treats equal scores (and any non-comparable pair) as equal.
pub fn rank_by_score(players: &[PlayerRecord]) -> Vec<RankedPlayer> {
    let mut ranked: Vec<RankedPlayer> = players
        .iter()
        .filter_map(|p| {
            p.oci.map(|oci| RankedPlayer {
                name: p.name.clone(),
                team: p.team.clone(),
                oci,
            })
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.oci
            .partial_cmp(&a.oci)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// First `n` rows of the ranking (clamped to its length).
pub fn top_n(ranked: &[RankedPlayer], n: usize) -> &[RankedPlayer] {
    &ranked[..n.min(ranked.len())]
}

/// Last `n` rows of the ranking, re-sorted ascending for display.
pub fn bottom_n(ranked: &[RankedPlayer], n: usize) -> Vec<RankedPlayer> {
    let n = n.min(ranked.len());
    let mut bottom: Vec<RankedPlayer> = ranked[ranked.len() - n..].to_vec();
    bottom.reverse();
    bottom
}

// ---------------------------------------------------------------------------
// Percentile and standing
// ---------------------------------------------------------------------------

/// Percentile of 1-based rank `rank` among `total` ranked players:
/// `100 * (total - rank + 1) / total`. Rank 1 is the 100th percentile.
pub fn percentile(rank: usize, total: usize) -> f64 {
    100.0 * (total - rank + 1) as f64 / total as f64
}

/// A player's power-ranking standing within the league and their team.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    /// 1-based rank across the whole league.
    pub league_rank: usize,
    /// Number of ranked players in the league.
    pub league_size: usize,
    /// Percentile across the league (100.0 = best).
    pub percentile: f64,
    /// 1-based rank within the player's team.
    pub team_rank: usize,
    /// Number of ranked players on the team.
    pub team_size: usize,
}

/// Compute a player's standing over the full dataset.
///
/// Always ranks against every record, regardless of any active view
/// filter. Returns `None` when the player has no score (or is absent).
pub fn standing_for(players: &[PlayerRecord], name: &str) -> Option<Standing> {
    let ranked = rank_by_score(players);
    let league_rank = ranked.iter().position(|r| r.name == name)? + 1;
    let league_size = ranked.len();

    let team = &ranked[league_rank - 1].team;
    let team_rows: Vec<&RankedPlayer> = ranked.iter().filter(|r| &r.team == team).collect();
    let team_rank = team_rows.iter().position(|r| r.name == name)? + 1;

    Some(Standing {
        league_rank,
        league_size,
        percentile: percentile(league_rank, league_size),
        team_rank,
        team_size: team_rows.len(),
    })
}

// ---------------------------------------------------------------------------
// Team tally
// ---------------------------------------------------------------------------

/// Count how many of the league's top ten players each team supplies.
///
/// Computed over the full dataset; teams outside the top ten are omitted.
/// Sorted by count descending, then team name for determinism.
pub fn team_tally(players: &[PlayerRecord]) -> Vec<(String, usize)> {
    let ranked = rank_by_score(players);
    let leaders = top_n(&ranked, TEAM_TALLY_SIZE);

    let mut counts: Vec<(String, usize)> = Vec::new();
    for row in leaders {
        match counts.iter_mut().find(|(team, _)| team == &row.team) {
            Some((_, count)) => *count += 1,
            None => counts.push((row.team.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
