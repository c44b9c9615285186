// Metrics engine: dataset loading, OCI resolution, normalization, ranking,
// and player comparison.

pub mod compare;
pub mod derive;
pub mod loader;
pub mod normalize;
pub mod rank;

use std::path::Path;

use thiserror::Error;
use tracing::info;

// ---------------------------------------------------------------------------
// Core types
// ---------------------------------------------------------------------------

/// League identifier for the two input datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum League {
    Men,
    Women,
}

impl League {
    /// Display label in site vocabulary (used in titles and export names).
    pub fn label(&self) -> &'static str {
        match self {
            League::Men => "남자부",
            League::Women => "여자부",
        }
    }

    /// The other league.
    pub fn toggled(&self) -> League {
        match self {
            League::Men => League::Women,
            League::Women => League::Men,
        }
    }
}

/// One player's offensive metric row.
///
/// `None` models an empty or non-numeric cell in the source table; such
/// cells display as "NA" and are excluded from rankings and column ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    pub adi: Option<f64>,
    pub aer: Option<f64>,
    pub er: Option<f64>,
    pub aei: Option<f64>,
    pub oci: Option<f64>,
}

/// Whether the composite score came with the file or had to be derived.
///
/// Resolved once per dataset at load time; never re-evaluated per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSource {
    /// The OCI column was present with at least one value; used as-is.
    Provided,
    /// The OCI column was missing or entirely empty; derived from the
    /// four input metrics.
    Derived,
}

/// A fully prepared league dataset: loaded, score-resolved, optionally
/// normalized. Immutable once built.
#[derive(Debug, Clone)]
pub struct LeagueData {
    pub league: League,
    pub players: Vec<PlayerRecord>,
    pub score_source: ScoreSource,
}

// ---------------------------------------------------------------------------
// Metric identifiers
// ---------------------------------------------------------------------------

/// The five numeric columns of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Adi,
    Aer,
    Er,
    Aei,
    Oci,
}

impl Metric {
    /// All metric columns in table order.
    pub const ALL: [Metric; 5] = [
        Metric::Adi,
        Metric::Aer,
        Metric::Er,
        Metric::Aei,
        Metric::Oci,
    ];

    /// The four derivation inputs (the profile axes).
    pub const INPUTS: [Metric; 4] = [Metric::Adi, Metric::Aer, Metric::Er, Metric::Aei];

    /// Comparison display order (composite first).
    pub const COMPARE_ORDER: [Metric; 5] = [
        Metric::Oci,
        Metric::Adi,
        Metric::Aer,
        Metric::Er,
        Metric::Aei,
    ];

    /// Column header as it appears in the CSV files.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Adi => "ADI",
            Metric::Aer => "AER",
            Metric::Er => "ER",
            Metric::Aei => "AEI",
            Metric::Oci => "OCI",
        }
    }

    /// Short description shown next to the column name in the KPI panel.
    pub fn caption(&self) -> &'static str {
        match self {
            Metric::Adi => "attack-route diversity",
            Metric::Aer => "attack engagement rate",
            Metric::Er => "error rate (lower is better)",
            Metric::Aei => "attack efficiency index",
            Metric::Oci => "overall contribution index",
        }
    }

    pub fn get(&self, record: &PlayerRecord) -> Option<f64> {
        match self {
            Metric::Adi => record.adi,
            Metric::Aer => record.aer,
            Metric::Er => record.er,
            Metric::Aei => record.aei,
            Metric::Oci => record.oci,
        }
    }

    pub fn set(&self, record: &mut PlayerRecord, value: Option<f64>) {
        match self {
            Metric::Adi => record.adi = value,
            Metric::Aer => record.aer = value,
            Metric::Er => record.er = value,
            Metric::Aei => record.aei = value,
            Metric::Oci => record.oci = value,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset preparation
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Load(#[from] loader::LoadError),

    #[error(transparent)]
    Derive(#[from] derive::DeriveError),

    #[error("normalization requires an OCI column with values: {path}")]
    NormalizeWithoutScore { path: String },
}

/// Load one league's CSV and run the full preparation pipeline:
/// score resolution, then (when configured) min-max normalization.
pub fn prepare_league(
    league: League,
    path: &Path,
    normalize: bool,
) -> Result<LeagueData, DatasetError> {
    let mut table = loader::load_table(path)?;

    let score_source = derive::resolve_score(&mut table.players, &table.columns)?;

    if normalize {
        // The normalize variant expects scores to come with the file;
        // rescaling derivation inputs before deriving is unsupported.
        if score_source != ScoreSource::Provided {
            return Err(DatasetError::NormalizeWithoutScore {
                path: path.display().to_string(),
            });
        }
        normalize::rescale(&mut table.players);
    }

    info!(
        league = league.label(),
        players = table.players.len(),
        score_source = ?score_source,
        normalized = normalize,
        "league dataset prepared"
    );

    Ok(LeagueData {
        league,
        players: table.players,
        score_source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn make_record(
        name: &str,
        team: &str,
        adi: f64,
        aer: f64,
        er: f64,
        aei: f64,
        oci: Option<f64>,
    ) -> PlayerRecord {
        PlayerRecord {
            name: name.into(),
            team: team.into(),
            adi: Some(adi),
            aer: Some(aer),
            er: Some(er),
            aei: Some(aei),
            oci,
        }
    }

    #[test]
    fn league_toggles_between_the_two() {
        assert_eq!(League::Men.toggled(), League::Women);
        assert_eq!(League::Women.toggled(), League::Men);
        assert_eq!(League::Men.toggled().toggled(), League::Men);
    }

    #[test]
    fn metric_accessors_roundtrip() {
        let mut record = make_record("A", "T", 0.1, 0.2, 0.3, 0.4, Some(0.5));
        for metric in Metric::ALL {
            let value = metric.get(&record);
            assert!(value.is_some());
            metric.set(&mut record, Some(9.0));
            assert_eq!(metric.get(&record), Some(9.0));
        }
    }

    #[test]
    fn metric_columns_match_csv_headers() {
        let names: Vec<&str> = Metric::ALL.iter().map(|m| m.column()).collect();
        assert_eq!(names, vec!["ADI", "AER", "ER", "AEI", "OCI"]);
    }

    #[test]
    fn compare_order_leads_with_composite() {
        assert_eq!(Metric::COMPARE_ORDER[0], Metric::Oci);
        assert_eq!(Metric::COMPARE_ORDER.len(), 5);
    }
}
