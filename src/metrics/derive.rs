// Composite score (OCI) resolution.
//
// The decision is column-wide and made exactly once per dataset: either the
// file supplied usable OCI values and they pass through untouched, or the
// whole column is derived from the four input metrics with fixed weights.
// There is no per-row blending of provided and derived values.

use thiserror::Error;

use super::loader::ColumnSet;
use super::{PlayerRecord, ScoreSource};

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// OCI = W_AEI*AEI + W_ADI*ADI + W_AER*AER - W_ER*ER
pub const W_AEI: f64 = 0.4;
pub const W_ADI: f64 = 0.3;
pub const W_AER: f64 = 0.2;
pub const W_ER: f64 = 0.1;

/// The fixed weighted sum over the four input metrics. ER counts against
/// the score.
pub fn weighted_score(adi: f64, aer: f64, er: f64, aei: f64) -> f64 {
    W_AEI * aei + W_ADI * adi + W_AER * aer - W_ER * er
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DeriveError {
    #[error("cannot derive OCI, missing input columns: {columns:?}")]
    MissingInputs { columns: Vec<String> },
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve the dataset's composite score.
///
/// Returns `ScoreSource::Provided` without touching any record when the OCI
/// column exists and holds at least one value. Otherwise derives OCI for
/// every record; a record missing any input metric gets an absent score.
/// Fails when derivation is needed but an input column is absent from the
/// file, naming the missing columns; no partially derived scores are
/// emitted.
pub fn resolve_score(
    players: &mut [PlayerRecord],
    columns: &ColumnSet,
) -> Result<ScoreSource, DeriveError> {
    let provided = columns.oci && players.iter().any(|p| p.oci.is_some());
    if provided {
        return Ok(ScoreSource::Provided);
    }

    let inputs = [
        ("ADI", columns.adi),
        ("AER", columns.aer),
        ("ER", columns.er),
        ("AEI", columns.aei),
    ];
    let missing: Vec<String> = inputs
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DeriveError::MissingInputs { columns: missing });
    }

    for player in players.iter_mut() {
        player.oci = match (player.adi, player.aer, player.er, player.aei) {
            (Some(adi), Some(aer), Some(er), Some(aei)) => {
                Some(weighted_score(adi, aer, er, aei))
            }
            _ => None,
        };
    }

    Ok(ScoreSource::Derived)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
