// Optional min-max normalization of the metric columns.
//
// Each column is rescaled independently to [0, 1] against its own observed
// min/max within the dataset. Absent cells stay absent and do not
// contribute to the range. A column with zero spread maps every present
// value to 0.5 rather than dividing by zero.

use super::{Metric, PlayerRecord};

/// Threshold below which a column's spread is treated as zero.
const RANGE_EPSILON: f64 = 1e-12;

/// Observed bounds of one metric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnRange {
    pub min: f64,
    pub max: f64,
}

/// Compute the min/max of the present values of `metric` across `players`.
/// Returns `None` when no value is present.
pub fn column_range(players: &[PlayerRecord], metric: Metric) -> Option<ColumnRange> {
    let mut range: Option<ColumnRange> = None;
    for value in players.iter().filter_map(|p| metric.get(p)) {
        range = Some(match range {
            None => ColumnRange {
                min: value,
                max: value,
            },
            Some(r) => ColumnRange {
                min: r.min.min(value),
                max: r.max.max(value),
            },
        });
    }
    range
}

/// Rescale all five metric columns of `players` to [0, 1] in place.
pub fn rescale(players: &mut [PlayerRecord]) {
    for metric in Metric::ALL {
        let Some(range) = column_range(players, metric) else {
            continue;
        };
        let spread = range.max - range.min;
        for player in players.iter_mut() {
            let Some(value) = metric.get(player) else {
                continue;
            };
            let scaled = if spread < RANGE_EPSILON {
                0.5
            } else {
                (value - range.min) / spread
            };
            metric.set(player, Some(scaled));
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
