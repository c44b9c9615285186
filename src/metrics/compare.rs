// Two-player comparison: signed per-metric differences over the current
// view.

use thiserror::Error;

use super::{Metric, PlayerRecord};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("player not found in current view: {name}")]
    MissingPlayer { name: String },
}

// ---------------------------------------------------------------------------
// Comparison output
// ---------------------------------------------------------------------------

/// One metric's values for both players and their signed difference
/// (left − right). The difference is absent when either side is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDelta {
    pub metric: Metric,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub delta: Option<f64>,
}

/// A full two-player comparison.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub left: PlayerRecord,
    pub right: PlayerRecord,
    /// Deltas in display order (composite first).
    pub deltas: Vec<MetricDelta>,
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

fn find<'a>(view: &'a [PlayerRecord], name: &str) -> Result<&'a PlayerRecord, CompareError> {
    view.iter()
        .find(|p| p.name == name)
        .ok_or_else(|| CompareError::MissingPlayer {
            name: name.to_string(),
        })
}

/// Compare two players by name within the current view.
///
/// Fails when either name is absent from the view at comparison time, e.g.
/// after a team filter removed it.
pub fn compare(
    view: &[PlayerRecord],
    left_name: &str,
    right_name: &str,
) -> Result<Comparison, CompareError> {
    let left = find(view, left_name)?.clone();
    let right = find(view, right_name)?.clone();

    let deltas = Metric::COMPARE_ORDER
        .iter()
        .map(|&metric| {
            let l = metric.get(&left);
            let r = metric.get(&right);
            MetricDelta {
                metric,
                left: l,
                right: r,
                delta: match (l, r) {
                    (Some(l), Some(r)) => Some(l - r),
                    _ => None,
                },
            }
        })
        .collect();

    Ok(Comparison {
        left,
        right,
        deltas,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn make_player(name: &str, adi: f64, aer: f64, er: f64, aei: f64, oci: f64) -> PlayerRecord {
        PlayerRecord {
            name: name.into(),
            team: "TST".into(),
            adi: Some(adi),
            aer: Some(aer),
            er: Some(er),
            aei: Some(aei),
            oci: Some(oci),
        }
    }

    fn sample_view() -> Vec<PlayerRecord> {
        vec![
            make_player("A", 0.8, 0.6, 0.1, 0.9, 0.85),
            make_player("B", 0.5, 0.4, 0.3, 0.6, 0.50),
        ]
    }

    #[test]
    fn deltas_are_signed_left_minus_right() {
        let view = sample_view();
        let cmp = compare(&view, "A", "B").unwrap();

        assert_eq!(cmp.deltas.len(), 5);
        assert_eq!(cmp.deltas[0].metric, Metric::Oci);
        assert!(approx_eq(cmp.deltas[0].delta.unwrap(), 0.35, 1e-12));

        let adi = cmp.deltas.iter().find(|d| d.metric == Metric::Adi).unwrap();
        assert!(approx_eq(adi.delta.unwrap(), 0.3, 1e-12));

        let er = cmp.deltas.iter().find(|d| d.metric == Metric::Er).unwrap();
        assert!(approx_eq(er.delta.unwrap(), -0.2, 1e-12));
    }

    #[test]
    fn comparison_is_antisymmetric() {
        let view = sample_view();
        let ab = compare(&view, "A", "B").unwrap();
        let ba = compare(&view, "B", "A").unwrap();

        for (d1, d2) in ab.deltas.iter().zip(ba.deltas.iter()) {
            assert_eq!(d1.metric, d2.metric);
            assert!(approx_eq(
                d1.delta.unwrap(),
                -d2.delta.unwrap(),
                1e-12
            ));
        }
    }

    #[test]
    fn self_comparison_is_zero() {
        let view = sample_view();
        let cmp = compare(&view, "A", "A").unwrap();
        for d in &cmp.deltas {
            assert!(approx_eq(d.delta.unwrap(), 0.0, 1e-12));
        }
    }

    #[test]
    fn absent_cell_yields_absent_delta() {
        let mut view = sample_view();
        view[1].aer = None;
        let cmp = compare(&view, "A", "B").unwrap();

        let aer = cmp.deltas.iter().find(|d| d.metric == Metric::Aer).unwrap();
        assert_eq!(aer.left, Some(0.6));
        assert_eq!(aer.right, None);
        assert_eq!(aer.delta, None);

        // Other metrics unaffected.
        let adi = cmp.deltas.iter().find(|d| d.metric == Metric::Adi).unwrap();
        assert!(adi.delta.is_some());
    }

    #[test]
    fn missing_player_names_the_absentee() {
        let view = sample_view();
        let err = compare(&view, "A", "ghost").unwrap_err();
        match err {
            CompareError::MissingPlayer { name } => assert_eq!(name, "ghost"),
        }

        let err = compare(&view, "ghost", "B").unwrap_err();
        match err {
            CompareError::MissingPlayer { name } => assert_eq!(name, "ghost"),
        }
    }

    #[test]
    fn filtered_out_player_is_missing() {
        // A view restricted to one team no longer contains the other
        // team's player.
        let mut view = sample_view();
        view[1].team = "OTHER".into();
        let filtered: Vec<PlayerRecord> = view
            .iter()
            .filter(|p| p.team == "TST")
            .cloned()
            .collect();

        let err = compare(&filtered, "A", "B").unwrap_err();
        match err {
            CompareError::MissingPlayer { name } => assert_eq!(name, "B"),
        }
    }
}
