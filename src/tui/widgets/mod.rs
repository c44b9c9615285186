// TUI widget modules for each dashboard panel.

pub mod compare;
pub mod kpi;
pub mod player_list;
pub mod profile;
pub mod rankings;
pub mod status_bar;
pub mod table;

/// Metric cell formatting: three decimals, "NA" for absent values.
pub fn fmt_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.3}"),
        None => "NA".to_string(),
    }
}

/// Signed-delta formatting: explicit plus sign on positive values.
pub fn fmt_delta(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:+.3}"),
        None => "NA".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_metric_three_decimals() {
        assert_eq!(fmt_metric(Some(0.61)), "0.610");
        assert_eq!(fmt_metric(Some(-0.1)), "-0.100");
        assert_eq!(fmt_metric(None), "NA");
    }

    #[test]
    fn fmt_delta_signed() {
        assert_eq!(fmt_delta(Some(0.35)), "+0.350");
        assert_eq!(fmt_delta(Some(-0.2)), "-0.200");
        assert_eq!(fmt_delta(Some(0.0)), "+0.000");
        assert_eq!(fmt_delta(None), "NA");
    }
}
