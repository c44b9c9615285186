// Metrics CSV loading and cleanup.
//
// Reads the per-league export format: a header row with Korean identity
// columns (선수, 팀) and ASCII metric columns (ADI, AER, ER, AEI, optional
// OCI). Files come from spreadsheet tools that write either UTF-8 with a
// BOM or the CP949 regional encoding, so decoding tries both.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use super::PlayerRecord;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Which metric columns the source file carried.
///
/// The identity columns and the four input metrics are required at load
/// time; the flags still exist so the score deriver can state its own
/// input requirements independently of the loader.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSet {
    pub adi: bool,
    pub aer: bool,
    pub er: bool,
    pub aei: bool,
    pub oci: bool,
}

/// A loaded, cleaned table plus the observed column set.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub players: Vec<PlayerRecord>,
    pub columns: ColumnSet,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("input file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("could not decode {path} as UTF-8 or CP949")]
    Decode { path: String },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("missing required columns in {path}: {columns:?}")]
    MissingColumns { path: String, columns: Vec<String> },
}

// ---------------------------------------------------------------------------
// Raw CSV serde struct (private)
// ---------------------------------------------------------------------------

/// One raw CSV row. Metric cells deserialize as strings so that empty and
/// non-numeric values can be coerced to `None` instead of failing the row.
/// Extra columns are silently absorbed via `#[serde(flatten)]`.
#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawPlayerRow {
    #[serde(rename = "선수")]
    name: String,
    #[serde(rename = "팀", default)]
    team: String,
    #[serde(default)]
    ADI: Option<String>,
    #[serde(default)]
    AER: Option<String>,
    #[serde(default)]
    ER: Option<String>,
    #[serde(default)]
    AEI: Option<String>,
    #[serde(default)]
    OCI: Option<String>,
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Required column set; OCI is intentionally not part of it.
const REQUIRED_COLUMNS: [&str; 6] = ["선수", "팀", "ADI", "AER", "ER", "AEI"];

/// Strip stray BOM characters and surrounding whitespace from a header.
fn clean_header(header: &str) -> String {
    header.replace('\u{feff}', "").trim().to_string()
}

/// Lenient numeric coercion: empty, non-numeric, and non-finite cells all
/// become `None`.
fn parse_metric(cell: Option<&str>) -> Option<f64> {
    let text = cell?.trim();
    if text.is_empty() {
        return None;
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Decode file bytes: UTF-8 (BOM tolerated) first, CP949 on failure.
/// A second failure is fatal.
fn decode(bytes: Vec<u8>, path: &str) -> Result<String, LoadError> {
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text.trim_start_matches('\u{feff}').to_string()),
        Err(err) => {
            // encoding_rs's euc-kr is the web-standard alias covering CP949.
            let bytes = err.into_bytes();
            let (text, _, had_errors) = encoding_rs::EUC_KR.decode(&bytes);
            if had_errors {
                return Err(LoadError::Decode {
                    path: path.to_string(),
                });
            }
            Ok(text.into_owned())
        }
    }
}

// ---------------------------------------------------------------------------
// Text-based parser (private, enables testing without temp files)
// ---------------------------------------------------------------------------

fn parse_table(text: &str, origin: &str) -> Result<LoadedTable, LoadError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::Csv {
            path: origin.to_string(),
            source: e,
        })?
        .iter()
        .map(clean_header)
        .collect();
    reader.set_headers(csv::StringRecord::from(headers.clone()));

    let has = |name: &str| headers.iter().any(|h| h == name);

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !has(c))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns {
            path: origin.to_string(),
            columns: missing,
        });
    }

    let columns = ColumnSet {
        adi: has("ADI"),
        aer: has("AER"),
        er: has("ER"),
        aei: has("AEI"),
        oci: has("OCI"),
    };

    let mut players = Vec::new();
    for result in reader.deserialize::<RawPlayerRow>() {
        match result {
            Ok(raw) => {
                let name = raw.name.trim().to_string();
                if name.is_empty() {
                    warn!("skipping row with empty player name in {}", origin);
                    continue;
                }
                players.push(PlayerRecord {
                    name,
                    team: raw.team.trim().to_string(),
                    adi: parse_metric(raw.ADI.as_deref()),
                    aer: parse_metric(raw.AER.as_deref()),
                    er: parse_metric(raw.ER.as_deref()),
                    aei: parse_metric(raw.AEI.as_deref()),
                    oci: parse_metric(raw.OCI.as_deref()),
                });
            }
            Err(e) => {
                warn!("skipping malformed row in {}: {}", origin, e);
            }
        }
    }

    Ok(LoadedTable { players, columns })
}

// ---------------------------------------------------------------------------
// Public path-based loader
// ---------------------------------------------------------------------------

/// Load and clean one metrics CSV.
pub fn load_table(path: &Path) -> Result<LoadedTable, LoadError> {
    let display = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::FileNotFound {
                path: display.clone(),
            }
        } else {
            LoadError::Io {
                path: display.clone(),
                source: e,
            }
        }
    })?;
    let text = decode(bytes, &display)?;
    parse_table(&text, &display)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "<test>";

    fn parse(text: &str) -> LoadedTable {
        parse_table(text, ORIGIN).unwrap()
    }

    // -- Basic parsing --

    #[test]
    fn parses_full_table_with_oci() {
        let csv_data = "\
선수,팀,ADI,AER,ER,AEI,OCI
김선수,대한항공,0.71,0.32,0.12,0.55,0.61
이선수,현대캐피탈,0.58,0.41,0.18,0.47,0.48";

        let table = parse(csv_data);
        assert_eq!(table.players.len(), 2);
        assert!(table.columns.oci);

        let first = &table.players[0];
        assert_eq!(first.name, "김선수");
        assert_eq!(first.team, "대한항공");
        assert_eq!(first.adi, Some(0.71));
        assert_eq!(first.aer, Some(0.32));
        assert_eq!(first.er, Some(0.12));
        assert_eq!(first.aei, Some(0.55));
        assert_eq!(first.oci, Some(0.61));
    }

    #[test]
    fn oci_column_absent_is_detected() {
        let csv_data = "\
선수,팀,ADI,AER,ER,AEI
김선수,대한항공,0.71,0.32,0.12,0.55";

        let table = parse(csv_data);
        assert!(!table.columns.oci);
        assert_eq!(table.players[0].oci, None);
    }

    // -- Header cleanup --

    #[test]
    fn bom_and_whitespace_stripped_from_headers() {
        let csv_data = "\
\u{feff}선수, 팀 ,ADI,AER,ER,AEI,OCI
김선수,대한항공,0.7,0.3,0.1,0.5,0.6";

        let table = parse(csv_data);
        assert_eq!(table.players.len(), 1);
        assert_eq!(table.players[0].team, "대한항공");
    }

    // -- Required columns --

    #[test]
    fn missing_required_columns_reported_by_name() {
        let csv_data = "\
선수,팀,ADI,AER
김선수,대한항공,0.7,0.3";

        let err = parse_table(csv_data, ORIGIN).unwrap_err();
        match err {
            LoadError::MissingColumns { columns, .. } => {
                assert_eq!(columns, vec!["ER".to_string(), "AEI".to_string()]);
            }
            other => panic!("expected MissingColumns, got {other}"),
        }
    }

    // -- Numeric coercion --

    #[test]
    fn empty_and_non_numeric_cells_become_none() {
        let csv_data = "\
선수,팀,ADI,AER,ER,AEI,OCI
김선수,대한항공,,abc,0.1,0.5,
이선수,현대캐피탈,0.5,0.4,0.2,0.3,0.9";

        let table = parse(csv_data);
        assert_eq!(table.players[0].adi, None);
        assert_eq!(table.players[0].aer, None);
        assert_eq!(table.players[0].er, Some(0.1));
        assert_eq!(table.players[0].oci, None);
        assert_eq!(table.players[1].oci, Some(0.9));
    }

    #[test]
    fn non_finite_cells_become_none() {
        let csv_data = "\
선수,팀,ADI,AER,ER,AEI,OCI
김선수,대한항공,NaN,inf,0.1,0.5,0.6";

        let table = parse(csv_data);
        assert_eq!(table.players[0].adi, None);
        assert_eq!(table.players[0].aer, None);
    }

    // -- String cleanup --

    #[test]
    fn names_and_teams_trimmed() {
        let csv_data = "\
선수,팀,ADI,AER,ER,AEI,OCI
  김선수  , 대한항공 ,0.7,0.3,0.1,0.5,0.6";

        let table = parse(csv_data);
        assert_eq!(table.players[0].name, "김선수");
        assert_eq!(table.players[0].team, "대한항공");
    }

    #[test]
    fn rows_with_empty_name_skipped() {
        let csv_data = "\
선수,팀,ADI,AER,ER,AEI,OCI
,대한항공,0.7,0.3,0.1,0.5,0.6
김선수,대한항공,0.7,0.3,0.1,0.5,0.6";

        let table = parse(csv_data);
        assert_eq!(table.players.len(), 1);
        assert_eq!(table.players[0].name, "김선수");
    }

    // -- Extra columns --

    #[test]
    fn extra_columns_ignored() {
        let csv_data = "\
선수,팀,ADI,AER,ER,AEI,OCI,경기수,세트수
김선수,대한항공,0.7,0.3,0.1,0.5,0.6,24,88";

        let table = parse(csv_data);
        assert_eq!(table.players.len(), 1);
        assert_eq!(table.players[0].oci, Some(0.6));
    }

    // -- Empty table --

    #[test]
    fn header_only_table_yields_no_players() {
        let csv_data = "선수,팀,ADI,AER,ER,AEI,OCI";
        let table = parse(csv_data);
        assert!(table.players.is_empty());
        assert!(table.columns.oci);
    }

    // -- Decoding --

    #[test]
    fn utf8_with_bom_decodes() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("선수,팀,ADI,AER,ER,AEI\n김,대한항공,1,1,0,1\n".as_bytes());
        let text = decode(bytes, ORIGIN).unwrap();
        assert!(text.starts_with("선수"));
    }

    #[test]
    fn cp949_fallback_decodes() {
        let source = "선수,팀,ADI,AER,ER,AEI\n김선수,대한항공,1,1,0,1\n";
        let (encoded, _, had_errors) = encoding_rs::EUC_KR.encode(source);
        assert!(!had_errors);
        // Not valid UTF-8, so the fallback path must kick in.
        assert!(String::from_utf8(encoded.to_vec()).is_err());

        let text = decode(encoded.to_vec(), ORIGIN).unwrap();
        let table = parse(&text);
        assert_eq!(table.players[0].name, "김선수");
        assert_eq!(table.players[0].team, "대한항공");
    }

    #[test]
    fn undecodable_bytes_are_fatal() {
        // Invalid in both UTF-8 and CP949.
        let bytes = vec![0xFF, 0xFE, 0xFF, 0xFF];
        let err = decode(bytes, ORIGIN).unwrap_err();
        match err {
            LoadError::Decode { .. } => {}
            other => panic!("expected Decode, got {other}"),
        }
    }

    // -- File-level errors --

    #[test]
    fn missing_file_reports_file_not_found() {
        let err = load_table(Path::new("no/such/file.csv")).unwrap_err();
        match err {
            LoadError::FileNotFound { path } => assert!(path.contains("file.csv")),
            other => panic!("expected FileNotFound, got {other}"),
        }
    }
}
