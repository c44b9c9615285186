// CSV export of the currently filtered view.
//
// Output is UTF-8 with a BOM (spreadsheet tools use it to pick the right
// decoder) and carries the same column set as the input files, so an
// exported view loads back through the metrics loader unchanged.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::metrics::{League, PlayerRecord};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error writing {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

const BOM: &[u8] = b"\xEF\xBB\xBF";

const EXPORT_COLUMNS: [&str; 7] = ["선수", "팀", "ADI", "AER", "ER", "AEI", "OCI"];

/// Absent cells export as empty strings; present values use the shortest
/// round-trip representation.
fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// Write `rows` to `<dir>/<league>_OCI_scouting_filtered.csv` and return
/// the written path.
pub fn export_view(
    dir: &Path,
    league: League,
    rows: &[PlayerRecord],
) -> Result<PathBuf, ExportError> {
    let path = dir.join(format!("{}_OCI_scouting_filtered.csv", league.label()));
    let display = path.display().to_string();

    let io_err = |source: std::io::Error, display: &str| ExportError::Io {
        path: display.to_string(),
        source,
    };

    let mut file = std::fs::File::create(&path).map_err(|e| io_err(e, &display))?;
    file.write_all(BOM).map_err(|e| io_err(e, &display))?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(EXPORT_COLUMNS)
        .map_err(|e| ExportError::Csv {
            path: display.clone(),
            source: e,
        })?;

    for row in rows {
        writer
            .write_record([
                row.name.clone(),
                row.team.clone(),
                format_cell(row.adi),
                format_cell(row.aer),
                format_cell(row.er),
                format_cell(row.aei),
                format_cell(row.oci),
            ])
            .map_err(|e| ExportError::Csv {
                path: display.clone(),
                source: e,
            })?;
    }

    writer.flush().map_err(|e| io_err(e, &display))?;

    Ok(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
