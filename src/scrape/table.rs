// HTML stats-table extraction.
//
// The column schema is whatever the page's table markup says it is; nothing
// here interprets the cells.

use scraper::{Html, Selector};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no <table> element found in page")]
    TableNotFound,

    #[error("stats table has no header row")]
    HeaderRowMissing,
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// A raw scraped table: one header row plus data rows, cell text only.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Collapse a cell's text nodes into one whitespace-normalized string.
fn cell_text(element: scraper::ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract the first `<table>` of the document.
///
/// Headers come from `thead th`; when the page omits a `thead`, the first
/// body row is promoted to the header. (The HTML parser inserts an
/// implicit `tbody` itself, so `tbody tr` matches bare `<tr>` markup too.)
pub fn parse_stats_table(html: &str) -> Result<StatsTable, ParseError> {
    let table_sel = Selector::parse("table").unwrap();
    let thead_th_sel = Selector::parse("thead th").unwrap();
    let tbody_tr_sel = Selector::parse("tbody tr").unwrap();
    let cell_sel = Selector::parse("th, td").unwrap();

    let document = Html::parse_document(html);
    let table = document
        .select(&table_sel)
        .next()
        .ok_or(ParseError::TableNotFound)?;

    let mut rows: Vec<Vec<String>> = table
        .select(&tbody_tr_sel)
        .map(|tr| tr.select(&cell_sel).map(cell_text).collect())
        .collect();

    let from_thead: Vec<String> = table.select(&thead_th_sel).map(cell_text).collect();
    let headers = if !from_thead.is_empty() {
        from_thead
    } else if !rows.is_empty() {
        rows.remove(0)
    } else {
        return Err(ParseError::HeaderRowMissing);
    };

    if headers.iter().all(|h| h.is_empty()) {
        return Err(ParseError::HeaderRowMissing);
    }

    Ok(StatsTable { headers, rows })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
