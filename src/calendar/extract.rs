//! Row extraction from the IPO calendar page.
//!
//! The calendar is the only source with fixed column positions: name,
//! status, subscription window, price band at cells 0 through 3. Table
//! position determines the board, first table Mainboard, second SME.
//! Content is never inspected to classify a row.

use crate::core::models::{Board, TBA};
use crate::core::IpoError;
use crate::table::{self, Table};

/// Cells a calendar row must have to qualify.
const MIN_CELLS: usize = 4;

/// One qualifying calendar row, field texts still raw apart from the
/// date separator. Never exposed outside the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CalendarEntry {
    /// Name exactly as printed, suffix and all. Never empty.
    pub(crate) raw_name: String,
    pub(crate) status: String,
    /// Normalized via [`normalize_date_range`]; "TBA" when blank.
    pub(crate) date_range: String,
    /// "TBA" when blank.
    pub(crate) price_range: String,
    pub(crate) board: Board,
    /// Href of the first anchor in the name cell, as printed (possibly
    /// relative).
    pub(crate) detail_link: Option<String>,
}

/// Extract the qualifying rows of both board tables, Mainboard rows
/// first, each group in source order. A page with tables but no
/// qualifying rows is a valid empty calendar; a page without a single
/// table is not a calendar at all (consent wall, outage page) and is
/// reported as a structural error.
pub(crate) fn entries(markup: &str) -> Result<Vec<CalendarEntry>, IpoError> {
    let tables = table::parse_tables(markup);
    if tables.is_empty() {
        return Err(IpoError::Structure(
            "calendar page contains no tables".to_string(),
        ));
    }
    let mut out = Vec::new();
    collect_board(tables.first(), Board::Mainboard, &mut out);
    collect_board(tables.get(1), Board::Sme, &mut out);
    Ok(out)
}

fn collect_board(table: Option<&Table>, board: Board, out: &mut Vec<CalendarEntry>) {
    let Some(table) = table else { return };
    for row in table.body() {
        if row.len() < MIN_CELLS {
            continue;
        }
        let raw_name = row.text(0);
        if raw_name.is_empty() {
            continue;
        }
        let price = row.text(3);
        out.push(CalendarEntry {
            raw_name: raw_name.to_string(),
            status: row.text(1).to_string(),
            date_range: normalize_date_range(row.text(2)),
            price_range: if price.is_empty() {
                TBA.to_string()
            } else {
                price.to_string()
            },
            board,
            detail_link: row.link(0).map(str::to_string),
        });
    }
}

/// Normalize a subscription window to the `" - "` separator the
/// dashboard expects. Handles `" to "`, an en dash (spaced or not), and
/// a bare hyphen; blank input becomes "TBA".
pub(crate) fn normalize_date_range(raw: &str) -> String {
    if raw.is_empty() {
        return TBA.to_string();
    }
    let mut date = raw
        .replacen(" to ", " - ", 1)
        .replacen(" \u{2013} ", " - ", 1)
        .replacen('\u{2013}', " - ", 1);
    if !date.contains(" - ") && date.contains('-') {
        date = date.replacen('-', " - ", 1);
    }
    date
}
