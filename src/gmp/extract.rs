//! Premium map extraction from the grey-market page.
//!
//! That page is the least stable of the sources: columns get reordered
//! between visits and a look-alike "kostak" column sits next to the real
//! premium. Roles are therefore resolved from the first header row on
//! every scrape, falling back to the historical positions when no header
//! cell qualifies.

use std::collections::HashMap;

use crate::core::models::GmpQuote;
use crate::ident;
use crate::table::{self, ColumnSpec, Row};

const NAME_COL: ColumnSpec = ColumnSpec {
    keywords: &["stock", "ipo name"],
    exclude: &[],
};
const PREMIUM_COL: ColumnSpec = ColumnSpec {
    keywords: &["gmp"],
    exclude: &["kostak"],
};
const GAIN_COL: ColumnSpec = ColumnSpec {
    keywords: &["gain", "listing"],
    exclude: &[],
};

// Column positions observed on the live page, used when the header
// scan resolves nothing.
const FALLBACK_NAME_IDX: usize = 0;
const FALLBACK_PREMIUM_IDX: usize = 1;
const FALLBACK_GAIN_IDX: usize = 3;

/// Raw premium texts for one grey-market row, keyed by match key in
/// [`premium_map`]. Transient; rebuilt on every scrape cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GmpObservation {
    pub(crate) amount_text: String,
    pub(crate) percent_text: String,
}

/// Build the match-key to observation map from the whole page.
///
/// Rows of every table are scanned as one flat list; only the very
/// first row acts as the header. A recurring name overwrites its
/// earlier entry, which is the wanted refresh semantics, not a bug.
pub(crate) fn premium_map(markup: &str) -> HashMap<String, GmpObservation> {
    let tables = table::parse_tables(markup);
    let rows: Vec<&Row> = tables.iter().flat_map(|t| t.rows()).collect();

    let mut map = HashMap::new();
    let Some((header, body)) = rows.split_first() else {
        return map;
    };
    let name_idx = table::resolve_column(header, &NAME_COL).unwrap_or(FALLBACK_NAME_IDX);
    let premium_idx = table::resolve_column(header, &PREMIUM_COL).unwrap_or(FALLBACK_PREMIUM_IDX);
    let gain_idx = table::resolve_column(header, &GAIN_COL).unwrap_or(FALLBACK_GAIN_IDX);

    for row in body {
        if row.len() <= premium_idx.max(gain_idx) {
            continue;
        }
        map.insert(
            ident::match_key(row.text(name_idx)),
            GmpObservation {
                amount_text: row.text(premium_idx).to_string(),
                percent_text: row.text(gain_idx).to_string(),
            },
        );
    }
    map
}

/// Shape a looked-up observation into the quote a record carries.
///
/// No observation means the zero quote. An amount that is blank or
/// contains a hyphen is the source's "withheld" marker and suppresses
/// the whole quote back to zero, whatever the gain column says. With a
/// clean amount, a blank or hyphenated gain is zeroed on its own.
pub(crate) fn resolve_premium(hit: Option<&GmpObservation>) -> GmpQuote {
    let Some(obs) = hit else {
        return GmpQuote::default();
    };
    if obs.amount_text.is_empty() || obs.amount_text.contains('-') {
        return GmpQuote::default();
    }
    let mut quote = GmpQuote {
        amount_text: obs.amount_text.clone(),
        ..GmpQuote::default()
    };
    if !obs.percent_text.is_empty() && !obs.percent_text.contains('-') {
        quote.percent_text = obs.percent_text.clone();
    }
    quote
}
