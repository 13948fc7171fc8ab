//! Field extraction from a single listing's detail page.
//!
//! Three independent passes over the same document: a key-value scan of
//! every table row, financial-table detection with dynamic columns, and
//! an "about" section walk. Each pass fills what it can; whatever no
//! pass touched keeps its default. The entry point is total and never
//! returns an error.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::core::models::{FinancialPeriod, ListingDetails};
use crate::table::{self, ColumnSpec, Row, Table};

static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h2, h3, h4").unwrap());

/// Sentinel for gaps in the financial table, rendered as-is. Distinct
/// from the "TBA" used for scalar fields.
const NOT_AVAILABLE: &str = "N/A";

const PERIOD_COL: ColumnSpec = ColumnSpec {
    keywords: &["period"],
    exclude: &[],
};
const REVENUE_COL: ColumnSpec = ColumnSpec {
    keywords: &["revenue"],
    exclude: &[],
};
const EXPENSE_COL: ColumnSpec = ColumnSpec {
    keywords: &["expense"],
    exclude: &[],
};
const PAT_COL: ColumnSpec = ColumnSpec {
    keywords: &["pat"],
    exclude: &[],
};
const ASSETS_COL: ColumnSpec = ColumnSpec {
    keywords: &["asset"],
    exclude: &[],
};

/// Extract everything the detail page offers. Markup with none of the
/// expected structure yields the all-default value.
pub(crate) fn details(markup: &str) -> ListingDetails {
    let doc = Html::parse_document(markup);
    let tables = table::tables_in(&doc);

    let mut details = ListingDetails::default();
    scan_key_values(&tables, &mut details);
    details.financials = financial_history(&tables);
    details.about = about_section(&doc);
    details
}

/// Pass 1: every table row with at least two cells is read as
/// `{label, value}`. The first keyword the label qualifies for decides
/// the field; one label never fills two fields. Scalars only take
/// non-blank values, so a later row can fill what an earlier blank one
/// could not. Prospectus fields take the href of the value cell's
/// anchor, blank when there is none.
fn scan_key_values(tables: &[Table], details: &mut ListingDetails) {
    for row in tables.iter().flat_map(Table::rows) {
        if row.len() < 2 {
            continue;
        }
        let label = row.text(0).to_lowercase();
        let value = row.text(1);

        if label.contains("open date") {
            assign(&mut details.open_date, value);
        } else if label.contains("close date") {
            assign(&mut details.close_date, value);
        } else if label.contains("face value") {
            assign(&mut details.face_value, value);
        } else if label.contains("price band") {
            assign(&mut details.price_band, value);
        } else if label.contains("fresh issue") {
            assign(&mut details.fresh_issue, value);
        } else if label.contains("issue size") && !label.contains("lot") {
            assign(&mut details.issue_size, value);
        } else if label.contains("issue type") {
            assign(&mut details.issue_type, value);
        } else if label.contains("drhp") {
            details.drhp_link = row.link(1).unwrap_or_default().to_string();
        } else if label.contains("rhp") {
            details.rhp_link = row.link(1).unwrap_or_default().to_string();
        } else if label.contains("listing") {
            assign(&mut details.listing_at, value);
        }
    }
}

fn assign(field: &mut String, value: &str) {
    if !value.is_empty() {
        *field = value.to_string();
    }
}

/// Pass 2: a table is the financial report only when its header
/// mentions "period", "revenue" and "expense" together; anything less
/// is some unrelated table. Every qualifying table contributes rows,
/// columns resolved per table.
fn financial_history(tables: &[Table]) -> Vec<FinancialPeriod> {
    let mut out = Vec::new();
    for table in table::find_tables(tables, is_financial_header) {
        let Some(header) = table.header() else {
            continue;
        };
        let period = table::resolve_column(header, &PERIOD_COL);
        let revenue = table::resolve_column(header, &REVENUE_COL);
        let expense = table::resolve_column(header, &EXPENSE_COL);
        let pat = table::resolve_column(header, &PAT_COL);
        let assets = table::resolve_column(header, &ASSETS_COL);

        for row in table.body() {
            if row.len() == 0 {
                continue;
            }
            out.push(FinancialPeriod {
                period_ended: cell_or_na(row, period),
                revenue: cell_or_na(row, revenue),
                expense: cell_or_na(row, expense),
                pat: cell_or_na(row, pat),
                assets: cell_or_na(row, assets),
            });
        }
    }
    out
}

fn is_financial_header(header: &Row) -> bool {
    let text = header.combined_text().to_lowercase();
    text.contains("period") && text.contains("revenue") && text.contains("expense")
}

fn cell_or_na(row: &Row, idx: Option<usize>) -> String {
    let text = idx.map_or("", |i| row.text(i));
    if text.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        text.to_string()
    }
}

/// Pass 3: find the first h2/h3/h4 whose text mentions "about", then
/// gather the run of `<p>` siblings that immediately follows it,
/// stopping at the first other element. Interleaved text nodes (source
/// indentation) are stepped over.
fn about_section(doc: &Html) -> String {
    for heading in doc.select(&HEADING) {
        let text: String = heading.text().collect();
        if !text.to_lowercase().contains("about") {
            continue;
        }
        let mut paragraphs: Vec<String> = Vec::new();
        for sibling in heading.next_siblings() {
            let Some(el) = ElementRef::wrap(sibling) else {
                continue;
            };
            if el.value().name() != "p" {
                break;
            }
            let raw: String = el.text().collect();
            let words: Vec<&str> = raw.split_whitespace().collect();
            if !words.is_empty() {
                paragraphs.push(words.join(" "));
            }
        }
        return paragraphs.join("\n\n").trim().to_string();
    }
    String::new()
}
