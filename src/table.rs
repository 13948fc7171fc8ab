//! Typed view over loosely-structured HTML tables.
//!
//! Source pages offer no schema: column order drifts, header labels get
//! renamed, rows gain or lose cells. Everything downstream therefore
//! works on [`Table`]/[`Row`] values (ordered cell texts plus captured
//! links) and resolves column positions through [`resolve_column`], a
//! pure keyword scan that can be tested without any HTML at all.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td, th").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// One table cell: whitespace-collapsed text plus the href of the first
/// anchor inside the cell, if any.
#[derive(Debug, Clone, Default)]
pub(crate) struct Cell {
    pub(crate) text: String,
    pub(crate) link: Option<String>,
}

/// An ordered list of cells. Out-of-range access yields empty values
/// rather than panicking; malformed rows are the norm, not the
/// exception.
#[derive(Debug, Clone, Default)]
pub(crate) struct Row {
    cells: Vec<Cell>,
}

impl Row {
    #[cfg(test)]
    pub(crate) fn from_texts(texts: &[&str]) -> Self {
        Row {
            cells: texts
                .iter()
                .map(|t| Cell {
                    text: (*t).to_string(),
                    link: None,
                })
                .collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Cell text at `idx`, or `""` when the row is too short.
    pub(crate) fn text(&self, idx: usize) -> &str {
        self.cells.get(idx).map_or("", |c| c.text.as_str())
    }

    /// First anchor href inside the cell at `idx`.
    pub(crate) fn link(&self, idx: usize) -> Option<&str> {
        self.cells.get(idx)?.link.as_deref()
    }

    /// All cell texts joined with single spaces, for whole-row keyword
    /// checks.
    pub(crate) fn combined_text(&self) -> String {
        let texts: Vec<&str> = self.cells.iter().map(|c| c.text.as_str()).collect();
        texts.join(" ")
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Every `<tr>` of the table in document order, header included.
    pub(crate) fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub(crate) fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Rows after the header, i.e. the data rows.
    pub(crate) fn body(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

/// Parse every `<table>` in `markup`, in document order. Markup that
/// contains no tables yields an empty list, never an error; the HTML
/// parser itself accepts arbitrary tag soup.
pub(crate) fn parse_tables(markup: &str) -> Vec<Table> {
    tables_in(&Html::parse_document(markup))
}

/// Same as [`parse_tables`] for a document the caller already parsed.
pub(crate) fn tables_in(doc: &Html) -> Vec<Table> {
    doc.select(&TABLE)
        .map(|table| Table {
            rows: table
                .select(&TR)
                .map(|tr| Row {
                    cells: tr.select(&CELL).map(cell_from).collect(),
                })
                .collect(),
        })
        .collect()
}

/// The tables whose header row satisfies `predicate`.
pub(crate) fn find_tables<'a, P>(tables: &'a [Table], predicate: P) -> impl Iterator<Item = &'a Table>
where
    P: Fn(&Row) -> bool + 'a,
{
    tables
        .iter()
        .filter(move |table| table.header().is_some_and(&predicate))
}

fn cell_from(cell: ElementRef<'_>) -> Cell {
    Cell {
        text: collapse_text(cell),
        link: cell
            .select(&ANCHOR)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string),
    }
}

/// Text content with every whitespace run collapsed to a single space.
fn collapse_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    let words: Vec<&str> = raw.split_whitespace().collect();
    words.join(" ")
}

/// One wanted column role for [`resolve_column`]: matched when any
/// keyword is a case-insensitive substring of a header cell, unless a
/// veto keyword also occurs in that same cell.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnSpec {
    pub(crate) keywords: &'static [&'static str],
    pub(crate) exclude: &'static [&'static str],
}

/// Index of the first header cell matching `spec`, scanning left to
/// right. Pure: callers decide what an unresolved role falls back to.
pub(crate) fn resolve_column(header: &Row, spec: &ColumnSpec) -> Option<usize> {
    (0..header.len()).find(|&i| {
        let text = header.text(i).to_lowercase();
        spec.keywords.iter().any(|k| text.contains(k))
            && !spec.exclude.iter().any(|k| text.contains(k))
    })
}
