//! Shared data models used across the scrape pipeline and the endpoint
//! envelope. Everything here is source-text faithful: scraped values stay
//! strings, sentinels ("TBA", "N/A", empty link) keep their distinct
//! meanings, and serialization reproduces the wire names the dashboard
//! consumes.

use std::fmt;

use serde::{Serialize, Serializer};

/// Sentinel for "not yet announced / unknown". Distinct from an empty
/// string (no document) and from "N/A" (financial table gaps).
pub(crate) const TBA: &str = "TBA";

/// Which source table a listing came from. Table position on the calendar
/// page is the only thing that determines this; row content is never
/// inspected for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Board {
    /// First calendar table: regular mainboard listings.
    Mainboard,
    /// Second calendar table: small/medium enterprise listings.
    #[serde(rename = "SME")]
    Sme,
}

impl Board {
    /// The label the dashboard renders for this board.
    pub const fn as_str(self) -> &'static str {
        match self {
            Board::Mainboard => "Mainboard",
            Board::Sme => "SME",
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subscription status as printed by the calendar page.
///
/// The three well-known values get variants; anything else the source
/// prints is preserved verbatim in [`ListingStatus::Other`] so that
/// serialization always reproduces the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingStatus {
    Open,
    Closed,
    Upcoming,
    /// Free text from the source that is none of the known statuses.
    Other(String),
}

impl ListingStatus {
    /// Maps the exact source strings, keeping unknown text verbatim.
    pub(crate) fn from_source(raw: &str) -> Self {
        match raw.trim() {
            "Open" => ListingStatus::Open,
            "Closed" => ListingStatus::Closed,
            "Upcoming" => ListingStatus::Upcoming,
            other => ListingStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ListingStatus::Open => "Open",
            ListingStatus::Closed => "Closed",
            ListingStatus::Upcoming => "Upcoming",
            ListingStatus::Other(text) => text,
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ListingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Direction of a grey-market premium, derived from the sign of the
/// parsed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// A single grey-market premium observation.
///
/// Both fields are raw source text (currency marks and percent signs
/// included). Records always carry one of these; unmatched or suppressed
/// observations fall back to the zero default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GmpQuote {
    /// Raw premium amount, e.g. `"₹50"`.
    pub amount_text: String,
    /// Raw expected listing gain, e.g. `"45%"`.
    pub percent_text: String,
}

impl Default for GmpQuote {
    /// The zero observation used when a listing has no usable premium.
    fn default() -> Self {
        GmpQuote {
            amount_text: "₹0".to_string(),
            percent_text: "0%".to_string(),
        }
    }
}

impl GmpQuote {
    /// Numeric value of the premium amount; `0.0` when unparseable.
    pub fn amount_value(&self) -> f64 {
        numeric_part(&self.amount_text)
    }

    /// Numeric value of the expected gain percentage; `0.0` when
    /// unparseable.
    pub fn percent_value(&self) -> f64 {
        numeric_part(&self.percent_text)
    }

    /// Classifies the premium by the sign of its amount.
    pub fn trend(&self) -> Trend {
        let value = self.amount_value();
        if value > 0.0 {
            Trend::Up
        } else if value < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

/// Keeps digits, dot, and minus, then parses; anything else is `0.0`.
fn numeric_part(text: &str) -> f64 {
    let filtered: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    filtered.parse().unwrap_or(0.0)
}

/// One row of the financial history table on a detail page.
///
/// Gaps use the `"N/A"` sentinel (never "TBA"); the dashboard renders
/// these cells as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialPeriod {
    pub period_ended: String,
    pub revenue: String,
    pub expense: String,
    /// Profit after tax.
    pub pat: String,
    pub assets: String,
}

/// Extended fields extracted from a listing's detail page.
///
/// Always total: a failed fetch or parse yields the default (all scalars
/// "TBA", empty links, empty financial list, empty about) rather than an
/// error. Empty link strings mean "no document"; "TBA" means "not yet
/// known".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetails {
    pub open_date: String,
    pub close_date: String,
    pub face_value: String,
    pub price_band: String,
    pub issue_size: String,
    pub fresh_issue: String,
    pub issue_type: String,
    /// Exchange(s) the listing will trade on.
    pub listing_at: String,
    /// Href of the DRHP (draft red herring prospectus) download link.
    pub drhp_link: String,
    /// Href of the RHP (red herring prospectus) download link.
    pub rhp_link: String,
    pub financials: Vec<FinancialPeriod>,
    /// Free-text company description from the "About" section.
    pub about: String,
}

impl Default for ListingDetails {
    fn default() -> Self {
        ListingDetails {
            open_date: TBA.to_string(),
            close_date: TBA.to_string(),
            face_value: TBA.to_string(),
            price_band: TBA.to_string(),
            issue_size: TBA.to_string(),
            fresh_issue: TBA.to_string(),
            issue_type: TBA.to_string(),
            listing_at: TBA.to_string(),
            drhp_link: String::new(),
            rhp_link: String::new(),
            financials: Vec::new(),
            about: String::new(),
        }
    }
}

/// One aggregated IPO listing: a calendar row joined with its grey-market
/// premium and the fields of its detail page.
///
/// Constructed exclusively by the merge orchestrator and never mutated
/// afterwards. `name` is never empty — nameless calendar rows are dropped
/// before a record is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpoListing {
    /// Display name with the trailing " IPO" suffix stripped.
    pub name: String,
    /// First letter of `name`, for avatar display.
    pub initial: char,
    pub status: ListingStatus,
    #[serde(rename = "type")]
    pub board: Board,
    /// Free text; "TBA" when the calendar left it blank.
    pub price_range: String,
    /// Free text from the detail page; "TBA" when unknown.
    pub issue_size: String,
    /// Subscription window with the separator normalized to `" - "`.
    pub date_range: String,
    pub premium: GmpQuote,
    /// Deterministic URL identifier derived from `name`.
    pub slug: String,
    pub open_date: String,
    pub close_date: String,
    pub face_value: String,
    pub price_band: String,
    pub fresh_issue: String,
    pub issue_type: String,
    pub listing_at: String,
    pub drhp_link: String,
    pub rhp_link: String,
    pub financials: Vec<FinancialPeriod>,
    pub about: String,
}
