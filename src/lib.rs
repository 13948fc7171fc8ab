//! ipowatch-rs: aggregated Indian IPO listings from public sources.
//!
//! Scrapes the upcoming-IPO calendar and the grey-market premium table,
//! joins them by normalized name, enriches every row from its detail
//! page, and memoizes the assembled result behind a TTL cache.

pub mod api;
pub mod board;
pub mod core;

mod calendar;
mod details;
mod gmp;
mod ident;
mod table;

pub use board::IpoBoard;
pub use core::{
    Board, CacheTag, FinancialPeriod, GmpQuote, IpoClient, IpoClientBuilder, IpoError, IpoListing,
    ListingDetails, ListingStatus, Trend,
};
