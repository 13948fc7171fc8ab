//! Shared plumbing: client + builder, error type, page fetching,
//! memoization, and the data model every pipeline stage speaks.

pub mod client;

mod cache;
mod error;
pub(crate) mod models;
pub(crate) mod net;

pub use cache::CacheTag;
pub use client::{IpoClient, IpoClientBuilder};
pub use error::IpoError;
pub use models::{
    Board, FinancialPeriod, GmpQuote, IpoListing, ListingDetails, ListingStatus, Trend,
};
