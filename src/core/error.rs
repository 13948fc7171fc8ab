use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Most of the pipeline recovers from these locally (a failed grey-market
/// fetch becomes an empty premium map, a failed detail fetch becomes a
/// defaulted [`ListingDetails`](crate::ListingDetails)); only the calendar
/// fetch escalates, and even that collapses to an empty listing set at the
/// cached entry points.
#[derive(Debug, Error)]
pub enum IpoError {
    /// An error occurred during an HTTP request (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided or derived URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The fetched markup did not have the structure the scraper relies on
    /// (e.g. the calendar page carried no tables at all).
    #[error("Markup structure unexpected: {0}")]
    Structure(String),
}
