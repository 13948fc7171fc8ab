//! The upcoming-IPO calendar page, the pipeline's primary source.

mod extract;

pub(crate) use extract::{CalendarEntry, entries};

use crate::core::net;
use crate::core::{IpoClient, IpoError};

/// Fetch the calendar page and extract its qualifying rows. Fetch and
/// structural failures both propagate; the orchestrator decides how
/// the pipeline degrades.
pub(crate) async fn fetch_entries(client: &IpoClient) -> Result<Vec<CalendarEntry>, IpoError> {
    let markup = net::fetch_html(client.http(), client.calendar_url()).await?;
    entries(&markup)
}
