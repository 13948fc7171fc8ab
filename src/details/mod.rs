//! Per-listing detail pages.
//!
//! Detail enrichment is strictly best-effort: a row without a link, a
//! dead link, or unparseable markup all produce the defaulted field set
//! and never disturb the rest of the aggregation.

mod extract;

pub(crate) use extract::details;

use tracing::debug;

use crate::core::models::ListingDetails;
use crate::core::net;
use crate::core::IpoClient;

/// Fetch and extract one listing's detail page. `link` is the href as
/// captured from the calendar, resolved against the calendar URL when
/// relative. Always returns a value.
pub(crate) async fn fetch_for(client: &IpoClient, link: Option<&str>) -> ListingDetails {
    let Some(link) = link else {
        return ListingDetails::default();
    };
    let url = match client.calendar_url().join(link) {
        Ok(url) => url,
        Err(err) => {
            debug!(error = %err, link, "unusable detail link, using defaults");
            return ListingDetails::default();
        }
    };
    match net::fetch_html(client.http(), &url).await {
        Ok(markup) => details(&markup),
        Err(err) => {
            debug!(error = %err, %url, "detail page fetch failed, using defaults");
            ListingDetails::default()
        }
    }
}
