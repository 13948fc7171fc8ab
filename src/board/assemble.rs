//! The merge orchestrator: one aggregation cycle over live pages.
//!
//! Calendar and grey-market fetches start together; once both are in,
//! every qualifying calendar row is joined with its premium and sent
//! through a bounded, order-preserving detail fan-out. Record
//! construction happens here and nowhere else.

use futures::stream::{self, StreamExt};
use tracing::{info, instrument, warn};

use crate::calendar::{self, CalendarEntry};
use crate::core::models::{GmpQuote, IpoListing, ListingStatus};
use crate::core::{IpoClient, IpoError};
use crate::details;
use crate::gmp;
use crate::ident;

/// Run one full aggregation. The calendar is the backbone: if it cannot
/// be fetched the cycle yields an empty set, never a partial one.
/// Everything else degrades per row or per source.
#[instrument(skip(client))]
pub(crate) async fn active_listings(client: &IpoClient) -> Vec<IpoListing> {
    match aggregate(client).await {
        Ok(records) => records,
        Err(err) => {
            warn!(error = %err, "aggregation failed, serving empty listing set");
            Vec::new()
        }
    }
}

async fn aggregate(client: &IpoClient) -> Result<Vec<IpoListing>, IpoError> {
    let (entries, premiums) = tokio::join!(
        calendar::fetch_entries(client),
        gmp::fetch_premium_map(client),
    );
    let entries = entries?;

    let mut tasks = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = ident::display_name(&entry.raw_name);
        let Some(initial) = ident::initial(&name) else {
            continue;
        };
        let premium = gmp::resolve_premium(premiums.get(&ident::match_key(&entry.raw_name)));
        tasks.push(build_record(client, entry, name, initial, premium));
    }

    let records: Vec<IpoListing> = stream::iter(tasks)
        .buffered(client.detail_concurrency())
        .collect()
        .await;
    info!(records = records.len(), "aggregation cycle complete");
    Ok(records)
}

/// Join one calendar row with its premium and detail page into the
/// final record. Total: detail failures surface as defaulted fields.
async fn build_record(
    client: &IpoClient,
    entry: CalendarEntry,
    name: String,
    initial: char,
    premium: GmpQuote,
) -> IpoListing {
    let detail = details::fetch_for(client, entry.detail_link.as_deref()).await;
    let slug = ident::slugify(&name);
    IpoListing {
        initial,
        status: ListingStatus::from_source(&entry.status),
        board: entry.board,
        price_range: entry.price_range,
        issue_size: detail.issue_size,
        date_range: entry.date_range,
        premium,
        slug,
        name,
        open_date: detail.open_date,
        close_date: detail.close_date,
        face_value: detail.face_value,
        price_band: detail.price_band,
        fresh_issue: detail.fresh_issue,
        issue_type: detail.issue_type,
        listing_at: detail.listing_at,
        drhp_link: detail.drhp_link,
        rhp_link: detail.rhp_link,
        financials: detail.financials,
        about: detail.about,
    }
}
