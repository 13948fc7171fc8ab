//! Public aggregation surface.

mod assemble;

use crate::core::models::{Board, IpoListing, ListingStatus};
use crate::core::IpoClient;

const ACTIVE_KEY: &str = "active-listings";

/// High-level handle over the aggregated IPO board.
///
/// Every accessor serves from the client's memo store and only hits the
/// live pages on a cache miss.
#[derive(Debug, Clone)]
pub struct IpoBoard {
    client: IpoClient,
}

impl IpoBoard {
    pub fn new(client: &IpoClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// The full aggregated listing set, Mainboard rows before SME rows,
    /// each group in source order. Empty means "source unavailable" as
    /// much as "no listings"; the distinction is made at the endpoint
    /// boundary, not here.
    pub async fn active(&self) -> Vec<IpoListing> {
        self.client
            .memo()
            .active()
            .get_or_else(ACTIVE_KEY, self.client.cache_ttl(), || {
                assemble::active_listings(&self.client)
            })
            .await
    }

    /// Mainboard rows of [`IpoBoard::active`].
    pub async fn mainboard(&self) -> Vec<IpoListing> {
        let mut rows = self.active().await;
        rows.retain(|r| r.board == Board::Mainboard);
        rows
    }

    /// SME rows of [`IpoBoard::active`].
    pub async fn sme(&self) -> Vec<IpoListing> {
        let mut rows = self.active().await;
        rows.retain(|r| r.board == Board::Sme);
        rows
    }

    /// Rows whose subscription window has not opened yet.
    pub async fn upcoming(&self) -> Vec<IpoListing> {
        let mut rows = self.active().await;
        rows.retain(|r| r.status == ListingStatus::Upcoming);
        rows
    }

    /// Look up one record by slug. Each slug gets its own cache entry;
    /// a miss runs a fresh full aggregation and filters it, so the
    /// record always matches what the list view would have shown for
    /// the same cache window. When two names collide on a slug the
    /// first record in board order wins.
    pub async fn by_slug(&self, slug: &str) -> Option<IpoListing> {
        self.client
            .memo()
            .lookup()
            .get_or_else(slug, self.client.cache_ttl(), || async {
                assemble::active_listings(&self.client)
                    .await
                    .into_iter()
                    .find(|record| record.slug == slug)
            })
            .await
    }
}
