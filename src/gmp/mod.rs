//! The grey-market premium page, the pipeline's secondary source.
//!
//! Premiums are enrichment, not substance: when this page cannot be
//! fetched the aggregation proceeds with every quote at its zero
//! default instead of failing.

mod extract;

pub(crate) use extract::{GmpObservation, premium_map, resolve_premium};

use std::collections::HashMap;

use tracing::warn;

use crate::core::net;
use crate::core::IpoClient;

/// Fetch the grey-market page and build the match-key map. Failure is
/// absorbed here as an empty map.
pub(crate) async fn fetch_premium_map(client: &IpoClient) -> HashMap<String, GmpObservation> {
    match net::fetch_html(client.http(), client.gmp_url()).await {
        Ok(markup) => premium_map(&markup),
        Err(err) => {
            warn!(error = %err, "grey-market premium scrape failed, serving zero premiums");
            HashMap::new()
        }
    }
}
