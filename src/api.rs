//! Response envelopes for the HTTP boundary.
//!
//! The HTTP server itself lives outside this crate; whatever framework
//! hosts it only has to forward these prepared status/body pairs. The
//! one piece of logic here is the unavailable signal: an empty
//! aggregation is served as an explicit failure envelope rather than an
//! empty success, because at this boundary "nothing came back" almost
//! always means the scrape was blocked, not that no IPOs exist.

use serde::Serialize;

use crate::board::IpoBoard;
use crate::core::models::IpoListing;

/// JSON body shared by every endpoint. Fields that do not apply to a
/// given outcome are omitted from the serialized form entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    fn failure(message: &str) -> Self {
        ApiResponse {
            success: false,
            count: None,
            data: None,
            message: Some(message.to_string()),
        }
    }
}

/// A status code paired with its body, ready for any HTTP framework.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub status: u16,
    pub body: ApiResponse<T>,
}

/// `GET /api/ipo`: the full aggregated listing set, or a 500 failure
/// envelope when the aggregation came back empty.
pub async fn active_listings(board: &IpoBoard) -> Reply<Vec<IpoListing>> {
    let records = board.active().await;
    if records.is_empty() {
        return Reply {
            status: 500,
            body: ApiResponse::failure("No IPOs found or Scraper blocked"),
        };
    }
    Reply {
        status: 200,
        body: ApiResponse {
            success: true,
            count: Some(records.len()),
            data: Some(records),
            message: None,
        },
    }
}

/// `GET /api/ipo/{slug}`: one record, or a 404 failure envelope when no
/// listing carries that slug.
pub async fn listing_by_slug(board: &IpoBoard, slug: &str) -> Reply<IpoListing> {
    match board.by_slug(slug).await {
        Some(record) => Reply {
            status: 200,
            body: ApiResponse {
                success: true,
                count: None,
                data: Some(record),
                message: None,
            },
        },
        None => Reply {
            status: 404,
            body: ApiResponse::failure("IPO Not Found"),
        },
    }
}
