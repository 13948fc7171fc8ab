use httpmock::MockServer;
use ipowatch_rs::{IpoBoard, api};

use crate::common;

#[tokio::test]
async fn listing_endpoint_wraps_a_populated_board() {
    let server = MockServer::start();
    let _calendar = common::mock_calendar(&server, "calendar_board.html");
    let _gmp = common::mock_gmp(&server, "gmp_board.html");
    let _acme_detail = common::mock_detail(&server, "/ipo/acme-corp/", "detail_acme.html");
    let _beta_detail = common::mock_outage(&server, "/ipo/beta-industries/");

    let board = IpoBoard::new(&common::client_for(&server));
    let reply = api::active_listings(&board).await;

    assert_eq!(reply.status, 200);
    assert!(reply.body.success);
    assert_eq!(reply.body.count, Some(3));
    assert!(reply.body.message.is_none());

    // Wire shape: renamed keys and camelCase nesting.
    let json = serde_json::to_value(&reply.body).unwrap();
    assert_eq!(json["count"], 3);
    assert_eq!(json["data"][0]["name"], "Acme Corp");
    assert_eq!(json["data"][0]["type"], "Mainboard");
    assert_eq!(json["data"][0]["status"], "Open");
    assert_eq!(json["data"][0]["premium"]["amountText"], "₹50");
    assert_eq!(json["data"][0]["priceRange"], "₹100-₹110");
    assert_eq!(json["data"][2]["type"], "SME");
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn listing_endpoint_reports_an_empty_board_as_unavailable() {
    let server = MockServer::start();
    let _calendar = common::mock_outage(&server, common::CALENDAR_PATH);
    let _gmp = common::mock_gmp(&server, "gmp_board.html");

    let board = IpoBoard::new(&common::client_for(&server));
    let reply = api::active_listings(&board).await;

    assert_eq!(reply.status, 500);
    assert!(!reply.body.success);
    assert_eq!(
        reply.body.message.as_deref(),
        Some("No IPOs found or Scraper blocked")
    );

    let json = serde_json::to_value(&reply.body).unwrap();
    assert!(json.get("count").is_none());
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn slug_endpoint_returns_the_record() {
    let server = MockServer::start();
    let _calendar = common::mock_calendar(&server, "calendar_board.html");
    let _gmp = common::mock_gmp(&server, "gmp_board.html");
    let _acme_detail = common::mock_detail(&server, "/ipo/acme-corp/", "detail_acme.html");
    let _beta_detail = common::mock_outage(&server, "/ipo/beta-industries/");

    let board = IpoBoard::new(&common::client_for(&server));
    let reply = api::listing_by_slug(&board, "acme-corp").await;

    assert_eq!(reply.status, 200);
    assert!(reply.body.success);
    assert!(reply.body.count.is_none());
    let record = reply.body.data.expect("record body");
    assert_eq!(record.slug, "acme-corp");
    assert_eq!(record.listing_at, "BSE, NSE");
}

#[tokio::test]
async fn slug_endpoint_maps_a_miss_to_not_found() {
    let server = MockServer::start();
    let _calendar = common::mock_calendar(&server, "calendar_board.html");
    let _gmp = common::mock_gmp(&server, "gmp_board.html");
    let _acme_detail = common::mock_detail(&server, "/ipo/acme-corp/", "detail_acme.html");
    let _beta_detail = common::mock_outage(&server, "/ipo/beta-industries/");

    let board = IpoBoard::new(&common::client_for(&server));
    let reply = api::listing_by_slug(&board, "does-not-exist").await;

    assert_eq!(reply.status, 404);
    assert!(!reply.body.success);
    assert_eq!(reply.body.message.as_deref(), Some("IPO Not Found"));
    assert!(reply.body.data.is_none());
}
