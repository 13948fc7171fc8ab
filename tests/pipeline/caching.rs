use std::time::Duration;

use httpmock::MockServer;
use ipowatch_rs::{CacheTag, IpoBoard};

use crate::common;

#[tokio::test]
async fn second_call_within_ttl_reuses_the_scrape() {
    let server = MockServer::start();
    let calendar = common::mock_calendar(&server, "calendar_board.html");
    let gmp = common::mock_gmp(&server, "gmp_board.html");
    let acme_detail = common::mock_detail(&server, "/ipo/acme-corp/", "detail_acme.html");
    let beta_detail = common::mock_outage(&server, "/ipo/beta-industries/");

    let board = IpoBoard::new(&common::client_for(&server));

    let first = board.active().await;
    let second = board.active().await;

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
    calendar.assert();
    gmp.assert();
    acme_detail.assert();
    beta_detail.assert();
}

#[tokio::test]
async fn zero_ttl_recomputes_on_every_call() {
    let server = MockServer::start();
    let calendar = common::mock_calendar(&server, "calendar_board.html");
    let _gmp = common::mock_gmp(&server, "gmp_board.html");
    let _acme_detail = common::mock_detail(&server, "/ipo/acme-corp/", "detail_acme.html");
    let _beta_detail = common::mock_outage(&server, "/ipo/beta-industries/");

    let client = common::builder_for(&server)
        .cache_ttl(Duration::ZERO)
        .build()
        .unwrap();
    let board = IpoBoard::new(&client);

    board.active().await;
    board.active().await;

    calendar.assert_calls(2);
}

#[tokio::test]
async fn empty_aggregations_are_cached_too() {
    let server = MockServer::start();
    let calendar = common::mock_outage(&server, common::CALENDAR_PATH);
    let _gmp = common::mock_gmp(&server, "gmp_board.html");

    let board = IpoBoard::new(&common::client_for(&server));

    assert!(board.active().await.is_empty());
    assert!(board.active().await.is_empty());

    // The failed cycle is memoized like any other result.
    calendar.assert();
}

#[tokio::test]
async fn invalidation_forces_a_fresh_scrape() {
    let server = MockServer::start();
    let calendar = common::mock_calendar(&server, "calendar_board.html");
    let _gmp = common::mock_gmp(&server, "gmp_board.html");
    let _acme_detail = common::mock_detail(&server, "/ipo/acme-corp/", "detail_acme.html");
    let _beta_detail = common::mock_outage(&server, "/ipo/beta-industries/");

    let client = common::client_for(&server);
    let board = IpoBoard::new(&client);

    board.active().await;
    client.invalidate(CacheTag::ActiveListings).await;
    board.active().await;

    calendar.assert_calls(2);
}
