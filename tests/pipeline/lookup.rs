use httpmock::MockServer;
use ipowatch_rs::{Board, IpoBoard};

use crate::common;

#[tokio::test]
async fn slug_lookup_returns_the_matching_record() {
    let server = MockServer::start();
    let _calendar = common::mock_calendar(&server, "calendar_board.html");
    let _gmp = common::mock_gmp(&server, "gmp_board.html");
    let _acme_detail = common::mock_detail(&server, "/ipo/acme-corp/", "detail_acme.html");
    let _beta_detail = common::mock_outage(&server, "/ipo/beta-industries/");

    let board = IpoBoard::new(&common::client_for(&server));
    let hit = board.by_slug("acme-corp").await;

    let record = hit.expect("acme-corp should be on the board");
    assert_eq!(record.name, "Acme Corp");
    assert_eq!(record.board, Board::Mainboard);
    assert_eq!(record.face_value, "₹10");
}

#[tokio::test]
async fn unknown_slugs_memoize_the_miss() {
    let server = MockServer::start();
    let calendar = common::mock_calendar(&server, "calendar_board.html");
    let _gmp = common::mock_gmp(&server, "gmp_board.html");
    let _acme_detail = common::mock_detail(&server, "/ipo/acme-corp/", "detail_acme.html");
    let _beta_detail = common::mock_outage(&server, "/ipo/beta-industries/");

    let board = IpoBoard::new(&common::client_for(&server));

    assert!(board.by_slug("no-such-ipo").await.is_none());
    assert!(board.by_slug("no-such-ipo").await.is_none());

    calendar.assert();
}

#[tokio::test]
async fn lookup_scrapes_independently_of_the_list_cache() {
    let server = MockServer::start();
    let calendar = common::mock_calendar(&server, "calendar_board.html");
    let _gmp = common::mock_gmp(&server, "gmp_board.html");
    let _acme_detail = common::mock_detail(&server, "/ipo/acme-corp/", "detail_acme.html");
    let _beta_detail = common::mock_outage(&server, "/ipo/beta-industries/");

    let board = IpoBoard::new(&common::client_for(&server));

    board.active().await;
    board.by_slug("acme-corp").await;

    // One cycle for the list, one for the lookup.
    calendar.assert_calls(2);
}

#[tokio::test]
async fn each_slug_gets_its_own_cache_entry() {
    let server = MockServer::start();
    let calendar = common::mock_calendar(&server, "calendar_board.html");
    let _gmp = common::mock_gmp(&server, "gmp_board.html");
    let _acme_detail = common::mock_detail(&server, "/ipo/acme-corp/", "detail_acme.html");
    let _beta_detail = common::mock_outage(&server, "/ipo/beta-industries/");

    let board = IpoBoard::new(&common::client_for(&server));

    let acme = board.by_slug("acme-corp").await;
    let gamma = board.by_slug("gamma-textiles").await;
    let acme_again = board.by_slug("acme-corp").await;

    assert_eq!(gamma.expect("gamma hit").board, Board::Sme);
    assert_eq!(acme, acme_again);
    // Two distinct slugs cost two cycles; the repeat costs none.
    calendar.assert_calls(2);
}
