use httpmock::MockServer;
use ipowatch_rs::{Board, GmpQuote, IpoBoard, ListingStatus};

use crate::common;

#[tokio::test]
async fn board_assembles_calendar_premiums_and_details() {
    let server = MockServer::start();
    let calendar = common::mock_calendar(&server, "calendar_board.html");
    let gmp = common::mock_gmp(&server, "gmp_board.html");
    let acme_detail = common::mock_detail(&server, "/ipo/acme-corp/", "detail_acme.html");
    // Beta's detail page is down; its row must still assemble.
    let beta_detail = common::mock_outage(&server, "/ipo/beta-industries/");

    let client = common::client_for(&server);
    let board = IpoBoard::new(&client);
    let records = board.active().await;

    calendar.assert();
    gmp.assert();
    acme_detail.assert();
    beta_detail.assert();

    assert_eq!(records.len(), 3);

    // Row order: Mainboard rows in source order, then SME.
    let acme = &records[0];
    let beta = &records[1];
    let gamma = &records[2];
    assert_eq!(acme.name, "Acme Corp");
    assert_eq!(beta.name, "Beta Industries");
    assert_eq!(gamma.name, "Gamma Textiles");
    assert_eq!(acme.board, Board::Mainboard);
    assert_eq!(beta.board, Board::Mainboard);
    assert_eq!(gamma.board, Board::Sme);

    // Calendar fields, separator normalized both ways.
    assert_eq!(acme.status, ListingStatus::Open);
    assert_eq!(acme.date_range, "12 - 15 Jan");
    assert_eq!(acme.price_range, "₹100-₹110");
    assert_eq!(beta.status, ListingStatus::Closed);
    assert_eq!(beta.date_range, "8 - 10 Jan");
    assert_eq!(gamma.status, ListingStatus::Upcoming);
    assert_eq!(gamma.date_range, "TBA");
    assert_eq!(gamma.price_range, "TBA");

    // Identity fields.
    assert_eq!(acme.initial, 'A');
    assert_eq!(acme.slug, "acme-corp");
    assert_eq!(gamma.slug, "gamma-textiles");

    // Premium join: matched, suppressed by the hyphen marker, matched.
    assert_eq!(acme.premium.amount_text, "₹50");
    assert_eq!(acme.premium.percent_text, "45%");
    assert_eq!(beta.premium, GmpQuote::default());
    assert_eq!(gamma.premium.amount_text, "₹12");

    // Detail enrichment for the one reachable page.
    assert_eq!(acme.open_date, "12 Jan 2026");
    assert_eq!(acme.close_date, "15 Jan 2026");
    assert_eq!(acme.face_value, "₹10");
    assert_eq!(acme.price_band, "₹100 to ₹110");
    assert_eq!(acme.issue_size, "₹500 Cr");
    assert_eq!(acme.fresh_issue, "₹320 Cr");
    assert_eq!(acme.issue_type, "Book Built Issue");
    assert_eq!(acme.listing_at, "BSE, NSE");
    assert_eq!(acme.drhp_link, "https://example.com/acme-drhp.pdf");
    assert_eq!(acme.rhp_link, "https://example.com/acme-rhp.pdf");
    assert_eq!(acme.financials.len(), 2);
    assert_eq!(acme.financials[0].period_ended, "31 Mar 2025");
    assert_eq!(acme.financials[0].revenue, "842");
    assert_eq!(acme.financials[1].pat, "64");
    assert_eq!(
        acme.about,
        "Acme Corp manufactures precision fasteners for the auto sector.\n\nIt exports to 14 countries."
    );

    // Dead detail page degrades to defaults without dropping the row.
    assert_eq!(beta.issue_size, "TBA");
    assert_eq!(beta.open_date, "TBA");
    assert_eq!(beta.drhp_link, "");
    assert!(beta.financials.is_empty());

    // No link at all behaves the same way.
    assert_eq!(gamma.issue_size, "TBA");
    assert_eq!(gamma.about, "");
}

#[tokio::test]
async fn premium_page_outage_serves_zero_quotes() {
    let server = MockServer::start();
    let _calendar = common::mock_calendar(&server, "calendar_board.html");
    let gmp = common::mock_outage(&server, common::GMP_PATH);
    let _acme_detail = common::mock_detail(&server, "/ipo/acme-corp/", "detail_acme.html");
    let _beta_detail = common::mock_outage(&server, "/ipo/beta-industries/");

    let board = IpoBoard::new(&common::client_for(&server));
    let records = board.active().await;

    gmp.assert();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.premium == GmpQuote::default()));
    // Detail enrichment is unaffected by the premium outage.
    assert_eq!(records[0].face_value, "₹10");
}

#[tokio::test]
async fn calendar_outage_yields_an_empty_board() {
    let server = MockServer::start();
    let calendar = common::mock_outage(&server, common::CALENDAR_PATH);
    let _gmp = common::mock_gmp(&server, "gmp_board.html");

    let board = IpoBoard::new(&common::client_for(&server));
    let records = board.active().await;

    calendar.assert();
    assert!(records.is_empty());
}

#[tokio::test]
async fn single_width_fan_out_keeps_source_order() {
    let server = MockServer::start();
    let _calendar = common::mock_calendar(&server, "calendar_board.html");
    let _gmp = common::mock_gmp(&server, "gmp_board.html");
    let _acme_detail = common::mock_detail(&server, "/ipo/acme-corp/", "detail_acme.html");
    let _beta_detail = common::mock_outage(&server, "/ipo/beta-industries/");

    let client = common::builder_for(&server)
        .detail_concurrency(1)
        .build()
        .unwrap();
    let board = IpoBoard::new(&client);
    let names: Vec<String> = board.active().await.into_iter().map(|r| r.name).collect();

    assert_eq!(names, ["Acme Corp", "Beta Industries", "Gamma Textiles"]);
}

#[tokio::test]
async fn facade_filters_split_by_board_and_status() {
    let server = MockServer::start();
    let calendar = common::mock_calendar(&server, "calendar_board.html");
    let _gmp = common::mock_gmp(&server, "gmp_board.html");
    let _acme_detail = common::mock_detail(&server, "/ipo/acme-corp/", "detail_acme.html");
    let _beta_detail = common::mock_outage(&server, "/ipo/beta-industries/");

    let board = IpoBoard::new(&common::client_for(&server));

    let mainboard = board.mainboard().await;
    let sme = board.sme().await;
    let upcoming = board.upcoming().await;

    assert_eq!(mainboard.len(), 2);
    assert!(mainboard.iter().all(|r| r.board == Board::Mainboard));
    assert_eq!(sme.len(), 1);
    assert_eq!(sme[0].name, "Gamma Textiles");
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].status, ListingStatus::Upcoming);

    // All three views come out of one scrape cycle.
    calendar.assert();
}
