use std::time::Duration;

use ipowatch_rs::{IpoBoard, IpoClient, Trend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=ipowatch_rs=debug shows each page fetch and degradation.
    tracing_subscriber::fmt::init();

    // 1. Create a client with a shorter timeout than the 10s default.
    let client = IpoClient::builder()
        .timeout(Duration::from_secs(5))
        .build()?;
    let board = IpoBoard::new(&client);

    // 2. Fetch the full aggregated board (calendar + premiums + details).
    let listings = board.active().await;
    println!("--- Active IPO Board ({} listings) ---", listings.len());
    for listing in &listings {
        let arrow = match listing.premium.trend() {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Flat => "·",
        };
        println!(
            "  [{}] {} ({}) {} {} GMP {} ({})",
            listing.board,
            listing.name,
            listing.status,
            listing.date_range,
            arrow,
            listing.premium.amount_text,
            listing.premium.percent_text
        );
    }
    println!();

    // 3. The filtered views serve from the same cached scrape.
    let mainboard = board.mainboard().await;
    let sme = board.sme().await;
    println!("--- By Board ---");
    println!("  Mainboard: {} listings", mainboard.len());
    println!("  SME: {} listings", sme.len());
    println!();

    println!("--- Upcoming ---");
    for listing in board.upcoming().await {
        println!("  {} opens {}", listing.name, listing.open_date);
    }

    Ok(())
}
