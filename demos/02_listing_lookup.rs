use ipowatch_rs::{IpoBoard, IpoClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = IpoClient::default();
    let board = IpoBoard::new(&client);

    // 1. Grab a slug off the live board so the lookup below has a real target.
    let listings = board.active().await;
    let Some(first) = listings.first() else {
        println!("The board is empty right now; nothing to look up.");
        return Ok(());
    };
    let slug = first.slug.clone();
    println!("Looking up slug {slug:?} out of {} listings.", listings.len());
    println!();

    // 2. Fetch one record by slug.
    let Some(listing) = board.by_slug(&slug).await else {
        println!("No listing found for {slug:?}.");
        return Ok(());
    };

    println!("--- {} ---", listing.name);
    println!("  Status: {} on the {}", listing.status, listing.board);
    println!("  Subscription: {}", listing.date_range);
    println!("  Price band: {}", listing.price_band);
    println!("  Issue size: {}", listing.issue_size);
    println!("  Fresh issue: {}", listing.fresh_issue);
    println!("  Listing at: {}", listing.listing_at);
    println!(
        "  GMP: {} ({})",
        listing.premium.amount_text, listing.premium.percent_text
    );
    println!();

    // 3. Prospectus links are empty strings when the page carries none.
    println!("--- Documents ---");
    for (label, link) in [("DRHP", &listing.drhp_link), ("RHP", &listing.rhp_link)] {
        if link.is_empty() {
            println!("  {label}: not published");
        } else {
            println!("  {label}: {link}");
        }
    }
    println!();

    // 4. Financial history, where the detail page published one.
    if listing.financials.is_empty() {
        println!("No financial history on the detail page.");
    } else {
        println!("--- Financials ---");
        for period in &listing.financials {
            println!(
                "  {}: revenue {}, expense {}, PAT {}, assets {}",
                period.period_ended, period.revenue, period.expense, period.pat, period.assets
            );
        }
    }

    if !listing.about.is_empty() {
        println!();
        println!("--- About ---");
        println!("{}", listing.about);
    }

    Ok(())
}
