use ipowatch_rs::{CacheTag, IpoBoard, IpoClient, api};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = IpoClient::default();
    let board = IpoBoard::new(&client);

    // 1. The list endpoint: status + envelope, ready for any HTTP framework.
    let reply = api::active_listings(&board).await;
    println!("--- GET /api/ipo -> {} ---", reply.status);
    println!(
        "success={} count={}",
        reply.body.success,
        reply.body.count.unwrap_or(0)
    );
    if let Some(listings) = &reply.body.data {
        if let Some(first) = listings.first() {
            println!("First record on the wire:");
            println!("{}", serde_json::to_string_pretty(first)?);
        }
    }
    if let Some(message) = &reply.body.message {
        println!("message={message}");
    }
    println!();

    // 2. The detail endpoint, including the 404 shape for a bogus slug.
    let miss = api::listing_by_slug(&board, "definitely-not-listed").await;
    println!("--- GET /api/ipo/definitely-not-listed -> {} ---", miss.status);
    println!("{}", serde_json::to_string(&miss.body)?);
    println!();

    // 3. Cache control: drop the memoized list and rebuild it.
    client.invalidate(CacheTag::ActiveListings).await;
    let rebuilt = api::active_listings(&board).await;
    println!(
        "After invalidation the endpoint rebuilt {} records (status {}).",
        rebuilt.body.count.unwrap_or(0),
        rebuilt.status
    );

    Ok(())
}
