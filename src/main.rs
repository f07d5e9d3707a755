#[tokio::main]
async fn main() {
    if let Err(e) = club_events::run().await {
        eprintln!("club-events failed: {}", e);
        std::process::exit(1);
    }
}
