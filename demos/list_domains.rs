//! Lists domains and the first page of pids from a pidman server.
//!
//! Reads `PIDMAN_HOST`, `PIDMAN_USER` and `PIDMAN_PASSWORD` from the environment.
//!
//! Run with: cargo run --example list_domains

use anyhow::Context;
use pidman_client::{PidSearch, PidmanClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let client = PidmanClient::from_env().context("reading pidman configuration")?;
    println!("Pidman server: {}", client.config().base_url());

    let domains = client.list_domains().await.context("listing domains")?;
    println!("\nDomains:");
    println!("{}", serde_json::to_string_pretty(&domains)?);

    let pids = client
        .search_pids(&PidSearch::new().with_page(1).with_count(10))
        .await
        .context("searching pids")?;
    println!("\nFirst page of pids:");
    println!("{}", pids);

    Ok(())
}
