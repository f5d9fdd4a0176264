//! List one page of families and fetch the first one in full.
//!
//! Run with:
//!   AKENEO_BASE_URL=https://pim.example.com/api/rest/v1 AKENEO_ACCESS_TOKEN=... \
//!   RUST_LOG=akeneo_client=debug cargo run --example list_families

use akeneo_client::{AkeneoClient, ListOptions, RequestOpts};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = AkeneoClient::from_env()?;

    let opts: RequestOpts = ListOptions::new().page(1).limit(10).with_count(true).into();
    let page = client.families().get_all(&opts).await?;

    if let Some(total) = page.pagination.items_count {
        println!("{} families in total", total);
    }
    for item in page.items() {
        let label = item.family.label("en_US").unwrap_or("-");
        println!("{:<30} {}", item.family.code, label);
    }

    if let Some(first) = page.items().first() {
        match client.families().get(&first.family.code).await {
            Ok(family) => println!("\n{}", serde_json::to_string_pretty(&family)?),
            Err(e) if e.is_not_found() => println!("{} disappeared meanwhile", first.family.code),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
