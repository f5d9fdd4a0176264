//! Upsert a couple of families in one NDJSON request and report each line.
//!
//! Run with:
//!   AKENEO_BASE_URL=... AKENEO_ACCESS_TOKEN=... cargo run --example batch_upsert_families

use akeneo_client::{AkeneoClient, Family};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = AkeneoClient::from_env()?;

    let families = vec![
        Family::new("demo_shoes", "sku")
            .with_attributes(["sku"])
            .with_requirement("ecommerce", ["sku"])
            .with_label("en_US", "Demo shoes"),
        // Blank label attribute: the PIM rejects this line, the others still go through.
        Family::new("demo_broken", ""),
    ];

    let lines = client.families().batch_upsert(&families).await?;
    for line in &lines {
        let code = line.entity_code().unwrap_or("?");
        if line.is_success() {
            println!("line {} ({}): {}", line.line, code, line.status_code);
        } else {
            println!(
                "line {} ({}): {} {}",
                line.line,
                code,
                line.status_code,
                line.message.as_deref().unwrap_or("")
            );
            for error in &line.errors {
                println!("    {}: {}", error.property, error.message);
            }
        }
    }

    Ok(())
}
