//! Index and Search Example
//!
//! Indexes a couple of documents into an existing engine and runs a search,
//! a multi-search and a query suggestion against it.
//!
//! Run with:
//! APP_SEARCH_API_KEY=private-xxx APP_SEARCH_BASE_ENDPOINT=localhost:3002/api/as/v1 \
//! APP_SEARCH_USE_HTTPS=false cargo run --example index_and_search

use appsearch_rs::{Client, ClientConfig, ClientError, MultiSearchQuery, SearchOptions};
use serde_json::json;
use tracing_subscriber::EnvFilter;

const ENGINE: &str = "national-parks-demo";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("appsearch_rs=debug")),
        )
        .init();

    let client = Client::from_config(ClientConfig::from_env()?)?;
    println!("Connected to {}\n", client.base_url());

    let documents = vec![
        json!({"id": "park_yosemite", "title": "Yosemite", "states": ["California"]}),
        json!({"title": "Zion", "states": ["Utah"]}),
    ];

    match client.index_documents(ENGINE, &documents).await {
        Ok(receipts) => {
            for receipt in &receipts {
                println!("📝 Indexed document: {:?}", receipt.id);
            }
        }
        Err(ClientError::InvalidDocument { id, message }) => {
            println!("❌ Document {:?} rejected: {}", id, message);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let mut options = SearchOptions::new();
    options.insert("page".to_string(), json!({"size": 5}));
    let results = client.search(ENGINE, "yosemite", options).await?;
    println!("\n🔍 Search results for 'yosemite':");
    println!("{}", serde_json::to_string_pretty(&results["results"])?);

    let queries = [MultiSearchQuery::new("zion"), MultiSearchQuery::new("utah")];
    let batches = client.multi_search(ENGINE, &queries).await?;
    let sets = batches.as_array().map_or(0, |b| b.len());
    println!("\n🔍 Multi-search returned {} result sets", sets);

    let suggestions = client
        .query_suggestion(ENGINE, "yo", SearchOptions::new())
        .await?;
    println!("\n💡 Suggestions for 'yo': {}", suggestions["results"]);

    Ok(())
}
