//! Engine Management Example
//!
//! Creates an engine, sets up its schema and a synonym set, then lists
//! engines page by page before cleaning up.
//!
//! Run with: cargo run --example manage_engine
//! (credentials are read from APP_SEARCH_* environment variables)

use appsearch_rs::{Client, ClientConfig, Page};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("appsearch_rs=info")),
        )
        .init();

    let client = Client::from_config(ClientConfig::from_env()?)?;
    let engine = "synonyms-demo";

    let created = client.create_engine(engine, Some("en")).await?;
    println!("✅ Created engine: {}", created["name"]);

    let schema = client
        .update_schema(engine, &json!({"square_km": "number", "title": "text"}))
        .await?;
    println!("   Schema: {}", schema);

    let synonyms = client
        .create_synonym_set(engine, &["park", "trail", "reserve"])
        .await?;
    println!("   Synonym set {}: {:?}", synonyms.id, synonyms.synonyms);

    let engines = client.list_engines(Some(Page::new(1, 10))).await?;
    println!("\n📚 Engines: {}", engines["results"]);

    client.destroy_synonym_set(engine, &synonyms.id).await?;
    client.destroy_engine(engine).await?;
    println!("\n🗑  Removed engine {}", engine);

    Ok(())
}
