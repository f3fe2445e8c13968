//! One-shot synchronization utility.
//!
//! Fetches papers matching a query from the remote catalog, persists
//! them, then reads them back from the local store with their authors.
//!
//! Usage: `sync [query] [limit]`

use std::env;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bibsync_server::{
    config::AppConfig,
    repository::{PaperRepository, Repository},
    scholar::ScholarApiClient,
    services::Services,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().expect("Failed to load configuration");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bibsync_server=warn".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = env::args().skip(1);
    let query = args
        .next()
        .unwrap_or_else(|| "phonological loop".to_string());
    let limit: u32 = args.next().and_then(|v| v.parse().ok()).unwrap_or(10);

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url())
        .await
        .expect("Failed to connect to database");

    let repository = Repository::new(pool);
    repository
        .papers
        .init_schema()
        .await
        .expect("Failed to initialize database schema");

    let fetcher =
        ScholarApiClient::new(&config.scholar).expect("Failed to create remote catalog client");
    let services = Services::new(repository, Arc::new(fetcher));

    println!("Searching remote catalog for '{}'...", query);
    let papers = services.sync.search(&query, limit).await?;

    println!("Found {} papers from the remote catalog", papers.len());
    for (i, paper) in papers.iter().enumerate() {
        println!("{}. {} (corpus id: {})", i + 1, paper.title, paper.corpus_id);
    }

    println!("\nReading back from the local store...");
    let stored = services.catalog.search(&query, limit).await?;

    println!("Found {} papers in the local store", stored.len());
    for (i, paper) in stored.iter().enumerate() {
        println!("{}. {} (corpus id: {})", i + 1, paper.title, paper.corpus_id);

        let authors = services.catalog.get_authors(paper.corpus_id).await?;
        if authors.is_empty() {
            println!("   No authors recorded");
        } else {
            let names: Vec<&str> = authors.iter().map(|a| a.name.as_str()).collect();
            println!("   Authors: {}", names.join(", "));
        }
    }

    Ok(())
}
