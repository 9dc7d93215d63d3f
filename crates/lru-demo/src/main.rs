//! lru-demo - scripted walkthrough of LRU eviction

use anyhow::{bail, Result};
use clap::Parser;
use lrucache::LruCache;
use tracing::info;

/// Capacity used by the scripted walkthrough
const DEMO_CAPACITY: usize = 3;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let _args = Args::parse();

    info!(capacity = DEMO_CAPACITY, "Starting LRU walkthrough");
    run(DEMO_CAPACITY)
}

fn run(capacity: usize) -> Result<()> {
    let mut cache: LruCache<String, i64> = LruCache::new(capacity)?;

    cache.put("key1".to_string(), 1);
    cache.put("key2".to_string(), 2);
    cache.put("key3".to_string(), 3);

    match cache.get("key1") {
        Some(value) => println!("{}", value),
        None => bail!("key1 missing before any eviction"),
    }

    if let Some((key, _)) = cache.put("key4".to_string(), 4) {
        info!(%key, "Evicted");
    }

    if cache.get("key2").is_some() {
        bail!("key2 should have been evicted");
    }
    println!("key2 not found");

    info!(len = cache.len(), "Walkthrough complete");
    Ok(())
}
