//! Pokedex - interactive PokeAPI client
//!
//! Reads commands from stdin and caches API responses for a bounded time.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokecache::repl::{self, Session};
use pokecache::{Config, ExpiringCache, PokeApiClient};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, quiet by default)
/// 2. Load configuration from environment variables
/// 3. Create the expiring cache, which starts its reaper
/// 4. Run the prompt loop until `exit` or end of input
/// 5. Stop the reaper before returning
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs don't interleave with the prompt;
    // override with RUST_LOG, e.g. RUST_LOG=pokecache=debug
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn,pokecache=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: retention={}s, reap_interval={:?}, strict_expiry={}, base_url={}",
        config.cache_retention,
        config.cache_reap_interval,
        config.cache_strict_expiry,
        config.base_url
    );

    let cache = Arc::new(
        ExpiringCache::with_config(config.cache_config())
            .context("Failed to create response cache")?,
    );
    let client = PokeApiClient::new(config.base_url.clone(), Arc::clone(&cache));
    let mut session = Session::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let result = repl::run(&mut session, stdin, &mut stdout).await;

    info!(
        "Cache stats: {}",
        serde_json::to_string(&cache.stats()).context("Failed to encode cache stats")?
    );
    cache.shutdown().await;

    result.context("Pokedex session failed")
}
