mod cache;
mod config;
mod error;
mod server;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cache::{EquivalenceCache, PruneOutcome};
use config::Config;
use error::AppError;
use server::FoodEquivalencesServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting food-equivalences MCP server");

    let config = Config::from_env()?;
    info!(
        redis = config.redis_url.is_some(),
        tcp = config.listen_addr.is_some(),
        search_cache_ttl_secs = config.search_cache_ttl_secs,
        "configuration loaded"
    );

    let stats = food_equivalences::validate_catalogs().map_err(AppError::from)?;
    info!(
        equivalences = stats.equivalences,
        alternatives = stats.alternatives,
        goals = stats.goals,
        goal_equivalences = stats.goal_equivalences,
        "catalogs validated"
    );

    let fingerprint = cache::catalog_fingerprint().map_err(AppError::from)?;
    let redis_cache = mcp_common::redis::RedisCache::new(config.redis_url.as_deref());
    if redis_cache.is_available().await {
        info!("redis connected");
    } else {
        info!("redis unavailable, running without cache");
    }
    let cache = EquivalenceCache::new(redis_cache, fingerprint, config.search_cache_ttl_secs);
    match cache.prune_previous_catalog().await {
        PruneOutcome::Current => info!("cached responses match this catalog"),
        PruneOutcome::Pruned { previous } => {
            info!(previous = %previous, "pruned responses cached for a previous catalog")
        }
        PruneOutcome::Skipped => info!("previous catalog responses not pruned, left to expire"),
    }

    let server = FoodEquivalencesServer::new(Arc::new(cache));

    if let Some(addr) = config.listen_addr {
        let listener = TcpListener::bind(&addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            let server = server.clone();
            tokio::spawn(async move {
                tracing::info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                tracing::info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}
