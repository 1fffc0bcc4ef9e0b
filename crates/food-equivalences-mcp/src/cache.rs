/// Redis caching layer for the food equivalences server.
///
/// All operations return `Option<T>` for graceful degradation. If Redis is unavailable,
/// callers fall through to querying the in-memory catalogs.
///
/// Key schema (namespaced per catalog, so a response built from other catalog contents
/// can never be read back):
/// - `feq:v1:{fingerprint}:search:{sha256(tool|query|filter)}`: JSON tool response
///   (TTL from config)
/// - `feq:v1:catalog_fingerprint`: fingerprint of the last catalog that pruned (no TTL)
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::info;

use food_equivalences::{all_goals, equivalences, Equivalence, NutritionGoalData};
use mcp_common::error::CommonError;
use mcp_common::redis::RedisCache;

const KEY_PREFIX: &str = "feq:v1:";

/// Result of clearing the responses cached for a previous catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PruneOutcome {
    /// The stored fingerprint already matches this catalog.
    Current,
    /// The previous catalog's namespace was deleted.
    Pruned { previous: String },
    /// Redis could not be reached or the delete failed. Old entries expire by TTL.
    Skipped,
}

pub struct EquivalenceCache {
    redis: RedisCache,
    fingerprint: String,
    search_ttl_secs: u64,
}

impl EquivalenceCache {
    pub fn new(redis: RedisCache, fingerprint: String, search_ttl_secs: u64) -> Self {
        Self {
            redis,
            fingerprint,
            search_ttl_secs,
        }
    }

    pub async fn get_search<T: DeserializeOwned>(
        &self,
        tool: &str,
        query: &str,
        filter: &str,
    ) -> Option<T> {
        self.redis
            .get_json(&search_key(&self.fingerprint, tool, query, filter))
            .await
    }

    pub async fn set_search<T: Serialize>(
        &self,
        tool: &str,
        query: &str,
        filter: &str,
        response: &T,
    ) {
        self.redis
            .set_json(
                &search_key(&self.fingerprint, tool, query, filter),
                response,
                Some(self.search_ttl_secs),
            )
            .await;
    }

    /// Deletes the responses of the catalog recorded before this one.
    ///
    /// Lookups never depend on this: keys are scoped to the running fingerprint. The
    /// new fingerprint is recorded only once the old namespace is gone.
    pub async fn prune_previous_catalog(&self) -> PruneOutcome {
        if self.redis.ping().await.is_err() {
            return PruneOutcome::Skipped;
        }

        let marker = format!("{KEY_PREFIX}catalog_fingerprint");
        let previous = match self.redis.get(&marker).await {
            Some(previous) if previous == self.fingerprint => return PruneOutcome::Current,
            previous => previous,
        };

        if let Some(old) = &previous {
            info!(
                previous = %old,
                current = %self.fingerprint,
                "catalog changed, pruning cached responses"
            );
            if !self.redis.delete_by_prefix(&namespace(old)).await {
                return PruneOutcome::Skipped;
            }
        }
        if !self.redis.set(&marker, &self.fingerprint, None).await {
            return PruneOutcome::Skipped;
        }
        match previous {
            Some(previous) => PruneOutcome::Pruned { previous },
            None => PruneOutcome::Current,
        }
    }
}

fn namespace(fingerprint: &str) -> String {
    format!("{KEY_PREFIX}{fingerprint}:")
}

fn search_key(fingerprint: &str, tool: &str, query: &str, filter: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(tool.as_bytes());
    hasher.update(b"|");
    hasher.update(query.as_bytes());
    hasher.update(b"|");
    hasher.update(filter.as_bytes());
    let hash = hasher.finalize();
    format!("{}search:{:x}", namespace(fingerprint), hash)
}

#[derive(Serialize)]
struct CatalogSnapshot {
    equivalences: Vec<&'static Equivalence>,
    goals: Vec<&'static NutritionGoalData>,
}

/// SHA-256 over the JSON form of both catalogs.
pub fn catalog_fingerprint() -> Result<String, CommonError> {
    let snapshot = CatalogSnapshot {
        equivalences: equivalences().collect(),
        goals: all_goals().collect(),
    };
    let bytes = serde_json::to_vec(&snapshot)?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_key_is_namespaced_and_deterministic() {
        let key = search_key("abc", "search_equivalences", "beurre", "recipe");
        assert!(key.starts_with("feq:v1:abc:search:"));
        assert_eq!(key, search_key("abc", "search_equivalences", "beurre", "recipe"));
        assert_eq!(key.len(), "feq:v1:abc:search:".len() + 64);
    }

    #[test]
    fn search_key_separates_tool_query_and_filter() {
        let base = search_key("abc", "search_equivalences", "beurre", "recipe");
        assert_ne!(base, search_key("abc", "get_ingredient_equivalences", "beurre", "recipe"));
        assert_ne!(base, search_key("abc", "search_equivalences", "beurre", "nutrition"));
        assert_ne!(base, search_key("abc", "search_equivalences", "beurrerecipe", ""));
    }

    #[test]
    fn keys_of_different_catalogs_never_collide() {
        let current = catalog_fingerprint().unwrap();
        let previous = "0".repeat(64);
        let tools = ["search_equivalences", "search_goal_equivalences"];
        for tool in tools {
            for (query, filter) in [("beurre", ""), ("riz", "weight-loss"), ("", "recipe")] {
                let new_key = search_key(&current, tool, query, filter);
                let old_key = search_key(&previous, tool, query, filter);
                assert_ne!(new_key, old_key);
                assert!(old_key.starts_with(&namespace(&previous)));
                assert!(!old_key.starts_with(&namespace(&current)));
            }
        }
    }

    #[test]
    fn fingerprint_is_stable_hex() {
        let first = catalog_fingerprint().unwrap();
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(first, catalog_fingerprint().unwrap());
    }

    #[tokio::test]
    async fn cache_without_redis_always_misses() {
        let cache = EquivalenceCache::new(RedisCache::new(None), "abc".to_string(), 60);
        cache
            .set_search("search_equivalences", "beurre", "", &vec!["x".to_string()])
            .await;
        let hit: Option<Vec<String>> = cache.get_search("search_equivalences", "beurre", "").await;
        assert!(hit.is_none());
    }

    #[tokio::test]
    async fn prune_without_redis_is_skipped() {
        let cache = EquivalenceCache::new(RedisCache::new(None), "abc".to_string(), 60);
        assert_eq!(cache.prune_previous_catalog().await, PruneOutcome::Skipped);

        let unreachable = RedisCache::new(Some("redis://127.0.0.1:1/"));
        let cache = EquivalenceCache::new(unreachable, "abc".to_string(), 60);
        assert_eq!(cache.prune_previous_catalog().await, PruneOutcome::Skipped);
    }
}
