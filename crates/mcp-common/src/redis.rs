/// Redis cache wrapper with graceful degradation.
///
/// Every operation swallows Redis errors: reads return `None`, writes return `false`, and a
/// warning is logged. Callers always fall through to computing the answer themselves, so
/// the server is fully functional without Redis.
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::CommonError;

#[derive(Clone)]
pub struct RedisCache {
    client: Option<redis::Client>,
}

impl RedisCache {
    /// A `None` URL, or one that fails to parse, yields a cache that never stores anything.
    pub fn new(url: Option<&str>) -> Self {
        let client = url.and_then(|u| {
            redis::Client::open(u)
                .inspect_err(|e| {
                    warn!(error = %e, url = u, "failed to create redis client, cache disabled")
                })
                .ok()
        });
        Self { client }
    }

    /// Sends a PING and reports why Redis cannot be used, if it cannot.
    pub async fn ping(&self) -> Result<(), CommonError> {
        let client = self.client.as_ref().ok_or(CommonError::RedisUnavailable)?;
        let mut conn = client.get_multiplexed_async_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    pub async fn is_available(&self) -> bool {
        self.ping().await.is_ok()
    }

    async fn connection(&self) -> Option<MultiplexedConnection> {
        let client = self.client.as_ref()?;
        client
            .get_multiplexed_async_connection()
            .await
            .inspect_err(|e| warn!(error = %e, "redis connection failed"))
            .ok()
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .inspect_err(|e| warn!(error = %e, key, "redis GET failed"))
            .ok()?;
        value
    }

    /// Stores `value` with no expiry when `ttl_secs` is `None`.
    pub async fn set(&self, key: &str, value: &str, ttl_secs: Option<u64>) -> bool {
        let Some(mut conn) = self.connection().await else {
            return false;
        };
        let result = match ttl_secs {
            Some(ttl) => conn.set_ex::<_, _, ()>(key, value, ttl).await,
            None => conn.set::<_, _, ()>(key, value).await,
        };
        result
            .inspect_err(|e| warn!(error = %e, key, "redis SET failed"))
            .is_ok()
    }

    /// Reads and decodes a JSON value. A value that no longer decodes counts as a miss.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = self.get(key).await?;
        serde_json::from_str(&json)
            .inspect_err(|e| warn!(error = %e, key, "cache deserialization failed"))
            .ok()
    }

    pub async fn set_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
        ttl_secs: Option<u64>,
    ) -> bool {
        match serde_json::to_string(value) {
            Ok(json) => self.set(key, &json, ttl_secs).await,
            Err(e) => {
                warn!(error = %e, key, "cache serialization failed");
                false
            }
        }
    }

    /// Delete all keys matching a prefix using SCAN (not KEYS, which blocks).
    pub async fn delete_by_prefix(&self, prefix: &str) -> bool {
        let Some(mut conn) = self.connection().await else {
            return false;
        };

        let pattern = format!("{prefix}*");
        let mut cursor: u64 = 0;
        loop {
            let (next_cursor, keys): (u64, Vec<String>) = match redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(100)
                .query_async(&mut conn)
                .await
            {
                Ok(result) => result,
                Err(e) => {
                    warn!(error = %e, pattern, "redis SCAN failed");
                    return false;
                }
            };

            if !keys.is_empty() {
                if let Err(e) = conn.del::<_, ()>(&keys).await {
                    warn!(error = %e, "redis batch DEL failed during prefix delete");
                    return false;
                }
            }

            cursor = next_cursor;
            if cursor == 0 {
                break;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::RedisCache;
    use crate::error::CommonError;

    #[tokio::test]
    async fn disabled_cache_degrades_to_misses() {
        let cache = RedisCache::new(None);
        assert!(!cache.is_available().await);
        assert_eq!(cache.get("any").await, None);
        assert!(!cache.set("any", "value", Some(60)).await);
        assert_eq!(cache.get_json::<Vec<String>>("any").await, None);
        assert!(!cache.set_json("any", &["a", "b"], None).await);
        assert!(!cache.delete_by_prefix("any:").await);
    }

    #[tokio::test]
    async fn ping_without_client_reports_unavailable() {
        let cache = RedisCache::new(None);
        assert!(matches!(cache.ping().await, Err(CommonError::RedisUnavailable)));
    }

    #[tokio::test]
    async fn unparsable_url_disables_cache() {
        let cache = RedisCache::new(Some("not a redis url"));
        assert!(!cache.is_available().await);
        assert_eq!(cache.get("key").await, None);
    }
}
