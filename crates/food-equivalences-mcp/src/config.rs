use crate::error::AppError;

const DEFAULT_SEARCH_CACHE_TTL_SECS: u64 = 3600;

/// Application configuration loaded explicitly from environment variables.
///
/// Nothing is required: the catalogs are compiled in, Redis is optional, and the server
/// speaks MCP over stdio unless a TCP address is given.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL (e.g. "redis://127.0.0.1:6379"). `None` disables caching.
    pub redis_url: Option<String>,
    /// Address to accept MCP clients on (e.g. "127.0.0.1:7300"). `None` serves stdio.
    pub listen_addr: Option<String>,
    /// Lifetime of cached search responses.
    pub search_cache_ttl_secs: u64,
}

impl Config {
    /// Optional:
    /// - `REDIS_URL`: Redis connection string (omit to disable caching)
    /// - `MCP_TCP_LISTEN_ADDR`: serve over TCP instead of stdio
    /// - `SEARCH_CACHE_TTL_SECS`: positive integer, defaults to 3600
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let search_cache_ttl_secs = match non_blank("SEARCH_CACHE_TTL_SECS") {
            None => DEFAULT_SEARCH_CACHE_TTL_SECS,
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&secs| secs > 0)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "SEARCH_CACHE_TTL_SECS must be a positive integer, got '{raw}'"
                    ))
                })?,
        };

        Ok(Self {
            redis_url: non_blank("REDIS_URL"),
            listen_addr: non_blank("MCP_TCP_LISTEN_ADDR"),
            search_cache_ttl_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.redis_url, None);
        assert_eq!(config.listen_addr, None);
        assert_eq!(config.search_cache_ttl_secs, DEFAULT_SEARCH_CACHE_TTL_SECS);
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("REDIS_URL", "redis://127.0.0.1:6379"),
            ("MCP_TCP_LISTEN_ADDR", "0.0.0.0:7300"),
            ("SEARCH_CACHE_TTL_SECS", " 120 "),
        ])
        .unwrap();
        assert_eq!(config.redis_url.as_deref(), Some("redis://127.0.0.1:6379"));
        assert_eq!(config.listen_addr.as_deref(), Some("0.0.0.0:7300"));
        assert_eq!(config.search_cache_ttl_secs, 120);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("REDIS_URL", "  "), ("SEARCH_CACHE_TTL_SECS", "")]).unwrap();
        assert_eq!(config.redis_url, None);
        assert_eq!(config.search_cache_ttl_secs, DEFAULT_SEARCH_CACHE_TTL_SECS);
    }

    #[test]
    fn rejects_invalid_ttl() {
        for raw in ["0", "-5", "one hour"] {
            let err = config_from(&[("SEARCH_CACHE_TTL_SECS", raw)]).unwrap_err();
            assert!(
                matches!(&err, AppError::Config(message) if message.contains(raw)),
                "unexpected error for {raw}: {err}"
            );
        }
    }
}
