/// Infrastructure errors shared across MCP server crates.
///
/// The cache layer never surfaces these to tool callers (it degrades to a miss instead);
/// they appear when a server needs a hard answer, such as checking Redis at startup.
/// Server-specific errors wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("redis unavailable, degrading gracefully")]
    RedisUnavailable,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
