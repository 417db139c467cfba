use std::time::Duration;

use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::application::ports::CacheStore;
use crate::domain::GrammarCheckResult;

/// Networked cache over a shared Redis instance. Values are stored as JSON
/// with a server-side TTL; per-key atomicity comes from Redis itself.
pub struct RedisCache {
    manager: ConnectionManager,
    ttl: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum RedisCacheError {
    #[error("invalid redis url: {0}")]
    InvalidUrl(redis::RedisError),
    #[error("redis unreachable: {0}")]
    Unreachable(redis::RedisError),
}

impl RedisCache {
    /// Connects and pings the server. An unreachable cache configured at
    /// boot is a configuration error, so this propagates instead of
    /// degrading the way the per-request operations do.
    pub async fn connect(url: &str, ttl: Duration) -> Result<Self, RedisCacheError> {
        let client = redis::Client::open(url).map_err(RedisCacheError::InvalidUrl)?;
        let mut manager = client
            .get_connection_manager()
            .await
            .map_err(RedisCacheError::Unreachable)?;

        redis::cmd("PING")
            .query_async::<()>(&mut manager)
            .await
            .map_err(RedisCacheError::Unreachable)?;

        tracing::info!(ttl_seconds = ttl.as_secs(), "Redis cache connected");
        Ok(Self { manager, ttl })
    }
}

#[async_trait::async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> Option<GrammarCheckResult> {
        let mut conn = self.manager.clone();

        let raw: Option<String> = match conn.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Cache read failed, treating as miss");
                return None;
            }
        };

        let raw = raw?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Cached payload undeserializable, dropping key");
                let _: Result<u64, _> = conn.del(key).await;
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &GrammarCheckResult) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to serialize cache value");
                return;
            }
        };

        let mut conn = self.manager.clone();
        if let Err(e) = conn
            .set_ex::<_, _, ()>(key, payload, self.ttl.as_secs())
            .await
        {
            tracing::warn!(key = %key, error = %e, "Cache write failed");
        }
    }

    async fn clear(&self, pattern: &str) -> u64 {
        let mut conn = self.manager.clone();

        let keys: Vec<String> = match conn.keys(pattern).await {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!(pattern = %pattern, error = %e, "Cache key scan failed");
                return 0;
            }
        };

        if keys.is_empty() {
            return 0;
        }

        match conn.del::<_, u64>(&keys).await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(pattern = %pattern, error = %e, "Cache clear failed");
                0
            }
        }
    }
}
