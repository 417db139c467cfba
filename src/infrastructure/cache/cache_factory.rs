use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::CacheStore;
use crate::presentation::config::{CacheBackend, CacheSettings};

use super::memory_cache::MemoryCache;
use super::redis_cache::{RedisCache, RedisCacheError};

#[derive(Debug, thiserror::Error)]
pub enum CacheFactoryError {
    #[error("redis_url is required for the redis cache backend")]
    MissingRedisUrl,
    #[error(transparent)]
    Redis(#[from] RedisCacheError),
}

pub struct CacheFactory;

impl CacheFactory {
    pub async fn create(settings: &CacheSettings) -> Result<Arc<dyn CacheStore>, CacheFactoryError> {
        let ttl = Duration::from_secs(settings.ttl_seconds);

        match settings.backend {
            CacheBackend::Memory => {
                tracing::info!(ttl_seconds = settings.ttl_seconds, "Using in-process cache");
                Ok(Arc::new(MemoryCache::new(ttl)))
            }
            CacheBackend::Redis => {
                let url = settings
                    .redis_url
                    .as_deref()
                    .ok_or(CacheFactoryError::MissingRedisUrl)?;
                tracing::info!("Connecting Redis cache");
                let cache = RedisCache::connect(url, ttl).await?;
                Ok(Arc::new(cache))
            }
        }
    }
}
