mod cache_factory;
mod memory_cache;
mod redis_cache;

pub use cache_factory::{CacheFactory, CacheFactoryError};
pub use memory_cache::MemoryCache;
pub use redis_cache::{RedisCache, RedisCacheError};
