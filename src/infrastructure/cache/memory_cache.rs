use std::collections::HashMap;
use std::time::Duration;

use globset::Glob;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::application::ports::CacheStore;
use crate::domain::GrammarCheckResult;

/// In-process TTL store. Expiry is checked lazily on read; nothing sweeps
/// the table in the background.
pub struct MemoryCache {
    entries: RwLock<HashMap<String, (GrammarCheckResult, Instant)>>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }
}

#[async_trait::async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Option<GrammarCheckResult> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some((value, expires_at)) if Instant::now() < *expires_at => {
                    return Some(value.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        // Entry outlived its TTL; evict it under the write lock.
        self.entries.write().await.remove(key);
        None
    }

    async fn set(&self, key: &str, value: &GrammarCheckResult) {
        let expires_at = Instant::now() + self.ttl;
        self.entries
            .write()
            .await
            .insert(key.to_string(), (value.clone(), expires_at));
    }

    async fn clear(&self, pattern: &str) -> u64 {
        let matcher = match Glob::new(pattern) {
            Ok(glob) => glob.compile_matcher(),
            Err(e) => {
                tracing::warn!(pattern = %pattern, error = %e, "Invalid cache clear pattern");
                return 0;
            }
        };

        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|key, _| !matcher.is_match(key));
        (before - entries.len()) as u64
    }
}
