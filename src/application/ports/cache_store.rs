use async_trait::async_trait;

use crate::domain::GrammarCheckResult;

/// TTL key-value store for grammar-check results.
///
/// The cache is best effort: the signatures leave no room for backend
/// errors to reach a caller. Implementations absorb and log failures,
/// degrading `get` to a miss and `set`/`clear` to a no-op.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the stored value if present and not expired. An
    /// undeserializable entry counts as a miss and is dropped.
    async fn get(&self, key: &str) -> Option<GrammarCheckResult>;

    /// Stores the value under the backend's configured TTL, replacing any
    /// prior value for the key.
    async fn set(&self, key: &str, value: &GrammarCheckResult);

    /// Deletes all keys matching a glob-style pattern and returns how many
    /// were removed.
    async fn clear(&self, pattern: &str) -> u64;
}
