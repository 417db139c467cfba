use std::sync::Arc;

use crate::application::ports::{CacheStore, GrammarChecker, GrammarCheckerError};
use crate::domain::{GrammarCheckResult, LanguageCode, SourceKind};

use super::cache_key::generate_cache_key;

/// Runs validated markdown through the grammar engine behind the cache.
pub struct GrammarCheckService {
    checker: Arc<dyn GrammarChecker>,
    cache: Arc<dyn CacheStore>,
}

impl GrammarCheckService {
    pub fn new(checker: Arc<dyn GrammarChecker>, cache: Arc<dyn CacheStore>) -> Self {
        Self { checker, cache }
    }

    /// Fingerprint, cache lookup, engine call on a miss, cache populate.
    ///
    /// A hit is returned as-is: no re-check, no TTL refresh. Two concurrent
    /// misses for the same content both reach the engine; the second write
    /// simply overwrites the first with an identical value.
    #[tracing::instrument(skip(self, content), fields(source = %source, lang = %lang))]
    pub async fn check(
        &self,
        content: &str,
        source: SourceKind,
        lang: LanguageCode,
    ) -> Result<GrammarCheckResult, GrammarCheckerError> {
        let key = generate_cache_key(content, source);

        if let Some(cached) = self.cache.get(&key).await {
            tracing::debug!(key = %key, "Cache hit, engine skipped");
            return Ok(cached);
        }

        let result = self.checker.check_grammar(content, lang).await?;
        self.cache.set(&key, &result).await;

        tracing::info!(key = %key, issues = result.total_issues, "Grammar check completed and cached");
        Ok(result)
    }
}
