use async_trait::async_trait;

use crate::domain::{GrammarCheckResult, LanguageCode};

/// Abstract grammar-checking capability, polymorphic over the backing
/// linguistic engine. A successful empty result is not an error; failures
/// here mean the engine itself could not run.
#[async_trait]
pub trait GrammarChecker: Send + Sync {
    async fn check_grammar(
        &self,
        text: &str,
        lang: LanguageCode,
    ) -> Result<GrammarCheckResult, GrammarCheckerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GrammarCheckerError {
    #[error("grammar engine unavailable: {0}")]
    EngineUnavailable(String),
}
