use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{GrammarChecker, GrammarCheckerError};
use crate::domain::{GrammarCheckResult, GrammarIssue, LanguageCode};

/// Deterministic stand-in for the linguistic engine. Returns the configured
/// issues on every call and counts invocations so tests can assert the
/// cache kept the engine out of the loop.
pub struct MockGrammarChecker {
    issues: Vec<GrammarIssue>,
    calls: AtomicUsize,
}

impl MockGrammarChecker {
    pub fn clean() -> Self {
        Self::with_issues(Vec::new())
    }

    pub fn with_issues(issues: Vec<GrammarIssue>) -> Self {
        Self {
            issues,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl GrammarChecker for MockGrammarChecker {
    async fn check_grammar(
        &self,
        _text: &str,
        _lang: LanguageCode,
    ) -> Result<GrammarCheckResult, GrammarCheckerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(GrammarCheckResult::from_issues(self.issues.clone()))
    }
}
