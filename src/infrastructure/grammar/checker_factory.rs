use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::GrammarChecker;
use crate::presentation::config::{GrammarProvider, GrammarSettings};

use super::language_tool_adapter::LanguageToolAdapter;
use super::mock_grammar_checker::MockGrammarChecker;

pub struct CheckerFactory;

impl CheckerFactory {
    pub fn create(settings: &GrammarSettings) -> Arc<dyn GrammarChecker> {
        match settings.provider {
            GrammarProvider::LanguageTool => {
                tracing::info!(base_url = %settings.base_url, "Using LanguageTool grammar engine");
                Arc::new(LanguageToolAdapter::new(
                    &settings.base_url,
                    Duration::from_secs(settings.request_timeout_seconds),
                ))
            }
            GrammarProvider::Mock => {
                tracing::warn!("Using mock grammar checker; every check reports zero issues");
                Arc::new(MockGrammarChecker::clean())
            }
        }
    }
}
