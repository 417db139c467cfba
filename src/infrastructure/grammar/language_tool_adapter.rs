use std::time::Duration;

use serde::Deserialize;

use crate::application::ports::{GrammarChecker, GrammarCheckerError};
use crate::domain::{GrammarCheckResult, GrammarIssue, LanguageCode};

/// Adapter over a LanguageTool HTTP server (`POST /v2/check`).
///
/// The HTTP client is built inside each call and dropped when the call
/// returns, success or not; nothing engine-related is held between
/// requests.
pub struct LanguageToolAdapter {
    base_url: String,
    request_timeout: Duration,
}

impl LanguageToolAdapter {
    pub fn new(base_url: &str, request_timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout,
        }
    }
}

#[derive(Deserialize)]
struct CheckResponse {
    matches: Vec<EngineMatch>,
}

#[derive(Deserialize)]
struct EngineMatch {
    message: String,
    offset: usize,
    replacements: Vec<Replacement>,
    context: MatchContext,
}

#[derive(Deserialize)]
struct Replacement {
    value: String,
}

#[derive(Deserialize)]
struct MatchContext {
    text: String,
}

#[async_trait::async_trait]
impl GrammarChecker for LanguageToolAdapter {
    #[tracing::instrument(skip(self, text), fields(lang = %lang))]
    async fn check_grammar(
        &self,
        text: &str,
        lang: LanguageCode,
    ) -> Result<GrammarCheckResult, GrammarCheckerError> {
        let client = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()
            .map_err(|e| GrammarCheckerError::EngineUnavailable(e.to_string()))?;

        let params = [("text", text), ("language", lang.as_str())];
        let response = client
            .post(format!("{}/v2/check", self.base_url))
            .form(&params)
            .send()
            .await
            .map_err(|e| GrammarCheckerError::EngineUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GrammarCheckerError::EngineUnavailable(format!(
                "engine returned {}",
                response.status()
            )));
        }

        let check: CheckResponse = response
            .json()
            .await
            .map_err(|e| GrammarCheckerError::EngineUnavailable(e.to_string()))?;

        // Matches arrive in ascending offset order and stay that way.
        let errors = check
            .matches
            .into_iter()
            .map(|m| {
                let (line, column) = locate(text, m.offset);
                GrammarIssue {
                    line,
                    column,
                    message: m.message,
                    suggestion: m.replacements.into_iter().next().map(|r| r.value),
                    context: m.context.text,
                }
            })
            .collect();

        Ok(GrammarCheckResult::from_issues(errors))
    }
}

/// Maps a character offset to 1-based line and column numbers. The line is
/// the newline count before the offset plus one; the column is the offset
/// minus the position of the nearest preceding newline, with "no newline"
/// counting as position -1 so first-line columns are still 1-based.
pub fn locate(text: &str, offset: usize) -> (u32, u32) {
    let mut line = 1u32;
    let mut last_newline: i64 = -1;

    for (i, ch) in text.chars().take(offset).enumerate() {
        if ch == '\n' {
            line += 1;
            last_newline = i as i64;
        }
    }

    let column = (offset as i64 - last_newline) as u32;
    (line, column)
}
