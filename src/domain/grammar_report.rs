use serde::{Deserialize, Serialize};

/// One problem the grammar engine found. Line and column are 1-based; the
/// column is measured from the last newline preceding the issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarIssue {
    pub line: u32,
    pub column: u32,
    pub message: String,
    pub suggestion: Option<String>,
    pub context: String,
}

/// Aggregate outcome of one grammar check, in detection order.
///
/// Built only through [`GrammarCheckResult::from_issues`], which keeps
/// `has_errors`, `total_issues` and the issue list consistent and attaches
/// the informational message exactly when the list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarCheckResult {
    pub has_errors: bool,
    pub total_issues: usize,
    pub errors: Vec<GrammarIssue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GrammarCheckResult {
    pub const CLEAN_MESSAGE: &'static str = "Grammar check completed";

    /// Issues must already be ordered by their position in the source text.
    pub fn from_issues(errors: Vec<GrammarIssue>) -> Self {
        let message = if errors.is_empty() {
            Some(Self::CLEAN_MESSAGE.to_string())
        } else {
            None
        };

        Self {
            has_errors: !errors.is_empty(),
            total_issues: errors.len(),
            errors,
            message,
        }
    }
}
