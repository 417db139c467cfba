use notedown::application::ports::GrammarChecker;
use notedown::domain::{GrammarIssue, LanguageCode};
use notedown::infrastructure::grammar::MockGrammarChecker;

#[tokio::test]
async fn given_clean_checker_when_checking_then_zero_issues_and_message() {
    let checker = MockGrammarChecker::clean();

    let result = checker
        .check_grammar("# Fine", LanguageCode::Auto)
        .await
        .unwrap();

    assert!(!result.has_errors);
    assert!(result.message.is_some());
}

#[tokio::test]
async fn given_configured_issues_when_checking_then_issues_are_returned_verbatim() {
    let issue = GrammarIssue {
        line: 2,
        column: 5,
        message: "Spelling".to_string(),
        suggestion: Some("error".to_string()),
        context: "eror".to_string(),
    };
    let checker = MockGrammarChecker::with_issues(vec![issue.clone()]);

    let result = checker
        .check_grammar("text", LanguageCode::EnGb)
        .await
        .unwrap();

    assert_eq!(result.errors, vec![issue]);
    assert_eq!(result.total_issues, 1);
}

#[tokio::test]
async fn given_multiple_calls_when_counting_then_every_call_is_recorded() {
    let checker = MockGrammarChecker::clean();

    checker
        .check_grammar("one", LanguageCode::Auto)
        .await
        .unwrap();
    checker
        .check_grammar("two", LanguageCode::Auto)
        .await
        .unwrap();

    assert_eq!(checker.call_count(), 2);
}
