use notedown::domain::{GrammarCheckResult, GrammarIssue};

fn sample_issue() -> GrammarIssue {
    GrammarIssue {
        line: 3,
        column: 9,
        message: "Possible agreement error".to_string(),
        suggestion: Some("a".to_string()),
        context: "This is an sentence".to_string(),
    }
}

#[test]
fn given_no_issues_when_building_result_then_clean_with_message() {
    let result = GrammarCheckResult::from_issues(Vec::new());

    assert!(!result.has_errors);
    assert_eq!(result.total_issues, 0);
    assert!(result.errors.is_empty());
    assert_eq!(
        result.message.as_deref(),
        Some(GrammarCheckResult::CLEAN_MESSAGE)
    );
}

#[test]
fn given_issues_when_building_result_then_counts_match_and_message_absent() {
    let result = GrammarCheckResult::from_issues(vec![sample_issue(), sample_issue()]);

    assert!(result.has_errors);
    assert_eq!(result.total_issues, 2);
    assert_eq!(result.errors.len(), 2);
    assert!(result.message.is_none());
}

#[test]
fn given_issues_when_serializing_then_message_key_is_omitted() {
    let result = GrammarCheckResult::from_issues(vec![sample_issue()]);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["has_errors"], true);
    assert_eq!(json["total_issues"], 1);
    assert!(json.get("message").is_none());
    assert_eq!(json["errors"][0]["line"], 3);
    assert_eq!(json["errors"][0]["column"], 9);
}

#[test]
fn given_clean_result_when_serializing_then_message_is_present() {
    let result = GrammarCheckResult::from_issues(Vec::new());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["has_errors"], false);
    assert_eq!(json["message"], GrammarCheckResult::CLEAN_MESSAGE);
}

#[test]
fn given_serialized_result_when_deserializing_then_round_trips() {
    let original = GrammarCheckResult::from_issues(vec![sample_issue()]);
    let json = serde_json::to_string(&original).unwrap();
    let restored: GrammarCheckResult = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, original);
}
