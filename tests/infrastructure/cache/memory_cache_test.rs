use std::time::Duration;

use notedown::application::ports::CacheStore;
use notedown::domain::{GrammarCheckResult, GrammarIssue};
use notedown::infrastructure::cache::MemoryCache;

fn sample_result() -> GrammarCheckResult {
    GrammarCheckResult::from_issues(vec![GrammarIssue {
        line: 1,
        column: 4,
        message: "Possible typo".to_string(),
        suggestion: None,
        context: "teh".to_string(),
    }])
}

#[tokio::test]
async fn given_stored_value_when_reading_back_then_round_trips() {
    let cache = MemoryCache::new(Duration::from_secs(300));
    let value = sample_result();

    cache.set("grammar_check:abc:file", &value).await;

    assert_eq!(cache.get("grammar_check:abc:file").await, Some(value));
}

#[tokio::test]
async fn given_unknown_key_when_reading_then_misses() {
    let cache = MemoryCache::new(Duration::from_secs(300));
    assert_eq!(cache.get("grammar_check:missing:text").await, None);
}

#[tokio::test]
async fn given_existing_key_when_overwriting_then_latest_value_wins() {
    let cache = MemoryCache::new(Duration::from_secs(300));
    let first = sample_result();
    let second = GrammarCheckResult::from_issues(Vec::new());

    cache.set("k", &first).await;
    cache.set("k", &second).await;

    assert_eq!(cache.get("k").await, Some(second));
}

#[tokio::test(start_paused = true)]
async fn given_elapsed_ttl_when_reading_then_entry_has_expired() {
    let cache = MemoryCache::new(Duration::from_secs(300));
    let value = sample_result();

    cache.set("k", &value).await;
    assert_eq!(cache.get("k").await, Some(value));

    tokio::time::advance(Duration::from_secs(301)).await;

    assert_eq!(cache.get("k").await, None);
}

#[tokio::test(start_paused = true)]
async fn given_ttl_not_yet_elapsed_when_reading_then_entry_survives() {
    let cache = MemoryCache::new(Duration::from_secs(300));
    let value = sample_result();

    cache.set("k", &value).await;
    tokio::time::advance(Duration::from_secs(299)).await;

    assert_eq!(cache.get("k").await, Some(value));
}

#[tokio::test]
async fn given_pattern_when_clearing_then_only_matches_are_removed_and_counted() {
    let cache = MemoryCache::new(Duration::from_secs(300));
    let value = sample_result();

    cache.set("grammar_check:aaa:file", &value).await;
    cache.set("grammar_check:bbb:text", &value).await;
    cache.set("other:ccc", &value).await;

    let removed = cache.clear("grammar_check:*").await;

    assert_eq!(removed, 2);
    assert_eq!(cache.get("grammar_check:aaa:file").await, None);
    assert_eq!(cache.get("grammar_check:bbb:text").await, None);
    assert_eq!(cache.get("other:ccc").await, Some(value));
}

#[tokio::test]
async fn given_match_all_pattern_when_clearing_then_everything_goes() {
    let cache = MemoryCache::new(Duration::from_secs(300));
    let value = sample_result();

    cache.set("a", &value).await;
    cache.set("b", &value).await;

    assert_eq!(cache.clear("*").await, 2);
    assert_eq!(cache.get("a").await, None);
}

#[tokio::test]
async fn given_invalid_pattern_when_clearing_then_nothing_is_removed() {
    let cache = MemoryCache::new(Duration::from_secs(300));
    let value = sample_result();

    cache.set("a", &value).await;

    assert_eq!(cache.clear("[unclosed").await, 0);
    assert_eq!(cache.get("a").await, Some(value));
}
