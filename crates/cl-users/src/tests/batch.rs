use crate::ResolveError;
use crate::tests::fakes::{FakeDirectory, FakeFailure, RecordingCache, resolver, scm_user};

use std::sync::Arc;

use googletest::prelude::*;

#[tokio::test]
async fn given_users_when_batch_resolved_then_in_order_skipping_unresolvable() {
    // Given
    let directory = Arc::new(
        FakeDirectory::new()
            .with_user("dave", scm_user("dave", "Dave D", "dave@x.com"))
            .with_failure("carol", FakeFailure::NotFound),
    );
    let cache = Arc::new(RecordingCache::new());
    let users = vec![
        scm_user("dave", "dave", ""),
        scm_user("carol", "carol", ""),
        scm_user("", "", ""),
        scm_user("", "bob", "bob@x.com"),
    ];

    // When
    let resolved = resolver(&directory, &cache)
        .resolve_batch(&users)
        .await
        .unwrap();

    // Then
    let keys: Vec<&str> = resolved.iter().map(|u| u.key.as_str()).collect();
    assert_that!(keys, elements_are![eq(&"dave"), eq(&"bob")]);
}

#[tokio::test]
async fn given_failure_in_middle_when_batch_resolved_then_error_and_rest_abandoned() {
    // Given
    let directory = Arc::new(
        FakeDirectory::new()
            .with_user("u1", scm_user("u1", "User One", ""))
            .with_failure("u2", FakeFailure::Server)
            .with_user("u3", scm_user("u3", "User Three", "")),
    );
    let cache = Arc::new(RecordingCache::new());
    let users = vec![
        scm_user("u1", "User One", ""),
        scm_user("u2", "User Two", ""),
        scm_user("u3", "User Three", ""),
    ];

    // When
    let result = resolver(&directory, &cache).resolve_batch(&users).await;

    // Then
    assert!(matches!(result, Err(ResolveError::FindUser { .. })));
    assert_that!(directory.calls(), elements_are![eq("u1"), eq("u2")]);
}

#[tokio::test]
async fn given_empty_batch_when_resolved_then_empty() {
    let directory = Arc::new(FakeDirectory::new());
    let cache = Arc::new(RecordingCache::new());

    let resolved = resolver(&directory, &cache)
        .resolve_batch(&[])
        .await
        .unwrap();

    assert_that!(resolved, is_empty());
}
