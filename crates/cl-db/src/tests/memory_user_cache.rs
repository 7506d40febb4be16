use crate::{DbError, MemoryUserCache, UserCache};

use cl_core::CanonicalUser;

use googletest::prelude::*;

#[tokio::test]
async fn given_empty_cache_when_get_user_then_none() {
    let cache = MemoryUserCache::new();

    let found = cache.get_user("alice").await;

    assert_that!(found, none());
}

#[tokio::test]
async fn given_user_written_when_get_user_then_returns_it() {
    let cache = MemoryUserCache::new();
    let user = CanonicalUser::new("alice", "alice", "Alice A", "alice@x.com");

    cache.create_or_update_user(&user).await.unwrap();

    assert_that!(cache.get_user("alice").await, some(eq(&user)));
    assert_that!(cache.len().await, eq(1));
}

#[tokio::test]
async fn given_existing_user_when_written_again_then_merged_not_duplicated() {
    let cache = MemoryUserCache::with_users([CanonicalUser::new("bob", "", "bob", "")]);

    cache
        .create_or_update_user(&CanonicalUser::new("bob", "", "", "bob@x.com"))
        .await
        .unwrap();

    let expected = CanonicalUser::new("bob", "", "bob", "bob@x.com");
    assert_that!(cache.len().await, eq(1));
    assert_that!(cache.get_user("bob").await, some(eq(&expected)));
}

#[tokio::test]
async fn given_same_user_written_twice_then_idempotent() {
    let cache = MemoryUserCache::new();
    let user = CanonicalUser::new("dave", "dave", "Dave D", "dave@x.com");

    cache.create_or_update_user(&user).await.unwrap();
    cache.create_or_update_user(&user).await.unwrap();

    assert_that!(cache.len().await, eq(1));
    assert_that!(cache.get_user("dave").await, some(eq(&user)));
}

#[tokio::test]
async fn given_empty_key_when_written_then_invalid_record() {
    let cache = MemoryUserCache::new();

    let result = cache
        .create_or_update_user(&CanonicalUser::new("", "", "", ""))
        .await;

    assert!(matches!(result, Err(DbError::InvalidRecord { .. })));
    assert!(cache.is_empty().await);
}
