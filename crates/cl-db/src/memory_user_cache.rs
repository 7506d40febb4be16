use crate::{DbError, Result as DbErrorResult, UserCache};

use cl_core::CanonicalUser;

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local [`UserCache`], used for dry runs and tests.
#[derive(Default)]
pub struct MemoryUserCache {
    users: RwLock<HashMap<String, CanonicalUser>>,
}

impl MemoryUserCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cache pre-populated with `users`.
    pub fn with_users(users: impl IntoIterator<Item = CanonicalUser>) -> Self {
        let users = users.into_iter().map(|u| (u.key.clone(), u)).collect();
        Self {
            users: RwLock::new(users),
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserCache for MemoryUserCache {
    async fn get_user(&self, key: &str) -> Option<CanonicalUser> {
        self.users.read().await.get(key).cloned()
    }

    async fn create_or_update_user(&self, user: &CanonicalUser) -> DbErrorResult<()> {
        if user.key.is_empty() {
            return Err(DbError::invalid_record("user key is empty"));
        }

        let mut users = self.users.write().await;
        users
            .entry(user.key.clone())
            .and_modify(|existing| existing.merge(user))
            .or_insert_with(|| user.clone());

        Ok(())
    }
}
