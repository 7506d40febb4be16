use crate::Result as DbErrorResult;

use cl_core::CanonicalUser;

use async_trait::async_trait;

/// Key-value store of canonical users, indexed by [`CanonicalUser::key`].
///
/// Implementations may be shared by concurrent resolutions; conflicting
/// writes to the same key are last-write-wins.
#[async_trait]
pub trait UserCache: Send + Sync {
    /// Look up a user. A miss is `None`, never an error.
    async fn get_user(&self, key: &str) -> Option<CanonicalUser>;

    /// Insert `user`, or merge it into the record already stored under its key.
    async fn create_or_update_user(&self, user: &CanonicalUser) -> DbErrorResult<()>;
}
