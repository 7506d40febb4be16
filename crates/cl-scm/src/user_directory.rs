use crate::{ScmResponse, ScmResult};

use cl_core::{Driver, ScmUser};

use async_trait::async_trait;

/// Lookup of users on a git hosting platform.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Platform flavour, used to namespace linked account ids.
    fn driver(&self) -> Driver;

    /// Find a user by login.
    ///
    /// A missing user is reported either as `Ok((None, _))` or as an error
    /// for which [`crate::is_scm_not_found`] is true.
    async fn find_login(&self, login: &str) -> ScmResult<(Option<ScmUser>, ScmResponse)>;
}
