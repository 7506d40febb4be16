use crate::{ResolveError, ResolveResult, git_user_to_user, user_key};

use cl_core::{CanonicalUser, GitSignature, ScmUser, UserProfile, git_provider_key};
use cl_db::UserCache;
use cl_scm::{UserDirectory, is_scm_not_found};

use std::sync::Arc;

use log::debug;

/// Converts git users into canonical users.
///
/// The cache is consulted first; the hosting platform is only asked when
/// the identity carries a login, since commit metadata is often incomplete.
#[derive(Clone)]
pub struct GitUserResolver {
    directory: Arc<dyn UserDirectory>,
    cache: Arc<dyn UserCache>,
}

impl GitUserResolver {
    pub fn new(directory: Arc<dyn UserDirectory>, cache: Arc<dyn UserCache>) -> Self {
        Self { directory, cache }
    }

    /// Resolve the author or committer of a commit.
    pub async fn resolve_signature(
        &self,
        signature: &GitSignature,
    ) -> ResolveResult<Option<CanonicalUser>> {
        // nothing to go on
        if signature.is_empty() {
            return Ok(None);
        }

        let git_user = ScmUser {
            name: signature.name.clone(),
            email: signature.email.clone(),
            ..ScmUser::default()
        };
        self.resolve(&git_user).await
    }

    /// Resolve every user in order, dropping the ones that cannot be
    /// resolved. The first error aborts the whole batch.
    pub async fn resolve_batch(&self, users: &[ScmUser]) -> ResolveResult<Vec<CanonicalUser>> {
        let mut answer = Vec::with_capacity(users.len());
        for user in users {
            if let Some(resolved) = self.resolve(user).await? {
                answer.push(resolved);
            }
        }
        Ok(answer)
    }

    /// Resolve a single git user.
    ///
    /// Returns `Ok(None)` for anonymous users and for logins the platform
    /// does not know.
    pub async fn resolve(&self, user: &ScmUser) -> ResolveResult<Option<CanonicalUser>> {
        if user.name.is_empty() {
            return Ok(None);
        }

        if let Some(cached) = self.cache.get_user(&user.name).await {
            debug!("User cache hit for {}", user.name);
            return Ok(Some(cached));
        }

        if user.login.is_empty() {
            let resolved = git_user_to_user(user);
            if let Err(source) = self.cache.create_or_update_user(&resolved).await {
                return Err(ResolveError::cache_user(resolved, source));
            }
            return Ok(Some(resolved));
        }

        // A platform user is stored under its sanitized login, which may
        // differ from the display name looked up above. Only a record of the
        // same login counts: a signature-only record can share the key.
        let login_key = user_key(&ScmUser::with_login(user.login.as_str(), ""));
        if !login_key.is_empty()
            && login_key != user.name
            && let Some(cached) = self.cache.get_user(&login_key).await
            && cached.login == user.login
        {
            debug!("User cache hit for login {}", user.login);
            return Ok(Some(cached));
        }

        let scm_user = match self.directory.find_login(&user.login).await {
            Ok((Some(scm_user), _)) => scm_user,
            Ok((None, _)) => return Ok(None),
            Err(e) if is_scm_not_found(&e) => {
                debug!("No {} user with login {}", self.directory.driver(), user.login);
                return Ok(None);
            }
            Err(source) => return Err(ResolveError::find_user(&user.login, source)),
        };

        let mut resolved = git_user_to_user(&scm_user);
        resolved.key = user_key(&scm_user);

        if let Err(source) = self.cache.create_or_update_user(&resolved).await {
            return Err(ResolveError::create_user(source));
        }
        Ok(Some(resolved))
    }

    /// Login of `user` on this resolver's platform, or empty if the profile
    /// has no account there.
    pub fn git_user_login(&self, user: &UserProfile) -> String {
        user.account_id(&self.git_provider_key())
            .map(String::from)
            .unwrap_or_default()
    }

    pub fn git_provider_key(&self) -> String {
        git_provider_key(self.directory.driver())
    }
}
