use cl_core::{CanonicalUser, ScmUser, UserProfile};

/// Map a platform user onto a canonical record keyed by its name.
pub fn git_user_to_user(git_user: &ScmUser) -> CanonicalUser {
    CanonicalUser {
        key: git_user.name.clone(),
        login: git_user.login.clone(),
        name: git_user.name.clone(),
        email: git_user.email.clone(),
    }
}

/// Build the platform-side view of a profile, using `id` as the login.
pub fn user_to_git_user(id: &str, user: &UserProfile) -> ScmUser {
    ScmUser {
        login: id.to_string(),
        email: user.email.clone(),
        name: user.name.clone(),
        link: user.url.clone(),
        avatar: user.avatar_url.clone(),
    }
}
