use cl_core::{ScmUser, to_valid_name};

/// Stable cache key for a user returned by the hosting platform.
///
/// The login is preferred; without one the display name is hyphenated and
/// lowercased instead. The result is sanitized twice so the key stays
/// stable even if the sanitizer ever stops being idempotent.
///
/// Without a login, a display name with no ASCII letters or digits (e.g.
/// "张伟") yields an empty key. Caches refuse empty keys, so resolving such
/// a platform user fails with [`crate::ResolveError::CreateUser`].
pub fn user_key(user: &ScmUser) -> String {
    let login = if user.login.is_empty() {
        user.name.replace(' ', "-").to_lowercase()
    } else {
        user.login.clone()
    };

    let id = to_valid_name(&login);
    to_valid_name(&id)
}
