use crate::Driver;

/// Key under which a user's account id on `driver` is stored in
/// [`crate::UserProfile::accounts`].
pub fn git_provider_key(driver: Driver) -> String {
    format!("jenkins.io/git-{driver}-userid")
}
