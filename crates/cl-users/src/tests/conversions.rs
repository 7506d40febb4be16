use crate::tests::fakes::{FakeDirectory, RecordingCache, resolver, scm_user};
use crate::{git_user_to_user, user_to_git_user};

use cl_core::{AccountReference, CanonicalUser, Driver, UserProfile};

use std::sync::Arc;

fn profile_with_accounts(accounts: Vec<AccountReference>) -> UserProfile {
    UserProfile {
        name: "Dave D".to_string(),
        email: "dave@x.com".to_string(),
        url: "https://github.com/dave".to_string(),
        avatar_url: "https://avatars.example.com/dave".to_string(),
        accounts,
    }
}

#[test]
fn test_git_user_to_user_copies_identity_fields() {
    let user = git_user_to_user(&scm_user("dave", "Dave D", "dave@x.com"));

    assert_eq!(
        user,
        CanonicalUser::new("Dave D", "dave", "Dave D", "dave@x.com")
    );
}

#[test]
fn test_user_to_git_user_maps_profile() {
    let profile = profile_with_accounts(Vec::new());

    let git_user = user_to_git_user("dave", &profile);

    assert_eq!(git_user.login, "dave");
    assert_eq!(git_user.name, "Dave D");
    assert_eq!(git_user.email, "dave@x.com");
    assert_eq!(git_user.link, "https://github.com/dave");
    assert_eq!(git_user.avatar, "https://avatars.example.com/dave");
}

#[test]
fn test_git_provider_key_follows_directory_driver() {
    let directory = Arc::new(FakeDirectory::new().with_driver(Driver::Gitlab));
    let cache = Arc::new(RecordingCache::new());

    assert_eq!(
        resolver(&directory, &cache).git_provider_key(),
        "jenkins.io/git-gitlab-userid"
    );
}

#[test]
fn test_git_user_login_picks_account_for_provider() {
    let directory = Arc::new(FakeDirectory::new());
    let cache = Arc::new(RecordingCache::new());
    let profile = profile_with_accounts(vec![
        AccountReference::new("jenkins.io/git-gitlab-userid", "dave-gl"),
        AccountReference::new("jenkins.io/git-github-userid", "dave-gh"),
    ]);

    assert_eq!(resolver(&directory, &cache).git_user_login(&profile), "dave-gh");
}

#[test]
fn test_git_user_login_empty_without_matching_account() {
    let directory = Arc::new(FakeDirectory::new().with_driver(Driver::Gitea));
    let cache = Arc::new(RecordingCache::new());
    let profile = profile_with_accounts(vec![AccountReference::new(
        "jenkins.io/git-github-userid",
        "dave-gh",
    )]);

    assert_eq!(resolver(&directory, &cache).git_user_login(&profile), "");
}
