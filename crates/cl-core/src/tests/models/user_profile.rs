use crate::{AccountReference, UserProfile};

#[test]
fn test_account_id_found() {
    let profile = UserProfile {
        accounts: vec![
            AccountReference::new("jenkins.io/git-gitlab-userid", "dave-gl"),
            AccountReference::new("jenkins.io/git-github-userid", "dave"),
        ],
        ..UserProfile::default()
    };

    assert_eq!(
        profile.account_id("jenkins.io/git-github-userid"),
        Some("dave")
    );
}

#[test]
fn test_account_id_missing() {
    let profile = UserProfile::default();

    assert_eq!(profile.account_id("jenkins.io/git-github-userid"), None);
}
