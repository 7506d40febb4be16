use crate::CanonicalUser;

#[test]
fn test_canonical_user_new() {
    let user = CanonicalUser::new("dave", "dave", "Dave D", "dave@x.com");

    assert_eq!(user.key, "dave");
    assert_eq!(user.login, "dave");
    assert_eq!(user.name, "Dave D");
    assert_eq!(user.email, "dave@x.com");
}

#[test]
fn test_merge_fills_in_new_information() {
    let mut stored = CanonicalUser::new("bob", "", "bob", "");
    let incoming = CanonicalUser::new("bob", "bobby", "", "bob@x.com");

    stored.merge(&incoming);

    assert_eq!(stored, CanonicalUser::new("bob", "bobby", "bob", "bob@x.com"));
}

#[test]
fn test_merge_empty_fields_keep_stored_values() {
    let mut stored = CanonicalUser::new("carol", "carol", "Carol C", "carol@x.com");

    stored.merge(&CanonicalUser::new("carol", "", "", ""));

    assert_eq!(
        stored,
        CanonicalUser::new("carol", "carol", "Carol C", "carol@x.com")
    );
}

#[test]
fn test_merge_never_changes_key() {
    let mut stored = CanonicalUser::new("erin", "erin", "Erin", "");

    stored.merge(&CanonicalUser::new("other", "", "", "erin@x.com"));

    assert_eq!(stored.key, "erin");
    assert_eq!(stored.email, "erin@x.com");
}

#[test]
fn test_serializes_with_plain_field_names() {
    let user = CanonicalUser::new("dave", "dave", "Dave D", "dave@x.com");

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["key"], "dave");
    assert_eq!(json["name"], "Dave D");
}
