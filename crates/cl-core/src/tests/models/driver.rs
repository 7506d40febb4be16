use crate::{CoreError, Driver};

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_known_driver_names_when_parsed_then_ok() {
    assert_that!(Driver::from_str("github").unwrap(), eq(Driver::Github));
    assert_that!(Driver::from_str("GitLab").unwrap(), eq(Driver::Gitlab));
    assert_that!(Driver::from_str(" gitea ").unwrap(), eq(Driver::Gitea));
    assert_that!(Driver::from_str("gogs").unwrap(), eq(Driver::Gogs));
}

#[test]
fn given_unknown_driver_when_parsed_then_invalid_driver_error() {
    let result = Driver::from_str("subversion");

    assert!(matches!(result, Err(CoreError::InvalidDriver { .. })));
}

#[test]
fn given_driver_when_displayed_then_lowercase_name() {
    assert_eq!(Driver::Github.to_string(), "github");
    assert_eq!(Driver::Gitlab.to_string(), "gitlab");
}

#[test]
fn given_driver_when_deserialized_from_lowercase_then_ok() {
    let driver: Driver = serde_json::from_str("\"gitea\"").unwrap();

    assert_that!(driver, eq(Driver::Gitea));
}

#[test]
fn test_default_driver_is_github() {
    assert_eq!(Driver::default(), Driver::Github);
}
