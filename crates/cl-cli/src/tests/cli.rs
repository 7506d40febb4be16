use crate::{Cli, Commands};

use std::path::PathBuf;

use clap::Parser;
use googletest::assert_that;
use googletest::prelude::{anything, eq, err};

#[test]
fn given_login_with_name_when_parsed_then_login_command() {
    // When
    let cli = Cli::try_parse_from(["changelog-users", "login", "octocat", "--name", "Mona"]).unwrap();

    // Then
    assert_eq!(
        cli.command,
        Commands::Login {
            login: "octocat".to_string(),
            name: Some("Mona".to_string()),
        }
    );
    assert!(!cli.pretty);
}

#[test]
fn given_signature_flags_when_parsed_then_signature_command() {
    // When
    let cli = Cli::try_parse_from([
        "changelog-users",
        "signature",
        "--name",
        "Jane Doe",
        "--email",
        "jane@example.com",
    ])
    .unwrap();

    // Then
    assert_eq!(
        cli.command,
        Commands::Signature {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
        }
    );
}

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_applied() {
    // When
    let cli = Cli::try_parse_from([
        "changelog-users",
        "show",
        "octocat",
        "--pretty",
        "--config-dir",
        "/tmp/changelog",
    ])
    .unwrap();

    // Then
    assert!(cli.pretty);
    assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/changelog")));
    assert_eq!(
        cli.command,
        Commands::Show {
            key: "octocat".to_string()
        }
    );
}

#[test]
fn given_provider_key_when_parsed_then_no_arguments_needed() {
    // When
    let cli = Cli::try_parse_from(["changelog-users", "provider-key"]).unwrap();

    // Then
    assert_that!(cli.command, eq(&Commands::ProviderKey));
}

#[test]
fn given_login_without_value_when_parsed_then_error() {
    // When
    let result = Cli::try_parse_from(["changelog-users", "login"]);

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_unknown_subcommand_when_parsed_then_error() {
    // When
    let result = Cli::try_parse_from(["changelog-users", "sync"]);

    // Then
    assert_that!(result, err(anything()));
}
