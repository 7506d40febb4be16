use crate::logger::format_line;

use log::Level;

#[test]
fn given_full_record_when_formatted_then_date_level_message_and_location() {
    // When
    let line = format_line(
        "2026-10-18T09:30:00Z",
        Level::Warn,
        "cache miss for dave",
        Some("crates/cl-users/src/git_user_resolver.rs"),
        Some(64),
    );

    // Then
    assert_eq!(
        line,
        "[2026-10-18T09:30:00Z - WARN] cache miss for dave [crates/cl-users/src/git_user_resolver.rs:64]"
    );
}

#[test]
fn given_record_without_location_when_formatted_then_placeholders_used() {
    // When
    let line = format_line("2026-10-18T09:30:00Z", Level::Info, "ready", None, None);

    // Then
    assert_eq!(line, "[2026-10-18T09:30:00Z - INFO] ready [unknown:0]");
}
