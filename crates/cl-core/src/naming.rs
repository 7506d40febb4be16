//! Conversion of arbitrary text into identifiers that are safe to use as
//! storage keys and resource names.

/// Longest name [`to_valid_name`] will produce.
pub const MAX_NAME_LENGTH: usize = 63;

/// Turn `name` into a lowercase resource name.
///
/// ASCII letters and digits are kept (lowercased). Any run of other
/// characters collapses into a single `-`, and the result never starts or
/// ends with `-`. Output is capped at [`MAX_NAME_LENGTH`].
///
/// The function is total and idempotent: feeding its output back in
/// returns the same string.
pub fn to_valid_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len().min(MAX_NAME_LENGTH));
    let mut pending_dash = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    // ASCII only, so truncating on a byte index is safe
    out.truncate(MAX_NAME_LENGTH);
    while out.ends_with('-') {
        out.pop();
    }
    out
}
